//! The conversion service.

use std::fmt;

use calverter_gregorian as gregorian;
use calverter_hijri as hijri;
use calverter_jalali as jalali;

use calverter_hijri::{HijriResolver, ObservationTable};
use calverter_jd::JulianDay;
use tracing::debug;

use crate::calendar::Calendar;
use crate::date::Date;
use crate::error::ConvertError;

/// How a Julian day is resolved to a Hijri date.
#[derive(Clone, Copy, Default)]
pub enum HijriStrategy<'a> {
    /// Observed month lengths inside the table's range, arithmetic
    /// elsewhere. This is the default.
    #[default]
    Observed,
    /// The pure 30-year-cycle arithmetic calendar everywhere.
    Arithmetic,
    /// A caller-supplied resolver, typically standing in for an external
    /// reference implementation under test.
    External(&'a dyn HijriResolver),
}

impl fmt::Debug for HijriStrategy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Observed => f.write_str("Observed"),
            Self::Arithmetic => f.write_str("Arithmetic"),
            Self::External(_) => f.write_str("External(..)"),
        }
    }
}

/// Stateless conversion service routing civil dates through the Julian
/// day axis.
///
/// Any conversion between two calendars goes through [`Calverter::to_jd`]
/// and [`Calverter::jd_to`]; there are no direct calendar-to-calendar
/// formulas. The only state is the injected [`ObservationTable`], built
/// once and read-only, so a `Calverter` is freely shareable across
/// threads.
#[derive(Debug, Clone)]
pub struct Calverter {
    observations: ObservationTable,
}

impl Calverter {
    /// Creates a service backed by the bundled Hijri observation dataset.
    pub fn new() -> Self {
        Self {
            observations: ObservationTable::bundled(),
        }
    }

    /// Creates a service with a caller-supplied observation table.
    pub fn with_observations(observations: ObservationTable) -> Self {
        Self { observations }
    }

    /// Returns the observation table in use.
    pub fn observations(&self) -> &ObservationTable {
        &self.observations
    }

    /// Converts a civil date in `source` to its Julian day.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnsupportedSource`] if `source` is
    /// [`Calendar::JulianDay`], which identifies raw day numbers rather
    /// than a civil calendar.
    pub fn to_jd(
        &self,
        year: i32,
        month: i32,
        day: i32,
        source: Calendar,
    ) -> Result<JulianDay, ConvertError> {
        match source {
            Calendar::Gregorian => Ok(gregorian::to_jd(year, month, day)),
            Calendar::Jalali => Ok(jalali::to_jd(year, month, day)),
            Calendar::Hijri => Ok(hijri::to_jd(year, month, day)),
            Calendar::JulianDay => Err(ConvertError::UnsupportedSource { source }),
        }
    }

    /// Converts a Julian day to a civil date in `target`.
    ///
    /// `strategy` only matters when the target is [`Calendar::Hijri`].
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnsupportedTarget`] if `target` is
    /// [`Calendar::JulianDay`], and forwards any error from an external
    /// Hijri resolver.
    pub fn jd_to(
        &self,
        jd: JulianDay,
        target: Calendar,
        strategy: HijriStrategy<'_>,
    ) -> Result<Date, ConvertError> {
        let date = match target {
            Calendar::Gregorian => gregorian::from_jd(jd),
            Calendar::Jalali => jalali::from_jd(jd),
            Calendar::Hijri => match strategy {
                HijriStrategy::Observed => hijri::from_jd_observed(jd, &self.observations),
                HijriStrategy::Arithmetic => hijri::from_jd(jd),
                HijriStrategy::External(resolver) => resolver.resolve(jd)?,
            },
            Calendar::JulianDay => return Err(ConvertError::UnsupportedTarget { target }),
        };
        Ok(Date::from(date))
    }

    /// Converts a civil date from `source` to `target` through the Julian
    /// day axis. This is the entry point external callers should use.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Calverter::to_jd`] and
    /// [`Calverter::jd_to`].
    pub fn convert(
        &self,
        year: i32,
        month: i32,
        day: i32,
        source: Calendar,
        target: Calendar,
        strategy: HijriStrategy<'_>,
    ) -> Result<Date, ConvertError> {
        debug!(year, month, day, ?source, ?target, "converting");
        let jd = self.to_jd(year, month, day, source)?;
        self.jd_to(jd, target, strategy)
    }

    /// First and last day of a Jalali month window, both as Gregorian
    /// dates.
    ///
    /// The opening bound is day 1 of the Jalali month containing `anchor`.
    /// With `month_span > 1` the anchor is advanced by `month_span - 1`
    /// Gregorian months (clamping the day to the target month's length)
    /// and the closing Jalali month is re-derived from the shifted anchor;
    /// the closing bound is the last day of that month. Stepping in
    /// Gregorian months while bounding in Jalali months means the window
    /// does not cover a whole number of Jalali months; the behavior is
    /// kept for compatibility with period-based reporting callers.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Jalali`] if the derived Jalali month falls
    /// outside 1..=12, which cannot happen for a real anchor date.
    pub fn jalali_month_bounds(
        &self,
        anchor: Date,
        month_span: u32,
    ) -> Result<(Date, Date), ConvertError> {
        let anchor_jd = gregorian::to_jd(anchor.year, anchor.month, anchor.day);
        let (year, month, _) = jalali::from_jd(anchor_jd);
        let first = Date::from(gregorian::from_jd(jalali::to_jd(year, month, 1)));
        let (year, month) = if month_span > 1 {
            let shifted = add_months(anchor, i64::from(month_span) - 1);
            let shifted_jd = gregorian::to_jd(shifted.year, shifted.month, shifted.day);
            let (year, month, _) = jalali::from_jd(shifted_jd);
            (year, month)
        } else {
            (year, month)
        };
        let last_day = jalali::last_day_of_month(year, month)?;
        let last = Date::from(gregorian::from_jd(jalali::to_jd(year, month, last_day)));
        Ok((first, last))
    }
}

impl Default for Calverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Advances a Gregorian date by whole months, clamping the day to the
/// length of the target month.
fn add_months(date: Date, months: i64) -> Date {
    let index = i64::from(date.year) * 12 + i64::from(date.month) - 1 + months;
    let year = index.div_euclid(12) as i32;
    let month = (index.rem_euclid(12) + 1) as i32;
    let day = date.day.min(gregorian::last_day_of_month(year, month));
    Date::new(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_months_within_year() {
        let date = add_months(Date::new(2024, 3, 25), 2);
        assert_eq!(date, Date::new(2024, 5, 25));
    }

    #[test]
    fn add_months_across_year() {
        let date = add_months(Date::new(2024, 11, 15), 3);
        assert_eq!(date, Date::new(2025, 2, 15));
    }

    #[test]
    fn add_months_clamps_day() {
        // January 31 plus one month lands on the last day of February.
        assert_eq!(add_months(Date::new(2024, 1, 31), 1), Date::new(2024, 2, 29));
        assert_eq!(add_months(Date::new(2023, 1, 31), 1), Date::new(2023, 2, 28));
    }

    #[test]
    fn add_months_backward() {
        let date = add_months(Date::new(2024, 1, 15), -2);
        assert_eq!(date, Date::new(2023, 11, 15));
    }

    #[test]
    fn default_strategy_is_observed() {
        assert!(matches!(HijriStrategy::default(), HijriStrategy::Observed));
    }
}
