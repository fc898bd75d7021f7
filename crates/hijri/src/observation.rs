//! Observed Hijri month lengths.
//!
//! The arithmetic calendar predicts month starts from the mean lunation;
//! the religiously observed calendar fixes them by sighting, which can
//! shift a month boundary by a day in either direction. This module holds
//! a table of recorded month lengths anchored at a known Julian day and
//! resolves days inside the recorded range by walking the table.

use calverter_jd::JulianDay;
use tracing::debug;

use crate::arith;
use crate::error::HijriError;

/// Recorded month lengths per Hijri year, starting at Muharram.
///
/// A zero marks a slot before the anchor month with no recorded
/// observation; the final year may stop short of twelve entries.
#[rustfmt::skip]
const BUNDLED_MONTH_LENGTHS: &[(i32, &[u8])] = &[
    (1426, &[0, 29, 30, 29, 30, 30, 30, 30, 29, 30, 29, 29]),
    (1427, &[30, 29, 29, 30, 29, 30, 30, 30, 30, 29, 29, 30]),
    (1428, &[29, 30, 29, 29, 29, 30, 30, 29, 30, 30, 30, 29]),
    (1429, &[30, 29, 30, 29, 29, 29, 30, 30, 29, 30, 30, 29]),
    (1430, &[30, 30, 29, 29, 30, 29, 30, 29, 29, 30, 30, 29]),
    (1431, &[30, 30, 29]),
];

/// Anchor of the bundled dataset: 1426-02-01 AH fell on this day.
const BUNDLED_ANCHOR_YEAR: i32 = 1426;
const BUNDLED_ANCHOR_MONTH: i32 = 2;
const BUNDLED_ANCHOR_JDN: i64 = 2_453_441;

/// An immutable table of observed Hijri month lengths.
///
/// The table is authoritative over the half-open day-number interval
/// `[start, end)`, where `end` is the anchor day plus the sum of all
/// recorded lengths. Days outside that interval are not covered and must
/// be resolved arithmetically.
#[derive(Debug, Clone)]
pub struct ObservationTable {
    /// Linear month index (`year * 12 + month - 1`) of the anchor month.
    anchor_index: i64,
    anchor_jdn: i64,
    end_jdn: i64,
    month_lengths: Vec<u8>,
}

impl ObservationTable {
    /// Builds a table from an anchor and per-year recorded month lengths.
    ///
    /// `rows` lists years in ascending order, each with up to twelve month
    /// lengths starting at Muharram. Zero entries are allowed only before
    /// the anchor month; every recorded entry must be 29 or 30 days and
    /// the recorded months must be contiguous from the anchor onward.
    ///
    /// # Errors
    ///
    /// Returns [`HijriError::InvalidMonthLength`] for a length other than
    /// 0, 29 or 30, and [`HijriError::NonContiguous`] when a recorded
    /// month does not directly follow the previous one.
    pub fn new(
        anchor_year: i32,
        anchor_month: i32,
        anchor_jdn: i64,
        rows: &[(i32, &[u8])],
    ) -> Result<Self, HijriError> {
        let anchor_index = i64::from(anchor_year) * 12 + i64::from(anchor_month) - 1;
        let mut month_lengths = Vec::new();
        for &(year, lengths) in rows {
            for (m, &length) in lengths.iter().enumerate() {
                let month = m as i32 + 1;
                let index = i64::from(year) * 12 + i64::from(month) - 1;
                match length {
                    0 if index < anchor_index => continue,
                    0 => return Err(HijriError::NonContiguous { year, month }),
                    29 | 30 => {}
                    _ => {
                        return Err(HijriError::InvalidMonthLength {
                            year,
                            month,
                            length,
                        });
                    }
                }
                if index != anchor_index + month_lengths.len() as i64 {
                    return Err(HijriError::NonContiguous { year, month });
                }
                month_lengths.push(length);
            }
        }
        let end_jdn = anchor_jdn + month_lengths.iter().map(|&l| i64::from(l)).sum::<i64>();
        Ok(Self {
            anchor_index,
            anchor_jdn,
            end_jdn,
            month_lengths,
        })
    }

    /// The observation dataset shipped with this crate, covering Hijri
    /// years 1426 through early 1431.
    pub fn bundled() -> Self {
        Self::new(
            BUNDLED_ANCHOR_YEAR,
            BUNDLED_ANCHOR_MONTH,
            BUNDLED_ANCHOR_JDN,
            BUNDLED_MONTH_LENGTHS,
        )
        .expect("bundled observation dataset is valid")
    }

    /// First day number covered by the table.
    pub fn start(&self) -> i64 {
        self.anchor_jdn
    }

    /// First day number past the covered range.
    pub fn end(&self) -> i64 {
        self.end_jdn
    }

    /// Number of recorded months.
    pub fn months(&self) -> usize {
        self.month_lengths.len()
    }

    /// Returns true if the table covers the day containing `jd`.
    pub fn covers(&self, jd: JulianDay) -> bool {
        (self.anchor_jdn..self.end_jdn).contains(&jd.day_number())
    }

    /// Resolves a covered Julian day to its observed Hijri date, or `None`
    /// if `jd` falls outside `[start, end)`.
    ///
    /// The walk consumes recorded lengths from the anchor month; the table
    /// spans only a few years, so this is a handful of iterations.
    pub fn resolve(&self, jd: JulianDay) -> Option<(i32, i32, i32)> {
        let jdn = jd.day_number();
        if !(self.anchor_jdn..self.end_jdn).contains(&jdn) {
            return None;
        }
        let mut offset = jdn - self.anchor_jdn;
        let mut index = self.anchor_index;
        for &length in &self.month_lengths {
            let length = i64::from(length);
            if offset < length {
                break;
            }
            offset -= length;
            index += 1;
        }
        let year = index.div_euclid(12) as i32;
        let month = (index.rem_euclid(12) + 1) as i32;
        Some((year, month, (offset + 1) as i32))
    }
}

/// Converts a Julian day to a Hijri date, preferring observed month
/// lengths and falling back to the arithmetic calendar outside the range
/// covered by `table`.
pub fn from_jd_observed(jd: JulianDay, table: &ObservationTable) -> (i32, i32, i32) {
    match table.resolve(jd) {
        Some(date) => date,
        None => {
            debug!(jdn = jd.day_number(), "day not covered by observation table, using arithmetic inverse");
            arith::from_jd(jd)
        }
    }
}
