//! ISO-8601 week-date conversion built on the Gregorian engine.
//!
//! Week 1 of an ISO year is the week containing the year's first Thursday,
//! found here by anchoring on December 28 of the previous year (always in
//! the last ISO week) and stepping whole weeks from the Sunday before it.
//! Weekdays are numbered 1 = Monday through 7 = Sunday.

use calverter_gregorian as gregorian;
use calverter_jd::{JulianDay, day_of_week, next_weekday, previous_weekday};

/// Julian day that is `nth_week` weeks after (or, for a non-positive
/// `nth_week`, before) the given weekday relative to `jd`.
fn n_weeks(weekday: i32, jd: JulianDay, nth_week: i64) -> JulianDay {
    let base = if nth_week > 0 {
        previous_weekday(weekday, jd)
    } else {
        next_weekday(weekday, jd)
    };
    base + (7 * nth_week) as f64
}

/// Converts an ISO `(year, week, day)` date to its Julian day.
pub fn iso_to_julian(year: i32, week: i32, day: i32) -> JulianDay {
    n_weeks(0, gregorian::to_jd(year - 1, 12, 28), i64::from(week)) + f64::from(day)
}

/// Converts a Julian day to an ISO `(year, week, day)` triple.
pub fn jd_to_iso(jd: JulianDay) -> (i32, i32, i32) {
    let (mut year, _, _) = gregorian::from_jd(jd - 3.0);
    if jd.value() >= iso_to_julian(year + 1, 1, 1).value() {
        year += 1;
    }
    let week = ((jd - iso_to_julian(year, 1, 1)) / 7.0).floor() as i32 + 1;
    let mut day = day_of_week(jd);
    if day == 0 {
        day = 7;
    }
    (year, week, day)
}

/// Converts an ISO ordinal `(year, day_of_year)` date to its Julian day.
pub fn iso_day_to_julian(year: i32, day: i32) -> JulianDay {
    gregorian::to_jd(year, 1, 1) + f64::from(day - 1)
}

/// Converts a Julian day to an ISO ordinal `(year, day_of_year)` pair.
pub fn jd_to_iso_day(jd: JulianDay) -> (i32, i32) {
    let (year, _, _) = gregorian::from_jd(jd);
    let day = (jd - gregorian::to_jd(year, 1, 1)).floor() as i32 + 1;
    (year, day)
}
