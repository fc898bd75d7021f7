//! Jalali (Iranian solar-hijri) calendar arithmetic on the Julian day axis.
//!
//! Leap years follow the 2820-year grand cycle approximation of the solar
//! year: the cycle position of a year decides leapness through a fixed
//! modular test, and the forward conversion combines a 1029983-day
//! mega-cycle term with a per-year leap fraction. Months 1..=6 have 31
//! days, 7..=11 have 30, and month 12 has 29 or 30 depending on leapness.
//!
//! There is no year zero: the year before 1 is -1, and the epoch base
//! constant shifts by one for non-positive years. The forward conversion
//! keys that shift on `year >= 0` while the leap test keys on `year > 0`;
//! the asymmetry is part of the algorithm and must not be "repaired".
//!
//! As with the other engines, conversions are total over integer inputs
//! and do not validate month or day ranges. Only [`last_day_of_month`]
//! rejects an out-of-range month.
//!
//! # Quick start
//!
//! ```
//! use calverter_jalali as jalali;
//!
//! // Nowruz 1403 falls on Gregorian 2024-03-20.
//! let jd = jalali::to_jd(1403, 1, 1);
//! assert_eq!(jd.value(), 2460389.5);
//! assert_eq!(jalali::from_jd(jd), (1403, 1, 1));
//! ```

mod error;

pub use error::JalaliError;

use calverter_jd::JulianDay;

/// Julian day of the Jalali epoch.
pub const JALALI_EPOCH: f64 = 1948320.5;

/// Returns true if `year` is a Jalali leap year under the 2820-year cycle.
pub fn leap_year(year: i32) -> bool {
    let base: i64 = if year > 0 { 474 } else { 473 };
    (((i64::from(year) - base).rem_euclid(2820) + 474 + 38) * 682).rem_euclid(2816) < 682
}

/// Converts a Jalali date to its Julian day.
pub fn to_jd(year: i32, month: i32, day: i32) -> JulianDay {
    let base: i64 = if year >= 0 { 474 } else { 473 };
    let epbase = i64::from(year) - base;
    let epyear = 474 + epbase.rem_euclid(2820);
    let mm = if month <= 7 {
        (i64::from(month) - 1) * 31
    } else {
        (i64::from(month) - 1) * 30 + 6
    };
    let days = i64::from(day)
        + mm
        + (epyear * 682 - 110).div_euclid(2816)
        + (epyear - 1) * 365
        + epbase.div_euclid(2820) * 1_029_983;
    JulianDay::new(days as f64 + (JALALI_EPOCH - 1.0))
}

/// Converts a Julian day to a Jalali `(year, month, day)` triple.
pub fn from_jd(jd: JulianDay) -> (i32, i32, i32) {
    let jd = jd.value().floor() + 0.5;
    let depoch = (jd - to_jd(475, 1, 1).value()) as i64;
    let cycle = depoch.div_euclid(1_029_983);
    let cyear = depoch.rem_euclid(1_029_983);
    let ycycle = if cyear == 1_029_982 {
        2820
    } else {
        let aux1 = cyear.div_euclid(366);
        let aux2 = cyear.rem_euclid(366);
        (2134 * aux1 + 2816 * aux2 + 2815).div_euclid(1_028_522) + aux1 + 1
    };
    let mut year = (ycycle + 2820 * cycle + 474) as i32;
    if year <= 0 {
        year -= 1;
    }
    let yday = jd - to_jd(year, 1, 1).value() + 1.0;
    let month = if yday <= 186.0 {
        (yday / 31.0).ceil() as i32
    } else {
        ((yday - 6.0) / 30.0).ceil() as i32
    };
    let day = (jd - to_jd(year, month, 1).value()) as i32 + 1;
    (year, month, day)
}

/// Returns the number of days in the given Jalali month.
///
/// # Errors
///
/// Returns [`JalaliError::InvalidMonth`] if `month` is outside 1..=12.
pub fn last_day_of_month(year: i32, month: i32) -> Result<i32, JalaliError> {
    match month {
        1..=6 => Ok(31),
        7..=11 => Ok(30),
        12 => Ok(if leap_year(year) { 30 } else { 29 }),
        _ => Err(JalaliError::InvalidMonth { month }),
    }
}
