//! Gregorian calendar arithmetic on the Julian day axis.
//!
//! The conversion pair is the classical integer day-count algorithm: the
//! forward direction is a closed form over elapsed years with a two-step
//! month correction, the inverse decomposes the day offset through the
//! 400/100/4/1-year leap cycles. Both directions are proleptic: year 0 and
//! negative years are valid inputs.
//!
//! Functions here are total over integer inputs. Out-of-range months or
//! days are not rejected; they produce the arithmetically consistent
//! (if calendrically meaningless) result, and validation is left to
//! callers that want it.
//!
//! # Quick start
//!
//! ```
//! use calverter_gregorian as gregorian;
//!
//! let jd = gregorian::to_jd(2024, 1, 1);
//! assert_eq!(jd.value(), 2460310.5);
//! assert_eq!(gregorian::from_jd(jd), (2024, 1, 1));
//! ```

use calverter_jd::JulianDay;

/// Julian day of the Gregorian epoch, 0001-01-01 proleptic.
pub const GREGORIAN_EPOCH: f64 = 1721425.5;

/// Days in each month of a common year (index 0 unused).
const DAYS_PER_MONTH: [i32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if `year` is a Gregorian leap year.
pub fn leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && !(year.rem_euclid(100) == 0 && year.rem_euclid(400) != 0)
}

/// Converts a Gregorian date to its Julian day.
pub fn to_jd(year: i32, month: i32, day: i32) -> JulianDay {
    let tm: i64 = if month <= 2 {
        0
    } else if leap_year(year) {
        -1
    } else {
        -2
    };
    let y = i64::from(year) - 1;
    let days = 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + (367 * i64::from(month) - 362).div_euclid(12)
        + tm
        + i64::from(day);
    JulianDay::new((GREGORIAN_EPOCH - 1.0) + days as f64)
}

/// Converts a Julian day to a Gregorian `(year, month, day)` triple.
pub fn from_jd(jd: JulianDay) -> (i32, i32, i32) {
    let wjd = jd.whole().value();
    let depoch = (wjd - GREGORIAN_EPOCH) as i64;
    let quadricent = depoch.div_euclid(146097);
    let dqc = depoch.rem_euclid(146097);
    let cent = dqc.div_euclid(36524);
    let dcent = dqc.rem_euclid(36524);
    let quad = dcent.div_euclid(1461);
    let dquad = dcent.rem_euclid(1461);
    let yindex = dquad.div_euclid(365);
    let mut year = (quadricent * 400 + cent * 100 + quad * 4 + yindex) as i32;
    // The cycle index lands on the trailing leap day of a cycle exactly when
    // cent == 4 or yindex == 4; only then is `year` already correct.
    if !(cent == 4 || yindex == 4) {
        year += 1;
    }
    let yearday = wjd - to_jd(year, 1, 1).value();
    let leapadj = if wjd < to_jd(year, 3, 1).value() {
        0.0
    } else if leap_year(year) {
        1.0
    } else {
        2.0
    };
    let month = (((yearday + leapadj) * 12.0 + 373.0) / 367.0).floor() as i32;
    let day = (wjd - to_jd(year, month, 1).value()) as i32 + 1;
    (year, month, day)
}

/// Returns the number of days in the given Gregorian month.
///
/// # Panics
///
/// Panics if `month` is outside 1..=12.
pub fn last_day_of_month(year: i32, month: i32) -> i32 {
    if month == 2 && leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}
