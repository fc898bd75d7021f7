//! The arithmetic (30-year cycle) Hijri calendar.

use calverter_jd::JulianDay;

/// Julian day of the Hijri epoch.
pub const HIJRI_EPOCH: f64 = 1948439.5;

/// Returns true if `year` is a leap year in the 30-year arithmetic cycle.
pub fn leap_year(year: i32) -> bool {
    (i64::from(year) * 11 + 14).rem_euclid(30) < 11
}

/// Converts an arithmetic Hijri date to its Julian day.
pub fn to_jd(year: i32, month: i32, day: i32) -> JulianDay {
    let y = i64::from(year);
    let days = i64::from(day)
        + (29.5 * (f64::from(month) - 1.0)).ceil() as i64
        + (y - 1) * 354
        + (3 + 11 * y).div_euclid(30);
    JulianDay::new(days as f64 + HIJRI_EPOCH - 1.0)
}

/// Converts a Julian day to an arithmetic Hijri `(year, month, day)` triple.
///
/// The mean lunar month drives this inverse; within the range covered by an
/// observation table the observed dates can differ from this result by a
/// day (see `from_jd_observed`).
pub fn from_jd(jd: JulianDay) -> (i32, i32, i32) {
    let jd = jd.value().floor() + 0.5;
    let year = ((30.0 * (jd - HIJRI_EPOCH) + 10646.0) / 10631.0).floor() as i32;
    let month = ((((jd - (29.0 + to_jd(year, 1, 1).value())) / 29.5).ceil() + 1.0).min(12.0)) as i32;
    let day = (jd - to_jd(year, month, 1).value()) as i32 + 1;
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_30_year_cycle() {
        // Years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29 of each cycle.
        let leaps: Vec<i32> = (1..=30).filter(|&y| leap_year(y)).collect();
        assert_eq!(leaps, vec![2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29]);
    }

    #[test]
    fn to_jd_epoch() {
        assert_eq!(to_jd(1, 1, 1).value(), HIJRI_EPOCH);
    }

    #[test]
    fn to_jd_observation_anchor() {
        // 1426-02-01, the anchor of the bundled observation dataset.
        let jd = to_jd(1426, 2, 1);
        assert_eq!(jd.day_number(), 2453441);
    }

    #[test]
    fn from_jd_inverts_year_start() {
        assert_eq!(from_jd(to_jd(1426, 1, 1)), (1426, 1, 1));
        assert_eq!(from_jd(to_jd(1, 1, 1)), (1, 1, 1));
    }

    #[test]
    fn month_lengths_alternate() {
        // Odd months have 30 days, even months 29, except month 12 in a
        // leap year which gains a day.
        for month in 1..=11 {
            let len = to_jd(1426, month + 1, 1) - to_jd(1426, month, 1);
            let expected = if month % 2 == 1 { 30.0 } else { 29.0 };
            assert_eq!(len, expected, "month {month}");
        }
        let common = to_jd(1428, 1, 1) - to_jd(1427, 12, 1);
        assert_eq!(common, 29.0); // 1427 is not a leap year
        let leap = to_jd(1427, 1, 1) - to_jd(1426, 12, 1);
        assert_eq!(leap, 30.0); // 1426 is a leap year
    }

    #[test]
    fn consecutive_days_increment_jd_by_one() {
        let mut prev = to_jd(1425, 12, 29);
        for month in 1..=12 {
            let next_month_start = if month == 12 {
                to_jd(1427, 1, 1)
            } else {
                to_jd(1426, month + 1, 1)
            };
            let len = (next_month_start - to_jd(1426, month, 1)) as i32;
            for day in 1..=len {
                let jd = to_jd(1426, month, day);
                assert_eq!(jd - prev, 1.0, "at 1426-{month:02}-{day:02}");
                prev = jd;
            }
        }
    }
}
