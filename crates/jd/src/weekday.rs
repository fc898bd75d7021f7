//! Day-of-week and weekday-search helpers on the day-count timeline.

use crate::julian_day::JulianDay;

/// Returns the day of week for a Julian day: 0 = Sunday .. 6 = Saturday.
pub fn day_of_week(jd: JulianDay) -> i32 {
    (((jd.value() + 1.5).floor() as i64).rem_euclid(7)) as i32
}

/// Returns the Julian day of the given weekday (0 = Sunday) in the seven
/// days ending on `jd`.
pub fn weekday_before(weekday: i32, jd: JulianDay) -> JulianDay {
    jd - f64::from(day_of_week(jd - f64::from(weekday)))
}

/// Returns the Julian day of the desired weekday relative to `jd`.
///
/// `direction` is 1 to search forward and -1 to search backward; `offset`
/// shifts the start of the seven-day search window.
pub fn search_weekday(weekday: i32, jd: JulianDay, direction: i32, offset: i32) -> JulianDay {
    weekday_before(weekday, jd + f64::from(direction * offset))
}

/// Nearest occurrence of `weekday` to `jd`.
pub fn nearest_weekday(weekday: i32, jd: JulianDay) -> JulianDay {
    search_weekday(weekday, jd, 1, 3)
}

/// Next occurrence of `weekday` strictly after `jd`.
pub fn next_weekday(weekday: i32, jd: JulianDay) -> JulianDay {
    search_weekday(weekday, jd, 1, 7)
}

/// Next occurrence of `weekday` on or after `jd`.
pub fn next_or_current_weekday(weekday: i32, jd: JulianDay) -> JulianDay {
    search_weekday(weekday, jd, 1, 6)
}

/// Previous occurrence of `weekday` strictly before `jd`.
pub fn previous_weekday(weekday: i32, jd: JulianDay) -> JulianDay {
    search_weekday(weekday, jd, -1, 1)
}

/// Previous occurrence of `weekday` on or before `jd`.
pub fn previous_or_current_weekday(weekday: i32, jd: JulianDay) -> JulianDay {
    search_weekday(weekday, jd, 1, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Gregorian 2024-01-01, a Monday.
    const MON: JulianDay = JulianDay::new(2460310.5);

    #[test]
    fn day_of_week_known_values() {
        assert_eq!(day_of_week(MON), 1);
        assert_eq!(day_of_week(MON - 1.0), 0); // Sunday 2023-12-31
        assert_eq!(day_of_week(MON + 5.0), 6); // Saturday 2024-01-06
    }

    #[test]
    fn day_of_week_cycles_over_a_week() {
        for offset in 0..7 {
            let this_week = day_of_week(MON + f64::from(offset));
            let next_week = day_of_week(MON + f64::from(offset + 7));
            assert_eq!(this_week, next_week);
        }
    }

    #[test]
    fn weekday_before_is_within_seven_days() {
        for weekday in 0..7 {
            let found = weekday_before(weekday, MON);
            assert_eq!(day_of_week(found), weekday);
            let gap = MON - found;
            assert!((0.0..7.0).contains(&gap), "gap {gap} for weekday {weekday}");
        }
    }

    #[test]
    fn previous_weekday_is_strictly_before() {
        let prev_monday = previous_weekday(1, MON);
        assert_eq!(day_of_week(prev_monday), 1);
        assert_eq!(MON - prev_monday, 7.0);
    }

    #[test]
    fn previous_or_current_keeps_current() {
        assert_eq!(previous_or_current_weekday(1, MON), MON);
    }

    #[test]
    fn next_weekday_is_strictly_after() {
        let next_monday = next_weekday(1, MON);
        assert_eq!(day_of_week(next_monday), 1);
        assert_eq!(next_monday - MON, 7.0);
    }

    #[test]
    fn next_or_current_keeps_current() {
        assert_eq!(next_or_current_weekday(1, MON), MON);
    }

    #[test]
    fn nearest_weekday_reaches_both_directions() {
        // Nearest Sunday to a Monday is the day before.
        assert_eq!(nearest_weekday(0, MON), MON - 1.0);
        // Nearest Wednesday to a Monday is two days later.
        assert_eq!(nearest_weekday(3, MON), MON + 2.0);
    }
}
