use calverter_gregorian as gregorian;

#[test]
fn roundtrip_years_1_to_2900() {
    for year in 1..=2900 {
        for month in 1..=12 {
            for day in 1..=gregorian::last_day_of_month(year, month) {
                let jd = gregorian::to_jd(year, month, day);
                assert_eq!(
                    gregorian::from_jd(jd),
                    (year, month, day),
                    "roundtrip failed at {year}-{month:02}-{day:02}"
                );
            }
        }
    }
}

#[test]
fn jd_strictly_increases_in_date_order() {
    // Every successive civil day is exactly one Julian day later, across
    // century and 400-year boundaries.
    let mut prev = gregorian::to_jd(1799, 12, 31);
    for year in 1800..=2200 {
        for month in 1..=12 {
            for day in 1..=gregorian::last_day_of_month(year, month) {
                let jd = gregorian::to_jd(year, month, day);
                assert_eq!(jd - prev, 1.0, "at {year}-{month:02}-{day:02}");
                prev = jd;
            }
        }
    }
}

#[test]
fn proleptic_roundtrip_around_year_zero() {
    for year in -10..=10 {
        for month in 1..=12 {
            for day in 1..=gregorian::last_day_of_month(year, month) {
                let jd = gregorian::to_jd(year, month, day);
                assert_eq!(
                    gregorian::from_jd(jd),
                    (year, month, day),
                    "roundtrip failed at {year}-{month:02}-{day:02}"
                );
            }
        }
    }
}

#[test]
fn century_leap_days_only_every_400_years() {
    assert_eq!(gregorian::from_jd(gregorian::to_jd(2000, 2, 29)), (2000, 2, 29));
    // In 1900 the same triple normalizes to March 1.
    assert_eq!(gregorian::from_jd(gregorian::to_jd(1900, 2, 29)), (1900, 3, 1));
}
