//! Conversion report assembly and rendering.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::info;

use calverter_convert::{Calendar, Calverter, Date, HijriStrategy, JulianDay};

use crate::cli::Cli;

/// The input date rendered in every supported calendar.
#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub julian_day: f64,
    pub gregorian: Date,
    pub jalali: Date,
    pub hijri: Date,
}

pub fn run(cli: &Cli) -> Result<()> {
    let calverter = Calverter::new();
    let jd = input_jd(&calverter, cli)?;
    info!(jd = jd.value(), "input resolved");
    let report = build_report(&calverter, jd)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Resolves the CLI date argument to a Julian day.
fn input_jd(calverter: &Calverter, cli: &Cli) -> Result<JulianDay> {
    match cli.calendar.source() {
        Some(source) => {
            let (year, month, day) = parse_date(&cli.date)?;
            Ok(calverter.to_jd(year, month, day, source)?)
        }
        None => {
            let jdn: i64 = cli
                .date
                .trim()
                .parse()
                .with_context(|| format!("invalid julian day number: {:?}", cli.date))?;
            Ok(JulianDay::new(jdn as f64))
        }
    }
}

/// Parses a `Y/M/D` date string into integer components.
fn parse_date(s: &str) -> Result<(i32, i32, i32)> {
    let parts: Vec<&str> = s.split('/').collect();
    let [year, month, day] = parts.as_slice() else {
        bail!("expected a date in Y/M/D form, got {s:?}");
    };
    let year = year
        .trim()
        .parse()
        .with_context(|| format!("invalid year in {s:?}"))?;
    let month = month
        .trim()
        .parse()
        .with_context(|| format!("invalid month in {s:?}"))?;
    let day = day
        .trim()
        .parse()
        .with_context(|| format!("invalid day in {s:?}"))?;
    Ok((year, month, day))
}

fn build_report(calverter: &Calverter, jd: JulianDay) -> Result<ConversionReport> {
    let strategy = HijriStrategy::Observed;
    Ok(ConversionReport {
        julian_day: jd.value(),
        gregorian: calverter.jd_to(jd, Calendar::Gregorian, strategy)?,
        jalali: calverter.jd_to(jd, Calendar::Jalali, strategy)?,
        hijri: calverter.jd_to(jd, Calendar::Hijri, strategy)?,
    })
}

fn print_report(report: &ConversionReport) {
    println!("Julian Day: {}", JulianDay::new(report.julian_day));
    println!("Gregorian:  {}", report.gregorian);
    println!("Jalali:     {}", report.jalali);
    println!("Hijri:      {}", report.hijri);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_valid() {
        assert_eq!(parse_date("1403/1/1").unwrap(), (1403, 1, 1));
        assert_eq!(parse_date("2024/03/20").unwrap(), (2024, 3, 20));
        assert_eq!(parse_date("-10/12/31").unwrap(), (-10, 12, 31));
    }

    #[test]
    fn parse_date_rejects_wrong_arity() {
        assert!(parse_date("2024/03").is_err());
        assert!(parse_date("2024/03/20/5").is_err());
        assert!(parse_date("2024-03-20").is_err());
    }

    #[test]
    fn parse_date_rejects_non_numeric() {
        assert!(parse_date("year/03/20").is_err());
        assert!(parse_date("2024/3.5/20").is_err());
    }

    #[test]
    fn report_for_observation_anchor() {
        let calverter = Calverter::new();
        let report = build_report(&calverter, JulianDay::new(2453441.0)).unwrap();
        assert_eq!(report.hijri, Date::new(1426, 2, 1));
        // An integer day number floors differently per engine: Gregorian
        // reads the day ending at noon, Jalali the one starting there.
        assert_eq!(report.gregorian, Date::new(2005, 3, 11));
        assert_eq!(report.jalali, Date::new(1383, 12, 22));
    }

    #[test]
    fn report_serializes_to_json() {
        let calverter = Calverter::new();
        let report = build_report(&calverter, JulianDay::new(2460389.5)).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"julian_day\":2460389.5"));
        assert!(json.contains("\"jalali\":{\"year\":1403,\"month\":1,\"day\":1}"));
    }
}
