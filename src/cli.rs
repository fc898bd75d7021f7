use clap::{Parser, ValueEnum};

use calverter_convert::Calendar;

/// Multi-calendar date conversion tool.
#[derive(Parser)]
#[command(
    name = "calverter",
    version,
    about = "Convert dates between the Gregorian, Jalali and Hijri calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Calendar the input date is expressed in.
    #[arg(value_enum)]
    pub calendar: InputCalendar,

    /// Date as Y/M/D, or a bare integer day number with `jd`.
    pub date: String,

    /// Emit the conversion report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Input calendar selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputCalendar {
    /// Gregorian civil date.
    #[value(alias = "g")]
    Gregorian,
    /// Jalali (Iranian solar-hijri) date.
    #[value(alias = "j")]
    Jalali,
    /// Hijri (Islamic lunar) date.
    #[value(alias = "h", alias = "i")]
    Hijri,
    /// Raw Julian day number.
    Jd,
}

impl InputCalendar {
    /// The conversion-source calendar, or `None` for the raw day-number
    /// mode.
    pub fn source(self) -> Option<Calendar> {
        match self {
            Self::Gregorian => Some(Calendar::Gregorian),
            Self::Jalali => Some(Calendar::Jalali),
            Self::Hijri => Some(Calendar::Hijri),
            Self::Jd => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_names() {
        let cli = Cli::try_parse_from(["calverter", "jalali", "1403/1/1"]).unwrap();
        assert_eq!(cli.calendar, InputCalendar::Jalali);
        assert_eq!(cli.date, "1403/1/1");
        assert!(!cli.json);
    }

    #[test]
    fn parses_single_letter_aliases() {
        for (alias, expected) in [
            ("g", InputCalendar::Gregorian),
            ("j", InputCalendar::Jalali),
            ("h", InputCalendar::Hijri),
            ("i", InputCalendar::Hijri),
        ] {
            let cli = Cli::try_parse_from(["calverter", alias, "2024/3/20"]).unwrap();
            assert_eq!(cli.calendar, expected, "alias {alias}");
        }
    }

    #[test]
    fn parses_jd_mode() {
        let cli = Cli::try_parse_from(["calverter", "jd", "2453441"]).unwrap();
        assert_eq!(cli.calendar, InputCalendar::Jd);
        assert_eq!(cli.calendar.source(), None);
    }

    #[test]
    fn missing_arguments_are_usage_errors() {
        assert!(Cli::try_parse_from(["calverter"]).is_err());
        assert!(Cli::try_parse_from(["calverter", "jalali"]).is_err());
    }

    #[test]
    fn unknown_mode_is_a_usage_error() {
        assert!(Cli::try_parse_from(["calverter", "x", "2024/1/1"]).is_err());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["calverter", "-vv", "g", "2024/1/1"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
