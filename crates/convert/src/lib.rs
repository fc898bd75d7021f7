//! # calverter-convert
//!
//! Dispatch facade over the per-calendar conversion engines. Every
//! conversion between two civil calendars goes through the Julian day
//! axis; no direct calendar-to-calendar formulas exist.
//!
//! ## Architecture
//!
//! ```text
//! convert(y, m, d, source, target, strategy)
//!   ├─ to_jd()    gregorian | jalali | hijri  ->  JulianDay
//!   └─ jd_to()    JulianDay  ->  gregorian | jalali | hijri
//!                                             └─ HijriStrategy:
//!                                                Observed | Arithmetic | External
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use calverter_convert::{Calendar, Calverter, Date, HijriStrategy};
//!
//! let calverter = Calverter::new();
//! let nowruz = calverter
//!     .convert(2024, 3, 20, Calendar::Gregorian, Calendar::Jalali, HijriStrategy::default())
//!     .unwrap();
//! assert_eq!(nowruz, Date::new(1403, 1, 1));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calendar` | `Calendar` tags with stable wire values |
//! | `date` | Civil `(year, month, day)` value type |
//! | `facade` | The `Calverter` service and `HijriStrategy` |
//! | `error` | Error types |

mod calendar;
mod date;
mod error;
mod facade;

pub use calendar::Calendar;
pub use date::Date;
pub use error::ConvertError;
pub use facade::{Calverter, HijriStrategy};

pub use calverter_hijri::{HijriError, HijriResolver, ObservationTable};
pub use calverter_jalali::JalaliError;
pub use calverter_jd::JulianDay;

// The engines themselves, for callers that want the per-calendar
// leap-year and month-length helpers directly.
pub use calverter_gregorian as gregorian;
pub use calverter_hijri as hijri;
pub use calverter_iso_week as iso_week;
pub use calverter_jalali as jalali;
