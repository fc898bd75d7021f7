//! # calverter-hijri
//!
//! Hijri (Islamic lunar) calendar arithmetic on the Julian day axis, in
//! two layers:
//!
//! | Module | Description |
//! |--------|-------------|
//! | `arith` | The 30-year-cycle arithmetic calendar (mean lunation) |
//! | `observation` | Recorded month lengths overriding the arithmetic inverse |
//! | `resolver` | Injection seam for external conversion strategies |
//! | `error` | Error types |
//!
//! The arithmetic calendar is a fixed approximation: 354-day years, 30-day
//! and 29-day months alternating, eleven leap days per 30-year cycle. The
//! observed calendar fixes month starts by sighting and can differ from
//! the arithmetic prediction by a day; [`from_jd_observed`] consults an
//! [`ObservationTable`] first and only falls back to [`from_jd`] outside
//! the recorded range. The two paths disagreeing inside that range is
//! expected behavior, not an inconsistency to be smoothed over.
//!
//! # Quick start
//!
//! ```
//! use calverter_hijri as hijri;
//! use calverter_jd::JulianDay;
//!
//! let table = hijri::ObservationTable::bundled();
//! let jd = JulianDay::new(2453441.0);
//! assert_eq!(hijri::from_jd_observed(jd, &table), (1426, 2, 1));
//! ```

mod arith;
mod error;
mod observation;
mod resolver;

pub use arith::{HIJRI_EPOCH, from_jd, leap_year, to_jd};
pub use error::HijriError;
pub use observation::{ObservationTable, from_jd_observed};
pub use resolver::HijriResolver;
