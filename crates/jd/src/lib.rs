//! # calverter-jd
//!
//! Primitives for the continuous Julian day-count timeline that all
//! calendar conversions pass through.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `julian_day` | The `JulianDay` value type |
//! | `weekday` | Day-of-week and weekday-search helpers |
//!
//! ## Quick Start
//!
//! ```
//! use calverter_jd::{JulianDay, day_of_week};
//!
//! let jd = JulianDay::new(2460310.5); // Gregorian 2024-01-01
//! assert_eq!(day_of_week(jd), 1); // Monday (0 = Sunday)
//! assert_eq!(jd.whole(), jd);
//! ```

mod julian_day;
mod weekday;

pub use julian_day::JulianDay;
pub use weekday::{
    day_of_week, nearest_weekday, next_or_current_weekday, next_weekday,
    previous_or_current_weekday, previous_weekday, search_weekday, weekday_before,
};
