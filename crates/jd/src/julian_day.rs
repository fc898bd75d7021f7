//! The Julian day value type.

use std::fmt;
use std::ops::{Add, Sub};

/// A point on the continuous Julian day-count timeline.
///
/// The integer part of a Julian day flips at noon, not midnight, so a civil
/// day corresponds to a value ending in `.5`. Calendar conversions operate on
/// whole days; [`JulianDay::whole`] maps an arbitrary value to the
/// `.5`-aligned day containing it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Creates a `JulianDay` from a raw day-count value.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw day-count value.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the `.5`-aligned whole day containing this instant,
    /// `floor(jd - 0.5) + 0.5`.
    pub fn whole(self) -> Self {
        Self((self.0 - 0.5).floor() + 0.5)
    }

    /// Returns the integer day number, truncating any fraction toward zero.
    ///
    /// This is the value used for range checks against day-number tables.
    pub fn day_number(self) -> i64 {
        self.0 as i64
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for JulianDay {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add<f64> for JulianDay {
    type Output = JulianDay;

    fn add(self, days: f64) -> JulianDay {
        JulianDay(self.0 + days)
    }
}

impl Sub<f64> for JulianDay {
    type Output = JulianDay;

    fn sub(self, days: f64) -> JulianDay {
        JulianDay(self.0 - days)
    }
}

impl Sub for JulianDay {
    type Output = f64;

    fn sub(self, other: JulianDay) -> f64 {
        self.0 - other.0
    }
}
