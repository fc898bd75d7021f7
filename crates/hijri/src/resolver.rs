//! Injection seam for alternative Hijri conversion strategies.

use calverter_jd::JulianDay;

use crate::error::HijriError;

/// A pluggable source of Hijri dates for a given Julian day.
///
/// The engine itself only ever computes arithmetically or from the
/// observation table; this trait lets a caller route Hijri conversion
/// through an external reference implementation instead, typically from a
/// test harness. Implementations must be pure and side-effect free.
pub trait HijriResolver {
    /// Resolves `jd` to a Hijri `(year, month, day)` triple.
    ///
    /// # Errors
    ///
    /// Returns [`HijriError::Unavailable`] when the resolver cannot
    /// produce a date for `jd`.
    fn resolve(&self, jd: JulianDay) -> Result<(i32, i32, i32), HijriError>;
}
