//! Error types for the calverter-hijri crate.

/// Error type for all fallible operations in the calverter-hijri crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HijriError {
    /// Returned when an observed month length is neither 29 nor 30 days.
    #[error("invalid observed month length: {length} days for {year}-{month:02}")]
    InvalidMonthLength {
        /// Hijri year of the offending entry.
        year: i32,
        /// Hijri month (1..=12) of the offending entry.
        month: i32,
        /// The rejected length.
        length: u8,
    },

    /// Returned when the observation dataset has a gap after its anchor.
    #[error("observation table is not contiguous at {year}-{month:02}")]
    NonContiguous {
        /// Hijri year at which the gap was found.
        year: i32,
        /// Hijri month (1..=12) at which the gap was found.
        month: i32,
    },

    /// Returned by an external resolver that cannot produce a date.
    #[error("hijri conversion unavailable: {reason}")]
    Unavailable {
        /// Description of why the resolver could not answer.
        reason: String,
    },
}
