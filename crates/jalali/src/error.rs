//! Error types for the calverter-jalali crate.

/// Error type for all fallible operations in the calverter-jalali crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JalaliError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i32,
    },
}
