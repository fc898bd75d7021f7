//! Error types for the calverter-convert crate.

use std::fmt;

use crate::calendar::Calendar;

/// Error type for all fallible operations in the calverter-convert crate.
///
/// Note: the `Display`/`Error`/`From` impls below are written by hand rather
/// than via `#[derive(thiserror::Error)]` because thiserror unconditionally
/// treats a field named `source` as the error source (requiring its type to
/// implement `std::error::Error`). Here `source` names the *source calendar*,
/// not an underlying error, so the derive cannot be used. These impls
/// reproduce exactly what the derive would otherwise generate.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Returned when a calendar cannot serve as a conversion source.
    UnsupportedSource {
        /// The rejected source calendar.
        source: Calendar,
    },

    /// Returned when a calendar cannot serve as a conversion target.
    UnsupportedTarget {
        /// The rejected target calendar.
        target: Calendar,
    },

    /// Returned when an integer tag maps to no calendar.
    UnknownTag {
        /// The unrecognized tag value.
        tag: i32,
    },

    /// Jalali engine error.
    Jalali(calverter_jalali::JalaliError),

    /// Hijri engine error.
    Hijri(calverter_hijri::HijriError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnsupportedSource { source } => {
                write!(f, "unsupported source calendar: {source:?}")
            }
            ConvertError::UnsupportedTarget { target } => {
                write!(f, "unsupported target calendar: {target:?}")
            }
            ConvertError::UnknownTag { tag } => write!(f, "unknown calendar tag: {tag}"),
            ConvertError::Jalali(e) => fmt::Display::fmt(e, f),
            ConvertError::Hijri(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Jalali(e) => Some(e),
            ConvertError::Hijri(e) => Some(e),
            _ => None,
        }
    }
}

impl From<calverter_jalali::JalaliError> for ConvertError {
    fn from(e: calverter_jalali::JalaliError) -> Self {
        ConvertError::Jalali(e)
    }
}

impl From<calverter_hijri::HijriError> for ConvertError {
    fn from(e: calverter_hijri::HijriError) -> Self {
        ConvertError::Hijri(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unsupported_source() {
        let e = ConvertError::UnsupportedSource {
            source: Calendar::JulianDay,
        };
        assert_eq!(e.to_string(), "unsupported source calendar: JulianDay");
    }

    #[test]
    fn display_unknown_tag() {
        let e = ConvertError::UnknownTag { tag: 3 };
        assert_eq!(e.to_string(), "unknown calendar tag: 3");
    }

    #[test]
    fn jalali_error_passes_through() {
        let e = ConvertError::from(calverter_jalali::JalaliError::InvalidMonth { month: 13 });
        assert_eq!(e.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ConvertError>();
    }
}
