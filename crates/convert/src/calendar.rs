//! Calendar identification tags.

use serde::Serialize;

use crate::error::ConvertError;

/// Calendar systems addressable by the conversion facade.
///
/// The discriminants match the integer tags existing callers pass over
/// FFI-style interfaces; [`Calendar::from_tag`] accepts exactly these
/// values. Tag 3 has never been assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    /// Gregorian civil calendar.
    Gregorian = 0,
    /// Jalali (Iranian solar-hijri) calendar.
    Jalali = 1,
    /// Hijri (Islamic lunar) calendar.
    Hijri = 2,
    /// Raw Julian day passthrough. Only meaningful as an input mode for
    /// callers that already hold a day number; it is not a valid source
    /// or target for civil-date conversion.
    JulianDay = 4,
}

impl Calendar {
    /// Returns the integer tag for this calendar.
    pub const fn tag(self) -> i32 {
        self as i32
    }

    /// Looks up a calendar by its integer tag.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnknownTag`] for any unassigned value.
    pub fn from_tag(tag: i32) -> Result<Self, ConvertError> {
        match tag {
            0 => Ok(Self::Gregorian),
            1 => Ok(Self::Jalali),
            2 => Ok(Self::Hijri),
            4 => Ok(Self::JulianDay),
            _ => Err(ConvertError::UnknownTag { tag }),
        }
    }
}
