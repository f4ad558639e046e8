//! # Error Types
//!
//! The bitmask algebra and the type catalog are total; only the checked
//! conversions layered on top of them can fail.

use core::fmt;

// =============================================================================
// RESULT TYPE
// =============================================================================

/// Result type alias for checked GL conversions
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors reported by checked conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Raw value carries bits that no flag of the group defines
    UnknownBits {
        /// Name of the mask type
        mask: &'static str,
        /// The undefined bits, widened to 128 bits
        bits: u128,
    },
    /// Text token is neither a flag of the group nor `0x` hex bits
    UnknownFlag {
        /// Name of the mask type
        mask: &'static str,
    },
    /// Numeric value does not fit the target GL type
    OutOfRange {
        /// Name of the target type
        ty: &'static str,
    },
    /// Name is not part of the type catalog
    UnknownType,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBits { mask, bits } => {
                write!(f, "{mask}: undefined bits {bits:#x}")
            },
            Self::UnknownFlag { mask } => write!(f, "{mask}: unrecognized flag"),
            Self::OutOfRange { ty } => write!(f, "value out of range for {ty}"),
            Self::UnknownType => write!(f, "type not in catalog"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_display_messages() {
        let err = Error::UnknownBits {
            mask: "ClearBufferMask",
            bits: 0x1,
        };
        assert_eq!(err.to_string(), "ClearBufferMask: undefined bits 0x1");
        assert_eq!(
            Error::OutOfRange { ty: "CheckedInt32" }.to_string(),
            "value out of range for CheckedInt32"
        );
        assert_eq!(
            Error::UnknownFlag { mask: "ChannelMask" }.to_string(),
            "ChannelMask: unrecognized flag"
        );
        assert_eq!(Error::UnknownType.to_string(), "type not in catalog");
    }
}
