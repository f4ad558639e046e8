//! # Type Catalog
//!
//! Static description of every semantic GL type: its name, the primitive it
//! stands for, and its layout. Binding generators and debug dumps read this
//! table instead of hard-coding representations.

use core::mem::{align_of, size_of};

use bitflags::bitflags;

use crate::error::{Error, Result};
use crate::types::*;

// =============================================================================
// REPRESENTATION FLAGS
// =============================================================================

bitflags! {
    /// Classification of a catalog entry's representation
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ReprFlags: u8 {
        /// Signed integer
        const SIGNED = 1 << 0;
        /// Floating point
        const FLOAT = 1 << 1;
        /// Pointer
        const POINTER = 1 << 2;
        /// Carries `GLenum` values
        const ENUM_SHAPED = 1 << 3;
        /// Points to a type that is never dereferenced
        const OPAQUE = 1 << 4;
        /// Distinct newtype rather than a plain alias
        const NEWTYPE = 1 << 5;
    }
}

// =============================================================================
// ENTRIES
// =============================================================================

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasInfo {
    /// GL-facing name
    pub name: &'static str,
    /// Rust spelling of the underlying primitive
    pub underlying: &'static str,
    /// Size in bytes
    pub size: usize,
    /// Alignment in bytes
    pub align: usize,
    /// Representation class
    pub repr: ReprFlags,
}

impl AliasInfo {
    const fn of<T>(name: &'static str, underlying: &'static str, repr: ReprFlags) -> Self {
        Self {
            name,
            underlying,
            size: size_of::<T>(),
            align: align_of::<T>(),
            repr,
        }
    }

    /// True for plain aliases that accept the primitive directly
    pub const fn is_alias(&self) -> bool {
        !self.repr.contains(ReprFlags::NEWTYPE)
    }
}

const ENUM_NEWTYPE: ReprFlags = ReprFlags::ENUM_SHAPED.union(ReprFlags::NEWTYPE);
const SIGNED_NEWTYPE: ReprFlags = ReprFlags::SIGNED.union(ReprFlags::NEWTYPE);

/// Every semantic GL type
pub static CATALOG: [AliasInfo; 15] = [
    AliasInfo::of::<GLenum>("GLenum", "u32", ReprFlags::empty()),
    AliasInfo::of::<GLbitfield>("GLbitfield", "u32", ReprFlags::empty()),
    AliasInfo::of::<GLsync>(
        "GLsync",
        "*mut OpaqueSync",
        ReprFlags::POINTER
            .union(ReprFlags::OPAQUE)
            .union(ReprFlags::NEWTYPE),
    ),
    AliasInfo::of::<BufferOffset>("BufferOffset", "isize", SIGNED_NEWTYPE),
    AliasInfo::of::<CheckedInt32>("CheckedInt32", "i32", SIGNED_NEWTYPE),
    AliasInfo::of::<ClampColorTargetARB>("ClampColorTargetARB", "u32", ENUM_NEWTYPE),
    AliasInfo::of::<ClampColorModeARB>("ClampColorModeARB", "u32", ENUM_NEWTYPE),
    AliasInfo::of::<BufferPNameARB>("BufferPNameARB", "u32", ENUM_NEWTYPE),
    AliasInfo::of::<BufferPointerNameARB>("BufferPointerNameARB", "u32", ENUM_NEWTYPE),
    AliasInfo::of::<ColorF>("ColorF", "f32", ReprFlags::FLOAT.union(ReprFlags::NEWTYPE)),
    AliasInfo::of::<StencilValue>("StencilValue", "i32", SIGNED_NEWTYPE),
    AliasInfo::of::<WinCoord>("WinCoord", "i32", SIGNED_NEWTYPE),
    AliasInfo::of::<MaskedStencilValue>("MaskedStencilValue", "u32", ReprFlags::NEWTYPE),
    AliasInfo::of::<String>(
        "String",
        "*const c_char",
        ReprFlags::POINTER.union(ReprFlags::NEWTYPE),
    ),
    AliasInfo::of::<Texture>("Texture", "u32", ReprFlags::NEWTYPE),
];

// =============================================================================
// QUERIES
// =============================================================================

/// Find an entry by name
pub fn lookup(name: &str) -> Result<&'static AliasInfo> {
    CATALOG
        .iter()
        .find(|info| info.name == name)
        .ok_or(Error::UnknownType)
}

/// Entries with all of the given representation flags
pub fn with_repr(repr: ReprFlags) -> impl Iterator<Item = &'static AliasInfo> {
    CATALOG.iter().filter(move |info| info.repr.contains(repr))
}

/// Dump the catalog at debug level
pub fn log_catalog() {
    log::debug!("=== GL type catalog ({} entries) ===", CATALOG.len());
    for info in &CATALOG {
        log::debug!(
            "{:<22} {:<16} size={} align={} {:?}",
            info.name,
            info.underlying,
            info.size,
            info.align,
            info.repr
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ffi::c_char;

    #[test]
    fn test_lookup() {
        let texture = lookup("Texture").expect("Texture is catalogued");
        assert_eq!(texture.underlying, "u32");
        assert_eq!(texture.size, 4);
        assert!(!texture.is_alias());

        assert!(lookup("GLenum").map(AliasInfo::is_alias).unwrap_or(false));
        assert_eq!(lookup("GLuint"), Err(Error::UnknownType));
    }

    #[test]
    fn test_layout_matches_primitive() {
        assert_eq!(lookup("BufferOffset").map(|i| i.size), Ok(size_of::<isize>()));
        assert_eq!(lookup("String").map(|i| i.size), Ok(size_of::<*const c_char>()));
        assert_eq!(lookup("GLsync").map(|i| i.align), Ok(align_of::<usize>()));
        assert_eq!(lookup("OpaqueSync"), Err(Error::UnknownType));
        assert_eq!(lookup("ColorF").map(|i| i.size), Ok(4));
    }

    #[test]
    fn test_catalog_names() {
        let names = [
            "GLenum",
            "GLbitfield",
            "GLsync",
            "BufferOffset",
            "CheckedInt32",
            "ClampColorTargetARB",
            "ClampColorModeARB",
            "BufferPNameARB",
            "BufferPointerNameARB",
            "ColorF",
            "StencilValue",
            "WinCoord",
            "MaskedStencilValue",
            "String",
            "Texture",
        ];
        assert_eq!(CATALOG.len(), names.len());
        for (info, name) in CATALOG.iter().zip(names) {
            assert_eq!(info.name, name);
        }

        let mut opaque = with_repr(ReprFlags::OPAQUE).map(|info| info.name);
        assert_eq!(opaque.next(), Some("GLsync"));
        assert_eq!(opaque.next(), None);
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_enum_shaped_entries() {
        let mut names = with_repr(ReprFlags::ENUM_SHAPED).map(|info| info.name);
        assert_eq!(names.next(), Some("ClampColorTargetARB"));
        assert_eq!(names.next(), Some("ClampColorModeARB"));
        assert_eq!(names.next(), Some("BufferPNameARB"));
        assert_eq!(names.next(), Some("BufferPointerNameARB"));
        assert_eq!(names.next(), None);
        assert_eq!(with_repr(ReprFlags::POINTER).count(), 2);
    }

    #[test]
    fn test_log_catalog_without_logger() {
        log_catalog();
        assert!(!log::log_enabled!(log::Level::Debug));
        assert_eq!(with_repr(ReprFlags::empty()).count(), CATALOG.len());
    }
}
