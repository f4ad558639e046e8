//! # OpenGL Types
//!
//! Semantic names for OpenGL parameter and object types.
//!
//! `GLenum` and `GLbitfield` are the raw GL vocabulary and stay plain
//! aliases. Every other name is a `#[repr(transparent)]` newtype with the
//! layout of its primitive, so names sharing a primitive are still distinct
//! types:
//!
//! ```compile_fail
//! use helix_glpp::{StencilValue, Texture};
//!
//! fn bind(_texture: Texture) {}
//! bind(StencilValue(3));
//! ```

use core::ffi::{c_char, c_void, CStr};
use core::fmt;
use core::marker::{PhantomData, PhantomPinned};
use core::ptr;

use crate::error::{Error, Result};

// =============================================================================
// BASIC TYPES
// =============================================================================

/// OpenGL enum type
pub type GLenum = u32;
/// OpenGL bitfield type
pub type GLbitfield = u32;

// =============================================================================
// NEWTYPE DECLARATION
// =============================================================================

macro_rules! gl_newtype {
    ($(
        $(#[$meta:meta])*
        pub struct $name:ident($repr:ty);
    )*) => {
        $(
            $(#[$meta])*
            #[repr(transparent)]
            pub struct $name(pub $repr);

            impl $name {
                /// Wrap a raw value
                #[inline]
                pub const fn new(raw: $repr) -> Self {
                    Self(raw)
                }

                /// Get raw value
                #[inline]
                pub const fn raw(self) -> $repr {
                    self.0
                }
            }

            impl From<$repr> for $name {
                #[inline]
                fn from(raw: $repr) -> Self {
                    Self(raw)
                }
            }

            impl From<$name> for $repr {
                #[inline]
                fn from(value: $name) -> Self {
                    value.0
                }
            }

            static_assertions::assert_eq_size!($name, $repr);
            static_assertions::assert_eq_align!($name, $repr);
        )*
    };
}

// =============================================================================
// PARAMETER TYPES
// =============================================================================

gl_newtype! {
    /// Signed byte offset into a buffer object
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct BufferOffset(isize);

    /// 32-bit integer parameter the GL range-checks
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct CheckedInt32(i32);

    /// Single color component
    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
    pub struct ColorF(f32);

    /// Stencil reference value
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct StencilValue(i32);

    /// Window coordinate
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct WinCoord(i32);

    /// Stencil write or compare mask
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct MaskedStencilValue(u32);

    /// Texture object name
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Texture(u32);

    /// Read-only NUL-terminated string owned by the GL or the caller
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct String(*const c_char);
}

gl_newtype! {
    /// Target of `glClampColorARB`
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ClampColorTargetARB(GLenum);

    /// Mode of `glClampColorARB`
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ClampColorModeARB(GLenum);

    /// Parameter of `glGetBufferParameteriv`
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct BufferPNameARB(GLenum);

    /// Parameter of `glGetBufferPointerv`
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct BufferPointerNameARB(GLenum);
}

// =============================================================================
// ENUM VALUES
// =============================================================================

impl ClampColorTargetARB {
    /// `GL_CLAMP_READ_COLOR`
    pub const CLAMP_READ_COLOR: Self = Self(0x891C);
}

impl ClampColorModeARB {
    /// `GL_FALSE`
    pub const FALSE: Self = Self(0);
    /// `GL_TRUE`
    pub const TRUE: Self = Self(1);
    /// `GL_FIXED_ONLY`
    pub const FIXED_ONLY: Self = Self(0x891D);
}

impl BufferPNameARB {
    /// `GL_BUFFER_IMMUTABLE_STORAGE`
    pub const BUFFER_IMMUTABLE_STORAGE: Self = Self(0x821F);
    /// `GL_BUFFER_STORAGE_FLAGS`
    pub const BUFFER_STORAGE_FLAGS: Self = Self(0x8220);
    /// `GL_BUFFER_SIZE`
    pub const BUFFER_SIZE: Self = Self(0x8764);
    /// `GL_BUFFER_USAGE`
    pub const BUFFER_USAGE: Self = Self(0x8765);
    /// `GL_BUFFER_ACCESS`
    pub const BUFFER_ACCESS: Self = Self(0x88BB);
    /// `GL_BUFFER_MAPPED`
    pub const BUFFER_MAPPED: Self = Self(0x88BC);
    /// `GL_BUFFER_ACCESS_FLAGS`
    pub const BUFFER_ACCESS_FLAGS: Self = Self(0x911F);
    /// `GL_BUFFER_MAP_LENGTH`
    pub const BUFFER_MAP_LENGTH: Self = Self(0x9120);
    /// `GL_BUFFER_MAP_OFFSET`
    pub const BUFFER_MAP_OFFSET: Self = Self(0x9121);
}

impl BufferPointerNameARB {
    /// `GL_BUFFER_MAP_POINTER`
    pub const BUFFER_MAP_POINTER: Self = Self(0x88BD);
}

impl Texture {
    /// The default texture object bound to every target at startup
    pub const DEFAULT: Self = Self(0);

    /// Check if this names the default texture object
    pub const fn is_default(self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// CHECKED CONVERSIONS
// =============================================================================

macro_rules! checked_from {
    ($name:ident($repr:ty): $($from:ty),*) => {
        $(
            impl TryFrom<$from> for $name {
                type Error = Error;

                fn try_from(value: $from) -> Result<Self> {
                    <$repr>::try_from(value).map(Self).map_err(|_| {
                        log::debug!("{} out of range for {}", value, stringify!($name));
                        Error::OutOfRange {
                            ty: stringify!($name),
                        }
                    })
                }
            }
        )*
    };
}

checked_from!(CheckedInt32(i32): i64, u32, usize);
checked_from!(BufferOffset(isize): usize, u64, i64);

// =============================================================================
// STRING
// =============================================================================

impl String {
    /// Null string pointer
    pub const NULL: Self = Self(ptr::null());

    /// Borrow a C string as a GL string
    pub const fn from_c_str(s: &CStr) -> Self {
        Self(s.as_ptr())
    }

    /// Check if null
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    /// View the string as a [`CStr`], `None` when null
    ///
    /// # Safety
    ///
    /// A non-null pointer must reference a NUL-terminated string that stays
    /// valid and unmodified for `'a`.
    pub unsafe fn to_c_str<'a>(self) -> Option<&'a CStr> {
        if self.0.is_null() {
            return None;
        }
        // SAFETY: non-null, caller guarantees termination and lifetime
        Some(unsafe { CStr::from_ptr(self.0) })
    }
}

impl Default for String {
    fn default() -> Self {
        Self::NULL
    }
}

// =============================================================================
// SYNC OBJECT
// =============================================================================

/// Opaque driver-side sync object; never constructed or dereferenced
#[derive(Debug)]
#[repr(C)]
pub struct OpaqueSync {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

/// OpenGL sync object handle
///
/// Only compared and null-checked, never dereferenced.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct GLsync(*mut OpaqueSync);

impl GLsync {
    /// Null handle, as returned by a failed `glFenceSync`
    pub const NULL: Self = Self(ptr::null_mut());

    /// Wrap a handle returned by the driver
    pub const fn from_raw(ptr: *mut c_void) -> Self {
        Self(ptr.cast())
    }

    /// Pointer to hand back to the driver
    pub const fn as_ptr(self) -> *mut c_void {
        self.0.cast()
    }

    /// Check if null
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

impl Default for GLsync {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Debug for GLsync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GLsync({:p})", self.0)
    }
}

// SAFETY: the handle is an opaque token that this crate never dereferences;
// GL sync objects are shared between contexts and threads.
unsafe impl Send for GLsync {}
// SAFETY: see above
unsafe impl Sync for GLsync {}

// =============================================================================
// STATIC ASSERTIONS
// =============================================================================

static_assertions::assert_eq_size!(GLsync, *mut c_void);
static_assertions::assert_eq_size!(String, *const c_char);
static_assertions::assert_impl_all!(GLsync: Send, Sync, Copy);
static_assertions::assert_impl_all!(Texture: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(String: Send, Sync);
static_assertions::assert_not_impl_any!(Texture: From<MaskedStencilValue>, From<StencilValue>);
static_assertions::assert_not_impl_any!(StencilValue: From<WinCoord>, From<CheckedInt32>);
static_assertions::assert_not_impl_any!(BufferPNameARB: From<ClampColorTargetARB>);

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn test_newtype_round_trip() {
        for raw in [0, 1, u32::MAX, 0x8000_0000] {
            assert_eq!(Texture::new(raw).raw(), raw);
            assert_eq!(u32::from(MaskedStencilValue::from(raw)), raw);
        }
        for raw in [i32::MIN, -1, 0, i32::MAX] {
            assert_eq!(StencilValue(raw).raw(), raw);
            assert_eq!(i32::from(WinCoord::from(raw)), raw);
        }
        assert_eq!(BufferOffset::new(isize::MIN).raw(), isize::MIN);
        assert_eq!(ColorF::from(0.5_f32).raw(), 0.5);
    }

    #[test]
    fn test_texture_default_object() {
        assert!(Texture::DEFAULT.is_default());
        assert!(!Texture(7).is_default());
        assert_eq!(Texture::default(), Texture::DEFAULT);
    }

    #[test]
    fn test_checked_int32() {
        assert_eq!(CheckedInt32::try_from(-5_i64), Ok(CheckedInt32(-5)));
        assert_eq!(CheckedInt32::try_from(i32::MAX as u32), Ok(CheckedInt32(i32::MAX)));
        assert_eq!(
            CheckedInt32::try_from(u32::MAX),
            Err(Error::OutOfRange { ty: "CheckedInt32" })
        );
        assert!(CheckedInt32::try_from(i64::from(i32::MIN) - 1).is_err());
    }

    #[test]
    fn test_buffer_offset_conversion() {
        assert_eq!(BufferOffset::try_from(256_usize), Ok(BufferOffset(256)));
        assert_eq!(
            BufferOffset::try_from(usize::MAX),
            Err(Error::OutOfRange { ty: "BufferOffset" })
        );
    }

    #[test]
    fn test_enum_values() {
        assert_eq!(GLenum::from(BufferPNameARB::BUFFER_SIZE), 0x8764);
        assert_eq!(BufferPointerNameARB::BUFFER_MAP_POINTER.raw(), 0x88BD);
        assert_eq!(ClampColorModeARB::TRUE.raw(), 1);
        assert_ne!(ClampColorModeARB::FIXED_ONLY, ClampColorModeARB::FALSE);
    }

    #[test]
    fn test_string_view() {
        let name = CStr::from_bytes_with_nul(b"u_model\0").expect("literal is NUL-terminated");
        let s = String::from_c_str(name);
        assert!(!s.is_null());
        // SAFETY: `name` borrows a static byte string
        assert_eq!(unsafe { s.to_c_str() }, Some(name));
        assert!(String::default().is_null());
        // SAFETY: null is handled without dereferencing
        assert_eq!(unsafe { String::NULL.to_c_str() }, None);
    }

    #[test]
    fn test_sync_handle() {
        assert!(GLsync::NULL.is_null());
        assert_eq!(GLsync::default(), GLsync::NULL);

        let mut slot = 0_u64;
        let ptr = (&mut slot as *mut u64).cast::<c_void>();
        let sync = GLsync::from_raw(ptr);
        assert!(!sync.is_null());
        assert_eq!(sync, GLsync::from_raw(ptr));
        assert_ne!(sync, GLsync::NULL);
        assert_eq!(sync.as_ptr(), ptr);
        assert!(format!("{:?}", sync).starts_with("GLsync(0x"));
    }
}
