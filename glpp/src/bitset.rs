//! # Typed Bitmasks
//!
//! [`Bitset<T, U>`] is a bitfield value backed by the unsigned integer `U`
//! and owned by the tag type `T`. Every OpenGL flag group gets its own tag,
//! so two groups sharing a representation never mix:
//!
//! ```
//! use helix_glpp::{ClearBuffer, ClearBufferMask};
//!
//! let mask: ClearBufferMask = ClearBuffer::COLOR | ClearBuffer::DEPTH;
//! assert!(mask.contains(ClearBuffer::DEPTH));
//! assert_eq!(mask.into_raw(), 0x4100);
//! ```
//!
//! Combining masks of different groups is rejected:
//!
//! ```compile_fail
//! use helix_glpp::{ClearBuffer, MapBufferAccess};
//!
//! let _ = ClearBuffer::COLOR | MapBufferAccess::READ;
//! ```
//!
//! So is building a mask from a bare integer without [`Bitset::from_raw`]:
//!
//! ```compile_fail
//! use helix_glpp::ClearBufferMask;
//!
//! let _mask: ClearBufferMask = 0x4000;
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{BitAnd, BitOr, BitXor, Not};

use bitflags::parser::{self, ParseHex, WriteHex};
use bitflags::Bits;
pub use bitflags::{Flag, Flags};

use crate::error::{Error, Result};

mod sealed {
    pub trait Sealed {}
}

// =============================================================================
// REPRESENTATION
// =============================================================================

/// Unsigned integer type able to back a [`Bitset`]
///
/// Sealed; implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`.
pub trait BitRepr:
    sealed::Sealed
    + Bits
    + ParseHex
    + WriteHex
    + Eq
    + Hash
    + fmt::Debug
    + fmt::LowerHex
    + fmt::UpperHex
    + fmt::Binary
{
    /// Zero-extend to 128 bits
    fn widen(self) -> u128;
}

macro_rules! impl_bit_repr {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl BitRepr for $ty {
                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn widen(self) -> u128 {
                    self as u128
                }
            }

            impl<T> From<Bitset<T, $ty>> for $ty {
                #[inline]
                fn from(mask: Bitset<T, $ty>) -> Self {
                    mask.raw
                }
            }
        )*
    };
}

impl_bit_repr!(u8, u16, u32, u64, u128, usize);

// =============================================================================
// BITSET
// =============================================================================

/// Bitfield value of flag group `T`, stored as `U`
///
/// The tag only exists at the type level; the value has exactly the layout
/// of `U`.
#[repr(transparent)]
pub struct Bitset<T, U> {
    raw: U,
    _tag: PhantomData<fn() -> T>,
}

impl<T, U: BitRepr> Bitset<T, U> {
    /// Wrap a raw value without checking it against the group's flags
    #[inline]
    pub const fn from_raw(raw: U) -> Self {
        Self {
            raw,
            _tag: PhantomData,
        }
    }

    /// Raw value, as passed to the GL entry point
    #[inline]
    pub const fn into_raw(self) -> U {
        self.raw
    }

    /// Mask with no bits set
    #[inline]
    pub const fn empty() -> Self {
        Self::from_raw(U::EMPTY)
    }

    /// True if any bit is set
    #[inline]
    pub fn any(self) -> bool {
        self.raw != U::EMPTY
    }

    /// True if no bit is set
    #[inline]
    pub fn is_empty(self) -> bool {
        self.raw == U::EMPTY
    }

    /// True if every bit of `other` is also set in `self`
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        (self.raw & other.raw) == other.raw
    }

    /// True if `self` and `other` share at least one bit
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        (self.raw & other.raw) != U::EMPTY
    }

    /// Bits of `self` that are not in `other`
    #[inline]
    pub fn difference(self, other: Self) -> Self {
        Self::from_raw(self.raw & !other.raw)
    }
}

// Manual impls: derives would put bounds on the tag.

impl<T, U: Copy> Clone for Bitset<T, U> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, U: Copy> Copy for Bitset<T, U> {}

impl<T, U: PartialEq> PartialEq for Bitset<T, U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T, U: Eq> Eq for Bitset<T, U> {}

impl<T, U: Hash> Hash for Bitset<T, U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T, U: BitRepr> Default for Bitset<T, U> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, U: BitRepr> From<Bitset<T, U>> for bool {
    #[inline]
    fn from(mask: Bitset<T, U>) -> Self {
        mask.any()
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl<T, U: BitRepr> BitOr for Bitset<T, U> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_raw(self.raw | rhs.raw)
    }
}

impl<T, U: BitRepr> BitAnd for Bitset<T, U> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_raw(self.raw & rhs.raw)
    }
}

impl<T, U: BitRepr> BitXor for Bitset<T, U> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_raw(self.raw ^ rhs.raw)
    }
}

impl<T, U: BitRepr> Not for Bitset<T, U> {
    type Output = Self;

    /// Complements every bit of the representation, defined flags or not
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.raw)
    }
}

// =============================================================================
// FORMATTING
// =============================================================================

impl<T, U: BitRepr> fmt::LowerHex for Bitset<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.raw, f)
    }
}

impl<T, U: BitRepr> fmt::UpperHex for Bitset<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.raw, f)
    }
}

impl<T, U: BitRepr> fmt::Binary for Bitset<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.raw, f)
    }
}

// =============================================================================
// NAMED FLAG GROUPS
// =============================================================================

/// Flag table of a tag type
///
/// Usually implemented through [`gl_bitmask!`](crate::gl_bitmask).
pub trait BitmaskTag<U: BitRepr>: Sized + 'static {
    /// Name of the mask type, used in diagnostics
    const NAME: &'static str;
    /// Every named flag of the group
    const FLAGS: &'static [Flag<Bitset<Self, U>>];
}

impl<T: BitmaskTag<U>, U: BitRepr> Flags for Bitset<T, U> {
    const FLAGS: &'static [Flag<Self>] = T::FLAGS;

    type Bits = U;

    #[inline]
    fn bits(&self) -> U {
        self.raw
    }

    #[inline]
    fn from_bits_retain(bits: U) -> Self {
        Self::from_raw(bits)
    }
}

impl<T: BitmaskTag<U>, U: BitRepr> Bitset<T, U> {
    /// Union of every named flag
    pub fn all() -> Self {
        <Self as Flags>::all()
    }

    /// Bits set in `self` that no flag of the group defines
    pub fn unknown_bits(self) -> U {
        self.raw & !Self::all().raw
    }

    /// Wrap a raw value, rejecting bits outside the group
    pub fn try_from_raw(raw: U) -> Result<Self> {
        let unknown = Self::from_raw(raw).unknown_bits();
        if unknown != U::EMPTY {
            log::debug!("{}: rejecting undefined bits {:#x}", T::NAME, unknown);
            return Err(Error::UnknownBits {
                mask: T::NAME,
                bits: unknown.widen(),
            });
        }
        Ok(Self::from_raw(raw))
    }

    /// Wrap a raw value, dropping bits outside the group
    pub fn from_raw_truncate(raw: U) -> Self {
        let mask = <Self as Flags>::from_bits_truncate(raw);
        if mask.raw != raw {
            log::trace!("{}: dropping undefined bits {:#x}", T::NAME, raw & !mask.raw);
        }
        mask
    }

    /// Flag with the given name
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as Flags>::from_name(name)
    }

    /// Parse the text form written by `Debug`, e.g. `"COLOR | DEPTH | 0x1"`
    ///
    /// Tokens are flag names or `0x` hex bits, kept as is. Whitespace around
    /// tokens is ignored and an empty string is the empty mask.
    pub fn parse(text: &str) -> Result<Self> {
        parser::from_str(text).map_err(|err| {
            log::debug!("{}: cannot parse {:?}: {}", T::NAME, text, err);
            Error::UnknownFlag { mask: T::NAME }
        })
    }

    /// Named flags contained in `self`, in declaration order
    pub fn iter_names(self) -> impl Iterator<Item = (&'static str, Self)> {
        <Self as Flags>::iter_names(&self)
    }
}

impl<T: BitmaskTag<U>, U: BitRepr> fmt::Debug for Bitset<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", T::NAME)?;
        if self.is_empty() {
            f.write_str("0x0")?;
        } else {
            parser::to_writer(self, &mut *f)?;
        }
        f.write_str(")")
    }
}

// =============================================================================
// DECLARATION MACRO
// =============================================================================

/// Declare a flag group: a tag type, its mask alias and the named flags
///
/// ```
/// use helix_glpp::gl_bitmask;
///
/// gl_bitmask! {
///     /// Channels written by a blit
///     pub enum BlitChannel => type BlitChannelMask: u32 {
///         /// Color attachment
///         const COLOR = 0x4000;
///         /// Depth attachment
///         const DEPTH = 0x0100;
///     }
/// }
///
/// let mask: BlitChannelMask = BlitChannel::COLOR | BlitChannel::DEPTH;
/// assert_eq!(mask.into_raw(), 0x4100);
/// assert_eq!(BlitChannelMask::parse("DEPTH").unwrap(), BlitChannel::DEPTH);
/// ```
///
/// The tag is uninhabited; flags live on it as associated constants.
#[macro_export]
macro_rules! gl_bitmask {
    (
        $(#[$tag_meta:meta])*
        $vis:vis enum $tag:ident => $(#[$mask_meta:meta])* type $mask:ident: $repr:ty {
            $(
                $(#[$flag_meta:meta])*
                const $flag:ident = $value:expr;
            )*
        }
    ) => {
        $(#[$tag_meta])*
        #[derive(Debug, Clone, Copy)]
        $vis enum $tag {}

        #[doc = concat!("Mask of [`", stringify!($tag), "`] flags")]
        $(#[$mask_meta])*
        $vis type $mask = $crate::Bitset<$tag, $repr>;

        impl $tag {
            $(
                $(#[$flag_meta])*
                pub const $flag: $mask = $crate::Bitset::from_raw($value);
            )*
        }

        impl $crate::BitmaskTag<$repr> for $tag {
            const NAME: &'static str = stringify!($mask);
            const FLAGS: &'static [$crate::Flag<$crate::Bitset<Self, $repr>>] = &[
                $($crate::Flag::new(stringify!($flag), Self::$flag),)*
            ];
        }
    };
}
