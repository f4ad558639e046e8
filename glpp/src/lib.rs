//! # Helix GL++: Typed OpenGL Vocabulary
//!
//! Compile-time type safety for OpenGL bindings, at zero runtime cost.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        helix-glpp                            │
//! │                                                              │
//! │  ┌──────────────────┐            ┌────────────────────────┐  │
//! │  │  Bitset<Tag, U>  │            │     Semantic types     │  │
//! │  │  | & ^ ! == bool │            │ GLenum Texture GLsync  │  │
//! │  └────────┬─────────┘            └───────────┬────────────┘  │
//! │           ▼                                  ▼               │
//! │  ┌──────────────────┐            ┌────────────────────────┐  │
//! │  │   Flag groups    │            │      Type catalog      │  │
//! │  │ ClearBufferMask  │            │  names, layout, repr   │  │
//! │  └──────────────────┘            └────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two halves never call each other; both are vocabulary for the
//! entry-point wrappers built on top.
//!
//! ```
//! use helix_glpp::{ClearBuffer, ClearBufferMask, GLbitfield, Texture};
//!
//! fn clear(mask: ClearBufferMask) -> GLbitfield {
//!     mask.into_raw()
//! }
//!
//! assert_eq!(clear(ClearBuffer::COLOR | ClearBuffer::DEPTH), 0x4100);
//! assert_eq!(u32::from(Texture(3)), 3);
//! ```

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// =============================================================================
// MODULE EXPORTS
// =============================================================================

pub mod bitset;
pub mod catalog;
pub mod error;
pub mod masks;
pub mod types;

// Re-exports for convenience
pub use bitset::{BitRepr, Bitset, BitmaskTag, Flag, Flags};
pub use error::{Error, Result};
pub use masks::*;
pub use types::*;
