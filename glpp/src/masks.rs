//! # OpenGL Bitfield Groups
//!
//! Concrete flag groups of the OpenGL registry, each with its own tag so a
//! `glClear` mask can never reach `glMapBufferRange`.

use crate::types::GLbitfield;

// =============================================================================
// CLEAR
// =============================================================================

crate::gl_bitmask! {
    /// Buffers selected by `glClear`
    pub enum ClearBuffer => type ClearBufferMask: GLbitfield {
        /// `GL_DEPTH_BUFFER_BIT`
        const DEPTH = 0x0000_0100;
        /// `GL_STENCIL_BUFFER_BIT`
        const STENCIL = 0x0000_0400;
        /// `GL_COLOR_BUFFER_BIT`
        const COLOR = 0x0000_4000;
    }
}

// =============================================================================
// BUFFER MAPPING
// =============================================================================

crate::gl_bitmask! {
    /// Access bits of `glMapBufferRange`
    pub enum MapBufferAccess => type MapBufferAccessMask: GLbitfield {
        /// `GL_MAP_READ_BIT`
        const READ = 0x0001;
        /// `GL_MAP_WRITE_BIT`
        const WRITE = 0x0002;
        /// `GL_MAP_INVALIDATE_RANGE_BIT`
        const INVALIDATE_RANGE = 0x0004;
        /// `GL_MAP_INVALIDATE_BUFFER_BIT`
        const INVALIDATE_BUFFER = 0x0008;
        /// `GL_MAP_FLUSH_EXPLICIT_BIT`
        const FLUSH_EXPLICIT = 0x0010;
        /// `GL_MAP_UNSYNCHRONIZED_BIT`
        const UNSYNCHRONIZED = 0x0020;
        /// `GL_MAP_PERSISTENT_BIT`
        const PERSISTENT = 0x0040;
        /// `GL_MAP_COHERENT_BIT`
        const COHERENT = 0x0080;
    }
}

crate::gl_bitmask! {
    /// Storage flags of `glBufferStorage`
    pub enum BufferStorage => type BufferStorageMask: GLbitfield {
        /// `GL_MAP_READ_BIT`
        const MAP_READ = 0x0001;
        /// `GL_MAP_WRITE_BIT`
        const MAP_WRITE = 0x0002;
        /// `GL_MAP_PERSISTENT_BIT`
        const MAP_PERSISTENT = 0x0040;
        /// `GL_MAP_COHERENT_BIT`
        const MAP_COHERENT = 0x0080;
        /// `GL_DYNAMIC_STORAGE_BIT`
        const DYNAMIC_STORAGE = 0x0100;
        /// `GL_CLIENT_STORAGE_BIT`
        const CLIENT_STORAGE = 0x0200;
    }
}

// =============================================================================
// SYNC & CONTEXT
// =============================================================================

crate::gl_bitmask! {
    /// Flags of `glClientWaitSync`
    pub enum SyncObject => type SyncObjectMask: GLbitfield {
        /// `GL_SYNC_FLUSH_COMMANDS_BIT`
        const FLUSH_COMMANDS = 0x0001;
    }
}

crate::gl_bitmask! {
    /// Value of `GL_CONTEXT_FLAGS`
    pub enum ContextFlag => type ContextFlagMask: GLbitfield {
        /// `GL_CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT`
        const FORWARD_COMPATIBLE = 0x0001;
        /// `GL_CONTEXT_FLAG_DEBUG_BIT`
        const DEBUG = 0x0002;
        /// `GL_CONTEXT_FLAG_ROBUST_ACCESS_BIT`
        const ROBUST_ACCESS = 0x0004;
        /// `GL_CONTEXT_FLAG_NO_ERROR_BIT`
        const NO_ERROR = 0x0008;
    }
}

// =============================================================================
// STATIC ASSERTIONS
// =============================================================================

static_assertions::assert_eq_size!(ClearBufferMask, GLbitfield);
static_assertions::assert_eq_size!(MapBufferAccessMask, GLbitfield);
static_assertions::assert_type_ne_all!(
    ClearBufferMask,
    MapBufferAccessMask,
    BufferStorageMask,
    SyncObjectMask,
    ContextFlagMask
);
static_assertions::assert_not_impl_any!(MapBufferAccessMask: From<BufferStorageMask>, From<GLbitfield>);
static_assertions::assert_impl_all!(ClearBufferMask: Send, Sync, Copy);
