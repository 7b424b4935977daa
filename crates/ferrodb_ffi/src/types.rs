//! Type definitions for FFI.

/// An opaque link list handle.
///
/// This is a pointer to an adapter-owned wrapper around an engine link
/// list. Never dereference or modify directly; pass it back to the
/// `ferrodb_linklist_*` functions.
#[repr(C)]
pub struct FerroDbLinkList {
    _private: [u8; 0],
}
