//! # FerroDB FFI
//!
//! Stable C ABI over FerroDB link lists for language bindings.
//!
//! This crate provides:
//! - C-compatible function exports
//! - Handle ownership conventions
//! - Error code mapping and an out-of-band error message channel
//!
//! Every export is a synchronous pass-through into the engine contract.
//! Engine faults are translated into [`FerroDbResult`] codes at the
//! boundary; no Rust panic or error ever unwinds into the foreign
//! caller's runtime.

#![warn(missing_docs)]

pub mod error;
pub mod linklist;
pub mod types;

pub use error::{ErrorCode, FerroDbResult};
pub use linklist::FfiLinkList;
pub use types::FerroDbLinkList;
