//! # FerroDB Engine Contract
//!
//! The dependency contract between the FerroDB storage engine and its
//! language bindings.
//!
//! This crate provides:
//! - The [`LinkList`] trait the boundary layer forwards calls to
//! - The [`EngineError`] fault taxonomy engine calls can raise
//! - The [`TxnContext`] ambient transaction state passed into every call
//!
//! The engine itself (storage, transactions, versioning, the link list
//! representation) lives behind this contract and is not part of this
//! repository. Bindings compile against the trait; the engine supplies
//! the implementation.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod link;
pub mod txn;

pub use error::{EngineError, EngineResult};
pub use link::{LinkList, RowIndex};
pub use txn::{TxnContext, TxnMode};
