//! Error types for engine calls.

use std::io;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Faults the engine can raise while servicing a call.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Row index past the end of the target table.
    #[error("row index {index} out of range ({row_count} rows)")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Row count of the target table at the time of the call.
        row_count: usize,
    },

    /// The list is no longer attached to a live owning row.
    ///
    /// Deleting the owning row, or ending the transaction the list was
    /// obtained under, detaches every view onto it.
    #[error("link list is detached from its owning row")]
    Detached,

    /// Mutation attempted outside a write transaction.
    #[error("operation requires a write transaction")]
    NotInWriteTransaction,

    /// I/O error from the storage layer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// On-disk state failed validation.
    #[error("storage corruption: {message}")]
    Corruption {
        /// Description of the corruption.
        message: String,
    },

    /// Operation not permitted in the current engine state.
    #[error("invalid operation: {message}")]
    InvalidOperation {
        /// Description of why the operation is invalid.
        message: String,
    },
}

impl EngineError {
    /// Creates an out-of-range error.
    pub fn index_out_of_range(index: usize, row_count: usize) -> Self {
        Self::IndexOutOfRange { index, row_count }
    }

    /// Creates a corruption error.
    pub fn corruption(message: impl Into<String>) -> Self {
        Self::Corruption {
            message: message.into(),
        }
    }

    /// Creates an invalid operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = EngineError::index_out_of_range(9, 4);
        assert_eq!(e.to_string(), "row index 9 out of range (4 rows)");

        let e = EngineError::Detached;
        assert_eq!(e.to_string(), "link list is detached from its owning row");

        let e = EngineError::corruption("bad header");
        assert_eq!(e.to_string(), "storage corruption: bad header");
    }

    #[test]
    fn io_conversion() {
        let io_err = io::Error::other("disk gone");
        let e: EngineError = io_err.into();
        assert!(matches!(e, EngineError::Io(_)));
    }
}
