//! Ambient transaction state passed into every engine call.

use crate::error::{EngineError, EngineResult};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Access mode of the transaction a call executes under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnMode {
    /// Read-only snapshot access.
    Read,
    /// Exclusive write access.
    Write,
}

/// Transaction state for one database session.
///
/// The engine advances this when transactions begin and end. Boundary
/// adapters hold a shared reference and pass it into every call, so no
/// call depends on thread-local or process-global engine state.
pub struct TxnContext {
    /// Current access mode.
    mode: RwLock<TxnMode>,
    /// Commit version, advanced when a write transaction ends.
    version: AtomicU64,
}

impl TxnContext {
    /// Creates a context in the given mode at version 0.
    pub fn new(mode: TxnMode) -> Self {
        Self {
            mode: RwLock::new(mode),
            version: AtomicU64::new(0),
        }
    }

    /// Returns the current access mode.
    pub fn mode(&self) -> TxnMode {
        *self.mode.read()
    }

    /// Switches the session into a write transaction.
    pub fn begin_write(&self) {
        *self.mode.write() = TxnMode::Write;
    }

    /// Ends the write transaction and advances the commit version.
    pub fn end_write(&self) {
        *self.mode.write() = TxnMode::Read;
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    /// Returns the current commit version.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Fails with `NotInWriteTransaction` unless in write mode.
    pub fn require_write(&self) -> EngineResult<()> {
        match self.mode() {
            TxnMode::Write => Ok(()),
            TxnMode::Read => Err(EngineError::NotInWriteTransaction),
        }
    }
}

impl Default for TxnContext {
    fn default() -> Self {
        Self::new(TxnMode::Read)
    }
}
