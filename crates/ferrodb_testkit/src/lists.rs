//! In-memory link list doubles.

use ferrodb_engine::{EngineError, EngineResult, LinkList, RowIndex, TxnContext};
use parking_lot::Mutex;
use std::sync::Arc;

/// An in-memory link list backed by a shared vector.
///
/// Appended links land in an `Arc<Mutex<Vec<RowIndex>>>` so a test can
/// keep a clone of the vector and observe mutations after the double has
/// been moved behind an opaque handle.
pub struct MemLinkList {
    /// Row count of the simulated target table.
    row_count: usize,
    /// Links appended so far.
    links: Arc<Mutex<Vec<RowIndex>>>,
    /// Whether the list has been detached from its owning row.
    detached: bool,
}

impl MemLinkList {
    /// Creates an empty list targeting a table with `row_count` rows.
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count,
            links: Arc::new(Mutex::new(Vec::new())),
            detached: false,
        }
    }

    /// Returns a handle to the shared links vector.
    pub fn links(&self) -> Arc<Mutex<Vec<RowIndex>>> {
        Arc::clone(&self.links)
    }

    /// Detaches the list from its owning row.
    ///
    /// Every subsequent operation fails with `Detached`.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    fn check_attached(&self) -> EngineResult<()> {
        if self.detached {
            Err(EngineError::Detached)
        } else {
            Ok(())
        }
    }
}

impl LinkList for MemLinkList {
    fn add(&mut self, txn: &TxnContext, row: RowIndex) -> EngineResult<()> {
        self.check_attached()?;
        txn.require_write()?;
        if row.as_usize() >= self.row_count {
            return Err(EngineError::index_out_of_range(
                row.as_usize(),
                self.row_count,
            ));
        }
        self.links.lock().push(row);
        Ok(())
    }

    fn size(&self, _txn: &TxnContext) -> EngineResult<usize> {
        self.check_attached()?;
        Ok(self.links.lock().len())
    }
}

/// A link list whose every operation panics.
///
/// Used to verify that no unwind escapes the boundary layer.
pub struct PanickingLinkList;

impl LinkList for PanickingLinkList {
    fn add(&mut self, _txn: &TxnContext, _row: RowIndex) -> EngineResult<()> {
        panic!("engine invariant violated in add");
    }

    fn size(&self, _txn: &TxnContext) -> EngineResult<usize> {
        panic!("engine invariant violated in size");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrodb_engine::TxnMode;

    #[test]
    fn add_and_size() {
        let mut list = MemLinkList::new(10);
        let txn = TxnContext::new(TxnMode::Write);

        assert_eq!(list.size(&txn).unwrap(), 0);
        list.add(&txn, RowIndex::new(3)).unwrap();
        list.add(&txn, RowIndex::new(7)).unwrap();
        assert_eq!(list.size(&txn).unwrap(), 2);
        assert_eq!(
            *list.links().lock(),
            vec![RowIndex::new(3), RowIndex::new(7)]
        );
    }

    #[test]
    fn add_out_of_range() {
        let mut list = MemLinkList::new(4);
        let txn = TxnContext::new(TxnMode::Write);

        let err = list.add(&txn, RowIndex::new(4)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::IndexOutOfRange {
                index: 4,
                row_count: 4
            }
        ));
    }

    #[test]
    fn add_requires_write_txn() {
        let mut list = MemLinkList::new(4);
        let txn = TxnContext::new(TxnMode::Read);

        let err = list.add(&txn, RowIndex::new(0)).unwrap_err();
        assert!(matches!(err, EngineError::NotInWriteTransaction));
    }

    #[test]
    fn detached_list_rejects_everything() {
        let mut list = MemLinkList::new(4);
        let txn = TxnContext::new(TxnMode::Write);
        list.detach();

        assert!(matches!(
            list.add(&txn, RowIndex::new(0)),
            Err(EngineError::Detached)
        ));
        assert!(matches!(list.size(&txn), Err(EngineError::Detached)));
    }

    #[test]
    fn size_allowed_in_read_txn() {
        let mut list = MemLinkList::new(4);
        let txn = TxnContext::new(TxnMode::Write);
        list.add(&txn, RowIndex::new(1)).unwrap();

        txn.end_write();
        assert_eq!(list.size(&txn).unwrap(), 1);
    }
}
