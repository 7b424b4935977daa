//! Property-based test generators using proptest.

use ferrodb_engine::RowIndex;
use proptest::prelude::*;

/// Strategy for generating a row index valid against `row_count` rows.
///
/// # Panics
///
/// Panics if `row_count` is zero; an empty table has no valid indices.
pub fn row_index_strategy(row_count: usize) -> impl Strategy<Value = RowIndex> {
    assert!(row_count > 0, "row_count must be non-zero");
    (0..row_count).prop_map(RowIndex::new)
}

/// Strategy for generating a sequence of valid appends.
pub fn append_sequence_strategy(
    row_count: usize,
    max_len: usize,
) -> impl Strategy<Value = Vec<RowIndex>> {
    prop::collection::vec(row_index_strategy(row_count), 0..=max_len)
}
