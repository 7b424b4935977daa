//! Link list FFI functions.

use crate::error::{catch_faults, clear_last_error, set_last_error, FerroDbResult};
use crate::types::FerroDbLinkList;
use ferrodb_engine::{LinkList, RowIndex, TxnContext};
use std::sync::Arc;

/// Adapter-owned wrapper around an engine link list.
///
/// Pairs the list with the transaction context its calls execute under,
/// so every forwarded call passes the ambient engine state explicitly.
pub struct FfiLinkList {
    /// Transaction state for the owning session.
    txn: Arc<TxnContext>,
    /// The engine-side list.
    list: Box<dyn LinkList>,
}

impl FfiLinkList {
    /// Wraps an engine list for export across the boundary.
    pub fn new(list: Box<dyn LinkList>, txn: Arc<TxnContext>) -> Self {
        Self { txn, list }
    }

    /// Leaks the wrapper into a raw handle owned by the foreign caller.
    ///
    /// The caller must release it with exactly one call to
    /// `ferrodb_linklist_destroy`.
    pub fn into_raw(self) -> *mut FerroDbLinkList {
        Box::into_raw(Box::new(self)) as *mut FerroDbLinkList
    }
}

/// Appends a link to the row at `row_ndx` to the end of the list.
///
/// # Arguments
///
/// * `list` - The link list handle
/// * `row_ndx` - Index of the target row in the engine's record space
///
/// # Returns
///
/// `FerroDbResult::Ok` on success, error code otherwise. On error, the
/// detail message is available from `ferrodb_get_last_error`.
///
/// # Safety
///
/// `list` must be a live handle produced by the accessor layer and not
/// yet passed to `ferrodb_linklist_destroy`.
#[no_mangle]
pub unsafe extern "C" fn ferrodb_linklist_add(
    list: *mut FerroDbLinkList,
    row_ndx: usize,
) -> FerroDbResult {
    clear_last_error();

    if list.is_null() {
        set_last_error("null link list handle");
        return FerroDbResult::NullPointer;
    }

    let wrapper = &mut *(list as *mut FfiLinkList);

    match catch_faults(|| wrapper.list.add(&wrapper.txn, RowIndex::new(row_ndx))) {
        Ok(()) => FerroDbResult::Ok,
        Err(status) => status,
    }
}

/// Gets the current element count of the list.
///
/// # Arguments
///
/// * `list` - The link list handle
/// * `out_size` - Output pointer for the element count
///
/// # Returns
///
/// `FerroDbResult::Ok` on success, error code otherwise. On error,
/// `out_size` is set to 0.
///
/// # Safety
///
/// - `list` must be a live handle not yet destroyed
/// - `out_size` must be a valid pointer
#[no_mangle]
pub unsafe extern "C" fn ferrodb_linklist_size(
    list: *mut FerroDbLinkList,
    out_size: *mut usize,
) -> FerroDbResult {
    clear_last_error();

    if list.is_null() || out_size.is_null() {
        set_last_error("null pointer argument");
        return FerroDbResult::NullPointer;
    }

    let wrapper = &*(list as *mut FfiLinkList);

    match catch_faults(|| wrapper.list.size(&wrapper.txn)) {
        Ok(size) => {
            *out_size = size;
            FerroDbResult::Ok
        }
        Err(status) => {
            *out_size = 0;
            status
        }
    }
}

/// Destroys a link list handle.
///
/// Releases the adapter-held wrapper. The engine-side list is dropped
/// with it.
///
/// # Arguments
///
/// * `list` - The link list handle (consumed)
///
/// # Returns
///
/// `FerroDbResult::Ok` on success, error code otherwise.
///
/// # Safety
///
/// `list` must be a live handle produced by the accessor layer. After
/// this call the handle is invalid: passing it to any `ferrodb_linklist_*`
/// function, including this one, is undefined behavior. Destruction is
/// not reference counted and is never performed implicitly; the foreign
/// caller owns the handle and must release it exactly once.
#[no_mangle]
pub unsafe extern "C" fn ferrodb_linklist_destroy(list: *mut FerroDbLinkList) -> FerroDbResult {
    clear_last_error();

    if list.is_null() {
        set_last_error("null link list handle");
        return FerroDbResult::NullPointer;
    }

    let wrapper = Box::from_raw(list as *mut FfiLinkList);

    // Dropping the engine list can fault; absorb it like any other call.
    match catch_faults(move || {
        drop(wrapper);
        Ok(())
    }) {
        Ok(()) => FerroDbResult::Ok,
        Err(status) => status,
    }
}
