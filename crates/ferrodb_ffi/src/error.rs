//! Error codes, the last-error channel, and fault translation.

use ferrodb_engine::{EngineError, EngineResult};
use std::cell::RefCell;
use std::ffi::CString;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Result code for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FerroDbResult {
    /// Operation succeeded.
    Ok = 0,
    /// Generic error.
    Error = 1,
    /// Invalid argument.
    InvalidArgument = 2,
    /// Row index past the end of the target table.
    IndexOutOfRange = 3,
    /// Link list is detached from its owning row.
    Detached = 4,
    /// Mutation attempted outside a write transaction.
    ReadOnlyTransaction = 5,
    /// I/O error.
    IoError = 6,
    /// Corruption detected.
    Corruption = 7,
    /// Null pointer.
    NullPointer = 8,
    /// The engine call panicked; the panic was absorbed at the boundary.
    Panic = 9,
}

impl FerroDbResult {
    /// Returns true if the result indicates success.
    pub fn is_ok(self) -> bool {
        self == FerroDbResult::Ok
    }

    /// Returns true if the result indicates an error.
    pub fn is_err(self) -> bool {
        self != FerroDbResult::Ok
    }
}

/// Error code type for C compatibility.
pub type ErrorCode = i32;

impl From<FerroDbResult> for ErrorCode {
    fn from(result: FerroDbResult) -> Self {
        result as ErrorCode
    }
}

impl From<ErrorCode> for FerroDbResult {
    fn from(code: ErrorCode) -> Self {
        match code {
            0 => FerroDbResult::Ok,
            1 => FerroDbResult::Error,
            2 => FerroDbResult::InvalidArgument,
            3 => FerroDbResult::IndexOutOfRange,
            4 => FerroDbResult::Detached,
            5 => FerroDbResult::ReadOnlyTransaction,
            6 => FerroDbResult::IoError,
            7 => FerroDbResult::Corruption,
            8 => FerroDbResult::NullPointer,
            9 => FerroDbResult::Panic,
            _ => FerroDbResult::Error,
        }
    }
}

impl From<&EngineError> for FerroDbResult {
    fn from(error: &EngineError) -> Self {
        match error {
            EngineError::IndexOutOfRange { .. } => FerroDbResult::IndexOutOfRange,
            EngineError::Detached => FerroDbResult::Detached,
            EngineError::NotInWriteTransaction => FerroDbResult::ReadOnlyTransaction,
            EngineError::Io(_) => FerroDbResult::IoError,
            EngineError::Corruption { .. } => FerroDbResult::Corruption,
            EngineError::InvalidOperation { .. } => FerroDbResult::Error,
        }
    }
}

// Thread-local storage for last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Sets the last error message.
pub fn set_last_error(message: impl Into<String>) {
    let msg = message.into();
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clears the last error.
pub fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Runs an engine call inside the boundary fault scope.
///
/// Success passes through unchanged. An engine fault is recorded on the
/// last-error channel and converted to its status code. A panic raised
/// by the engine is absorbed here and reported as `Panic`; it never
/// unwinds across the C boundary.
pub(crate) fn catch_faults<T>(op: impl FnOnce() -> EngineResult<T>) -> Result<T, FerroDbResult> {
    match catch_unwind(AssertUnwindSafe(op)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => {
            let status = FerroDbResult::from(&error);
            tracing::debug!(status = ?status, "engine fault at boundary: {error}");
            set_last_error(error.to_string());
            Err(status)
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::debug!("engine panic absorbed at boundary: {message}");
            set_last_error(message);
            Err(FerroDbResult::Panic)
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "engine call panicked".to_string()
    }
}

/// Gets the last error message as a C string.
///
/// Returns null if no error is set.
///
/// # Safety
///
/// The returned pointer is valid until the next FFI call on this thread.
#[no_mangle]
pub extern "C" fn ferrodb_get_last_error() -> *const std::ffi::c_char {
    LAST_ERROR.with(|e| match e.borrow().as_ref() {
        Some(cstr) => cstr.as_ptr(),
        None => std::ptr::null(),
    })
}

/// Clears the last error message.
#[no_mangle]
pub extern "C" fn ferrodb_clear_error() {
    clear_last_error();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_codes() {
        assert_eq!(FerroDbResult::Ok as i32, 0);
        assert_eq!(FerroDbResult::Panic as i32, 9);
        assert!(FerroDbResult::Ok.is_ok());
        assert!(FerroDbResult::Detached.is_err());
    }

    #[test]
    fn error_code_conversion() {
        let result = FerroDbResult::IndexOutOfRange;
        let code: ErrorCode = result.into();
        assert_eq!(code, 3);

        let back: FerroDbResult = code.into();
        assert_eq!(back, FerroDbResult::IndexOutOfRange);

        let unknown: FerroDbResult = 999.into();
        assert_eq!(unknown, FerroDbResult::Error);
    }

    #[test]
    fn engine_error_mapping() {
        let e = EngineError::index_out_of_range(5, 2);
        assert_eq!(FerroDbResult::from(&e), FerroDbResult::IndexOutOfRange);

        let e = EngineError::Detached;
        assert_eq!(FerroDbResult::from(&e), FerroDbResult::Detached);

        let e = EngineError::NotInWriteTransaction;
        assert_eq!(FerroDbResult::from(&e), FerroDbResult::ReadOnlyTransaction);

        let e = EngineError::invalid_operation("nope");
        assert_eq!(FerroDbResult::from(&e), FerroDbResult::Error);
    }

    #[test]
    fn last_error() {
        clear_last_error();
        assert!(ferrodb_get_last_error().is_null());

        set_last_error("test error");
        let ptr = ferrodb_get_last_error();
        assert!(!ptr.is_null());

        // Safety: we just set it
        let msg = unsafe { std::ffi::CStr::from_ptr(ptr) };
        assert_eq!(msg.to_str().unwrap(), "test error");

        clear_last_error();
        assert!(ferrodb_get_last_error().is_null());
    }

    #[test]
    fn catch_faults_success_passes_through() {
        let result = catch_faults(|| Ok(41usize));
        assert_eq!(result.unwrap(), 41);
    }

    #[test]
    fn catch_faults_translates_errors() {
        clear_last_error();
        let result: Result<(), _> = catch_faults(|| Err(EngineError::Detached));
        assert_eq!(result.unwrap_err(), FerroDbResult::Detached);

        let msg = unsafe { std::ffi::CStr::from_ptr(ferrodb_get_last_error()) };
        assert_eq!(
            msg.to_str().unwrap(),
            "link list is detached from its owning row"
        );
    }

    #[test]
    fn catch_faults_absorbs_panics() {
        clear_last_error();
        let result: Result<(), _> = catch_faults(|| panic!("boom"));
        assert_eq!(result.unwrap_err(), FerroDbResult::Panic);

        let msg = unsafe { std::ffi::CStr::from_ptr(ferrodb_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "boom");
    }
}
