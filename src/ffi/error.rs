use std::{
    cell::RefCell,
    ffi::{c_char, c_int},
};

use thiserror::Error;

use super::ErrorCode;
use crate::{error::RandError, ffi_read_string};

/// Error recorded for the FFI caller, each variant maps to the returned
/// [`ErrorCode`].
#[derive(Debug, Error)]
pub enum FfiError {
    #[error("{0} shouldn't be null")]
    NullPointer(&'static str),
    #[error(
        "the pre-allocated {name} buffer is too small; need {required} bytes, allocated \
         {allocated}"
    )]
    BufferTooSmall {
        name: &'static str,
        required: c_int,
        allocated: c_int,
    },
    #[error("invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    #[error("{}: {0}", ErrorCode::from(.0))]
    Rand(#[from] RandError),
    #[error("{0}")]
    Managed(String),
}

impl FfiError {
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NullPointer(_) => ErrorCode::NullPointer,
            Self::BufferTooSmall { .. } => ErrorCode::BufferTooSmall,
            Self::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            Self::Rand(err) => ErrorCode::from(err),
            Self::Managed(_) => ErrorCode::Managed,
        }
    }
}

thread_local! {
    static LAST_ERROR: RefCell<Option<FfiError>> = const { RefCell::new(None) };
}

/// Records `err` as the last error of this thread and returns its code.
pub fn set_last_error(err: FfiError) -> ErrorCode {
    let code = err.code();
    LAST_ERROR.with(|last| *last.borrow_mut() = Some(err));
    code
}

/// Takes the last error message of this thread, empty if there is none.
#[must_use]
pub fn get_last_error() -> String {
    LAST_ERROR
        .with(|last| last.borrow_mut().take())
        .map_or_else(String::new, |err| err.to_string())
}

/// Records an error managed by the FFI client.
///
/// # Safety
///
/// The pointer must point to a null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn h_set_error(error_message_ptr: *const c_char) -> c_int {
    let error_message = ffi_read_string!("error message", error_message_ptr);
    set_last_error(FfiError::Managed(error_message));
    ErrorCode::Success.into()
}

/// Writes the last error message of this thread to `error_ptr`, without a
/// trailing NUL, and sets `*error_len` to its length.
///
/// The error is cleared only once written: on `BufferTooSmall` it is kept
/// and the needed size is written to `*error_len`, so that the call can be
/// retried with a larger buffer.
///
/// # Safety
///
/// `error_ptr` should point to a buffer of `*error_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn h_get_error(error_ptr: *mut c_char, error_len: *mut c_int) -> c_int {
    // reporting through the last error would overwrite the one requested
    if error_ptr.is_null() || error_len.is_null() {
        return ErrorCode::NullPointer.into();
    }
    let message = LAST_ERROR
        .with(|last| last.borrow().as_ref().map(ToString::to_string))
        .unwrap_or_default();
    let Ok(required) = c_int::try_from(message.len()) else {
        return ErrorCode::InvalidArgument.into();
    };
    let allocated = *error_len;
    *error_len = required;
    if allocated < required {
        return ErrorCode::BufferTooSmall.into();
    }
    std::slice::from_raw_parts_mut(error_ptr.cast::<u8>(), message.len())
        .copy_from_slice(message.as_bytes());
    LAST_ERROR.with(|last| last.borrow_mut().take());
    ErrorCode::Success.into()
}
