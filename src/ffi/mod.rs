//! C interface, enabled with the `ffi` feature.
//!
//! Every function writes its output to a caller-allocated buffer and returns
//! an [`ErrorCode`] as an `int`. On error, the message can be retrieved with
//! `h_get_error`.

use std::fmt::Display;

use crate::error::RandError;

#[macro_use]
pub mod macros;

pub mod error;

mod api;
pub use api::{h_rand_bytes, h_rand_hex, h_rand_string};
pub use error::{h_get_error, h_set_error, FfiError};


/// Error code for FFI code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success,
    NullPointer,       // A required pointer is null
    BufferTooSmall,    // The output buffer is too small
    InvalidLength,     // The requested length is lower than 1
    EmptyCharset,      // The charset selects no characters
    SourceUnavailable, // The OS random source failed
    InvalidArgument,   // Invalid argument passed
    Managed,           // FFI client managed the error
    Unknown(i32),      // An unknown code was retrieved
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::Success => 0,
            ErrorCode::NullPointer => -1,
            ErrorCode::BufferTooSmall => 1,
            ErrorCode::InvalidLength => 2,
            ErrorCode::EmptyCharset => 3,
            ErrorCode::SourceUnavailable => 4,
            ErrorCode::InvalidArgument => 5,
            ErrorCode::Managed => 42,
            ErrorCode::Unknown(code) => code,
        }
    }
}

impl From<i32> for ErrorCode {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Success,
            -1 => Self::NullPointer,
            1 => Self::BufferTooSmall,
            2 => Self::InvalidLength,
            3 => Self::EmptyCharset,
            4 => Self::SourceUnavailable,
            5 => Self::InvalidArgument,
            42 => Self::Managed,
            code => Self::Unknown(code),
        }
    }
}

impl From<&RandError> for ErrorCode {
    fn from(err: &RandError) -> Self {
        match err {
            RandError::InvalidLength { .. } => Self::InvalidLength,
            RandError::EmptyCharset { .. } => Self::EmptyCharset,
            RandError::SourceUnavailable { .. } => Self::SourceUnavailable,
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::NullPointer => write!(f, "null pointer"),
            Self::BufferTooSmall => write!(f, "output buffer too small"),
            Self::InvalidLength => write!(f, "invalid length"),
            Self::EmptyCharset => write!(f, "empty charset"),
            Self::SourceUnavailable => write!(f, "secure random source unavailable"),
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::Managed => write!(f, "managed"),
            Self::Unknown(code) => write!(f, "unknown code ({code})"),
        }
    }
}
