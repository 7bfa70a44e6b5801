pub use std::ffi::CStr;

/// Records the given [`FfiError`](crate::ffi::FfiError) as last error and
/// returns early with its code.
#[macro_export]
macro_rules! ffi_bail {
    ($err:expr $(,)?) => {
        return $crate::ffi::error::set_last_error($err).into()
    };
}

/// Returns early with `NullPointer` if `ptr` is null.
///
/// - `name`    : name of the pointer to use in error message
/// - `ptr`     : pointer to check
#[macro_export]
macro_rules! ffi_not_null {
    ($name:literal, $ptr:expr) => {
        if $ptr.is_null() {
            $crate::ffi_bail!($crate::ffi::error::FfiError::NullPointer($name));
        }
    };
}

/// Unwraps a `Result<_, RandError>`, returning early with the code of the
/// error kind. The error itself is kept as last error.
#[macro_export]
macro_rules! ffi_unwrap {
    ($res:expr $(,)?) => {
        match $res {
            Ok(v) => v,
            Err(e) => {
                $crate::ffi_bail!($crate::ffi::error::FfiError::from(e));
            }
        }
    };
}

/// Checks that the output buffer can hold `required` bytes.
///
/// Both pointers must be non-null. If `*len` is lower than `required`,
/// `required` is written to `*len` and the macro returns early with
/// `BufferTooSmall`. Calling it before generating anything keeps size
/// queries (`*len == 0`) cheap.
///
/// - `name`        : buffer name to use in error message
/// - `ptr`         : pointer to the output buffer
/// - `len`         : pointer to the allocated length of the output buffer
/// - `required`    : number of bytes to be written
#[macro_export]
macro_rules! ffi_ensure_capacity {
    ($name:literal, $ptr:ident, $len:ident, $required:expr) => {
        $crate::ffi_not_null!($name, $ptr);
        $crate::ffi_not_null!("output length", $len);
        let required: i32 = $required;
        let allocated = *$len;
        if allocated < required {
            *$len = required;
            $crate::ffi_bail!($crate::ffi::error::FfiError::BufferTooSmall {
                name: $name,
                required,
                allocated,
            });
        }
    };
}

/// Writes `bytes` to the output buffer and its length to `*len`, then
/// returns `Success`.
///
/// # Safety
///
/// If the allocated space is fewer than `*len`, calling this macro may result
/// in a runtime memory error.
///
/// - `name`    : buffer name to use in error message
/// - `bytes`   : bytes to write
/// - `ptr`     : pointer to the output buffer
/// - `len`     : pointer to the allocated length of the output buffer
#[macro_export]
macro_rules! ffi_write_bytes {
    ($name:literal, $bytes:expr, $ptr:ident, $len:ident $(,)?) => {
        let bytes: &[u8] = $bytes;
        let Ok(written) = i32::try_from(bytes.len()) else {
            $crate::ffi_bail!($crate::ffi::error::FfiError::InvalidArgument {
                name: $name,
                reason: format!("{} bytes do not fit in an FFI buffer", bytes.len()),
            });
        };
        $crate::ffi_ensure_capacity!($name, $ptr, $len, written);
        std::slice::from_raw_parts_mut($ptr.cast::<u8>(), bytes.len()).copy_from_slice(bytes);
        *$len = written;
        return $crate::ffi::ErrorCode::Success.into();
    };
}

/// Reads a Rust string from the given pointer to a null-terminated C string.
///
/// - `name`    : object name to use in error message
/// - `ptr`     : pointer to the input null-terminated C string
#[macro_export]
macro_rules! ffi_read_string {
    ($name:literal, $ptr:ident) => {{
        $crate::ffi_not_null!($name, $ptr);

        match $crate::ffi::macros::CStr::from_ptr($ptr.cast::<std::ffi::c_char>()).to_str() {
            Ok(msg) => msg.to_owned(),
            Err(e) => {
                $crate::ffi_bail!($crate::ffi::error::FfiError::InvalidArgument {
                    name: $name,
                    reason: format!("invalid C string: {e}"),
                });
            }
        }
    }};
}
