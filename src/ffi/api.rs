use std::ffi::{c_char, c_int};

use super::FfiError;
use crate::{
    bytes, error::RandError, ffi_bail, ffi_ensure_capacity, ffi_unwrap, ffi_write_bytes, hex,
    string, Charset,
};

/// Converts a length received through the FFI, rejecting values below 1.
fn requested_length(context: &'static str, n: c_int) -> Result<usize, RandError> {
    match usize::try_from(n) {
        Ok(len) if len >= 1 => Ok(len),
        _ => Err(RandError::InvalidLength {
            context,
            length: i64::from(n),
        }),
    }
}

/// Writes `n` random bytes to `output_ptr`.
///
/// Nothing is generated unless `*output_len >= n`; otherwise `n` is written
/// to `*output_len` and `BufferTooSmall` is returned.
///
/// # Safety
///
/// `output_ptr` should point to a buffer of `*output_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn h_rand_bytes(
    output_ptr: *mut u8,
    output_len: *mut c_int,
    n: c_int,
) -> c_int {
    let len = ffi_unwrap!(requested_length("random bytes", n));
    ffi_ensure_capacity!("output", output_ptr, output_len, n);
    let output = ffi_unwrap!(bytes(len));
    ffi_write_bytes!("output", &output, output_ptr, output_len);
}

/// Writes `n` random lowercase hexadecimal characters to `output_ptr`. No
/// trailing NUL is written.
///
/// Nothing is generated unless `*output_len >= n`.
///
/// # Safety
///
/// `output_ptr` should point to a buffer of `*output_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn h_rand_hex(
    output_ptr: *mut c_char,
    output_len: *mut c_int,
    n: c_int,
) -> c_int {
    let len = ffi_unwrap!(requested_length("random hex", n));
    ffi_ensure_capacity!("output", output_ptr, output_len, n);
    let output = ffi_unwrap!(hex(len));
    ffi_write_bytes!("output", output.as_bytes(), output_ptr, output_len);
}

/// Writes `n` random characters drawn from `charset` to `output_ptr`. No
/// trailing NUL is written.
///
/// `charset` is a bitmask: 1 for uppercase letters, 2 for lowercase letters,
/// 4 for digits. Other bits are ignored. An empty charset is reported before
/// an invalid length, and nothing is generated unless `*output_len >= n`.
///
/// # Safety
///
/// `output_ptr` should point to a buffer of `*output_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn h_rand_string(
    output_ptr: *mut c_char,
    output_len: *mut c_int,
    n: c_int,
    charset: c_int,
) -> c_int {
    let charset = match u8::try_from(charset) {
        Ok(bits) => Charset::from_bits_truncate(bits),
        Err(e) => {
            ffi_bail!(FfiError::InvalidArgument {
                name: "charset",
                reason: format!("{charset} is not a charset bitmask: {e}"),
            });
        }
    };
    if charset.is_empty() {
        ffi_bail!(FfiError::from(RandError::EmptyCharset { charset }));
    }
    let len = ffi_unwrap!(requested_length("random string", n));
    ffi_ensure_capacity!("output", output_ptr, output_len, n);
    let output = ffi_unwrap!(string(len, charset));
    ffi_write_bytes!("output", output.as_bytes(), output_ptr, output_len);
}
