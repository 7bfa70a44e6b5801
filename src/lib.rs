//! Cryptographically secure random bytes, hexadecimal strings and
//! charset-constrained strings, drawn from the operating system CSPRNG.

pub mod core;
pub mod error;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use crate::{
    core::{
        bytes, bytes_with, hex, hex_with, must_bytes, must_hex, must_string, string, string_with,
        Alphabet, Charset, OsRandom, RandomSource,
    },
    error::RandError,
};
