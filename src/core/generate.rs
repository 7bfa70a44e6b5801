use tracing::{debug, trace, warn};

use super::{Alphabet, Charset, OsRandom, RandomSource};
use crate::{error::RandError, rand_ensure};

const BYTES_CONTEXT: &str = "random bytes";
const HEX_CONTEXT: &str = "random hex";
const STRING_CONTEXT: &str = "random string";

/// Generates `n` random bytes from the given source.
///
/// # Errors
///
/// - [`RandError::InvalidLength`] if `n` is zero, the source is not called
/// - [`RandError::SourceUnavailable`] if the source fails
pub fn bytes_with<S: RandomSource>(source: &S, n: usize) -> Result<Vec<u8>, RandError> {
    trace!("bytes: entering: n: {n}");
    if n < 1 {
        debug!("bytes: rejected length {n}");
        return Err(RandError::invalid_length(BYTES_CONTEXT, n));
    }
    let mut data = vec![0_u8; n];
    source.fill(&mut data).map_err(|source| {
        warn!("bytes: secure random source failed: {source}");
        RandError::SourceUnavailable {
            context: BYTES_CONTEXT,
            source,
        }
    })?;
    Ok(data)
}

/// Generates `n` random bytes from the OS CSPRNG.
///
/// # Errors
///
/// See [`bytes_with`].
pub fn bytes(n: usize) -> Result<Vec<u8>, RandError> {
    bytes_with(&OsRandom, n)
}

/// Generates `n` random bytes, panicking on failure.
///
/// # Panics
///
/// If `n` is zero or the OS CSPRNG is unavailable.
#[must_use]
pub fn must_bytes(n: usize) -> Vec<u8> {
    bytes(n).unwrap_or_else(|e| panic!("{e}"))
}

/// Generates `n` lowercase hexadecimal characters from the given source.
///
/// `(n + 1) / 2` bytes are drawn; for an odd `n` only the high nibble of
/// the last byte is kept.
///
/// # Errors
///
/// Same kinds as [`bytes_with`], reported as `random hex` failures.
pub fn hex_with<S: RandomSource>(source: &S, n: usize) -> Result<String, RandError> {
    trace!("hex: entering: n: {n}");
    rand_ensure!(n >= 1, {
        debug!("hex: rejected length {n}");
        RandError::invalid_length(HEX_CONTEXT, n)
    });
    let data = bytes_with(source, n.div_ceil(2)).map_err(|e| e.with_context(HEX_CONTEXT))?;
    let mut encoded = hex::encode(data);
    encoded.truncate(n);
    Ok(encoded)
}

/// Generates `n` lowercase hexadecimal characters from the OS CSPRNG.
///
/// ```
/// let token = cloudproof_rand::hex(5)?;
/// assert_eq!(token.len(), 5);
/// assert!(token.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
/// # Ok::<(), cloudproof_rand::RandError>(())
/// ```
///
/// # Errors
///
/// See [`hex_with`].
pub fn hex(n: usize) -> Result<String, RandError> {
    hex_with(&OsRandom, n)
}

/// Generates `n` random hexadecimal characters, panicking on failure.
///
/// # Panics
///
/// If `n` is zero or the OS CSPRNG is unavailable.
#[must_use]
pub fn must_hex(n: usize) -> String {
    hex(n).unwrap_or_else(|e| panic!("{e}"))
}

/// Generates a string of `n` characters drawn from the alphabet of
/// `charset`, using the given source.
///
/// Each random byte `b` selects the character at `b % alphabet.len()`.
///
/// # Errors
///
/// - [`RandError::EmptyCharset`] if `charset` selects no range, checked
///   before anything else
/// - [`RandError::InvalidLength`] if `n` is zero
/// - [`RandError::SourceUnavailable`] if the source fails
pub fn string_with<S: RandomSource>(
    source: &S,
    n: usize,
    charset: Charset,
) -> Result<String, RandError> {
    trace!("string: entering: n: {n}, charset: {charset}");
    let alphabet = Alphabet::try_from(charset).map_err(|e| {
        debug!("string: rejected empty charset {:#05b}", charset.bits());
        e
    })?;
    rand_ensure!(n >= 1, {
        debug!("string: rejected length {n}");
        RandError::invalid_length(STRING_CONTEXT, n)
    });

    let data = bytes_with(source, n).map_err(|e| e.with_context(STRING_CONTEXT))?;
    Ok(data
        .into_iter()
        .map(|b| alphabet.char_at(b))
        .collect::<String>())
}

/// Generates a string of `n` characters drawn from the alphabet of
/// `charset`, using the OS CSPRNG.
///
/// ```
/// use cloudproof_rand::{string, Charset};
///
/// let pin = string(10, Charset::DIGIT)?;
/// assert_eq!(pin.len(), 10);
/// assert!(pin.bytes().all(|b| b.is_ascii_digit()));
/// # Ok::<(), cloudproof_rand::RandError>(())
/// ```
///
/// # Errors
///
/// See [`string_with`].
pub fn string(n: usize, charset: Charset) -> Result<String, RandError> {
    string_with(&OsRandom, n, charset)
}

/// Generates a random string, panicking on failure.
///
/// # Panics
///
/// On any error returned by [`string`].
#[must_use]
pub fn must_string(n: usize, charset: Charset) -> String {
    string(n, charset).unwrap_or_else(|e| panic!("{e}"))
}
