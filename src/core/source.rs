/// A cryptographically secure source of random bytes.
///
/// Implementations must not keep any buffer between two calls: every
/// `fill` writes fresh randomness directly into the caller's slice.
pub trait RandomSource {
    /// Fills `dest` entirely with random bytes, or fails without any
    /// guarantee on the content of `dest`.
    fn fill(&self, dest: &mut [u8]) -> Result<(), getrandom::Error>;
}

/// The operating system CSPRNG, as exposed by `getrandom`.
///
/// On wasm targets this resolves to the browser `crypto.getRandomValues`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    #[inline]
    fn fill(&self, dest: &mut [u8]) -> Result<(), getrandom::Error> {
        getrandom::getrandom(dest)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &S {
    #[inline]
    fn fill(&self, dest: &mut [u8]) -> Result<(), getrandom::Error> {
        (**self).fill(dest)
    }
}
