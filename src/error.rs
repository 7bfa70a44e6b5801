use thiserror::Error;

use crate::core::Charset;

#[derive(Debug, Error)]
pub enum RandError {
    #[error("{context} failed: invalid length {length}, expected at least 1")]
    InvalidLength { context: &'static str, length: i64 },
    #[error("random string failed: charset {charset} selects no characters")]
    EmptyCharset { charset: Charset },
    #[error("{context} failed: secure random source unavailable: {source}")]
    SourceUnavailable {
        context: &'static str,
        #[source]
        source: getrandom::Error,
    },
}

impl RandError {
    /// Replaces the operation name reported in the message, keeping the
    /// error kind and its underlying cause.
    #[must_use]
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { length, .. } => Self::InvalidLength { context, length },
            Self::SourceUnavailable { source, .. } => Self::SourceUnavailable { context, source },
            err @ Self::EmptyCharset { .. } => err,
        }
    }

    pub(crate) fn invalid_length(context: &'static str, length: usize) -> Self {
        Self::InvalidLength {
            context,
            length: i64::try_from(length).unwrap_or(i64::MAX),
        }
    }
}

/// Return early with an error if a condition is not satisfied.
///
/// This macro is equivalent to `if !$cond { return Err(From::from($err)); }`.
#[macro_export]
macro_rules! rand_ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err(::core::convert::From::from($err));
        }
    };
}
