// error.rs

use thiserror::Error;

/// Failures reported by [`crate::split`] and [`crate::normalize_carets`].
///
/// Both are deterministic: feeding the same input again fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An unescaped cmd metacharacter outside quotes, or `%`/`!` inside them.
    #[error("Unquoted CMD metacharacters in string: {input:?}")]
    Metacharacter { input: String },

    /// The legacy and modern runtimes split the input differently.
    #[error("String is ambiguous, legacy and modern runtimes disagree: {input:?}")]
    Ambiguous { input: String },
}

impl Error {
    /// The string that caused the failure.
    pub fn input(&self) -> &str {
        match self {
            Error::Metacharacter { input } | Error::Ambiguous { input } => input,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
