//! Errors produced when an unwinding panic is intercepted and turned into an
//! ordinary value.

use thiserror::Error;

/// The result type for intercepted computations.
pub type Result<T> = std::result::Result<T, Error>;

/// An intercepted panic.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A computation panicked. The payload is the panic's message, already
    /// rendered to text.
    #[error("panic: {_0}")]
    Panicked(String),
}

impl Error {
    /// Gets the rendered panic payload, without the `panic: ` prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Panicked(message) => message,
        }
    }
}
