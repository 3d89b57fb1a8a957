//! The payload carried by the panics that this project raises deliberately.
//!
//! Rust panics can carry any `'static + Send` value, but the standard library
//! only knows how to print string payloads. Wrapping the error in an [`Abort`]
//! gives every catcher one well-known type to look for, while keeping the
//! original error reachable through [`Abort::downcast_ref`] and
//! [`Abort::into_inner`].

use std::error::Error as StdError;

use thiserror::Error;

/// The type-erased error carried inside an [`Abort`].
pub type BoxedError = Box<dyn StdError + Send + Sync + 'static>;

/// An error travelling as a panic payload.
///
/// It displays exactly as the error it wraps, and reports that error's source
/// chain as its own.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Abort {
    error: BoxedError,
}

impl Abort {
    /// Wraps `error` so that it can be used as a panic payload.
    pub fn new(error: impl Into<BoxedError>) -> Self {
        let error = error.into();
        Self { error }
    }

    /// Gets the wrapped error.
    #[must_use]
    pub fn error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.error.as_ref()
    }

    /// Returns `true` if the wrapped error is of type `E`.
    #[must_use]
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.error.is::<E>()
    }

    /// Gets the wrapped error as an `E` if that is its concrete type.
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.error.downcast_ref::<E>()
    }

    /// Takes the wrapped error back out as an `E`, handing `self` back
    /// unchanged if it holds some other type.
    ///
    /// # Errors
    ///
    /// - The original [`Abort`] if the wrapped error is not an `E`.
    pub fn downcast<E: StdError + 'static>(self) -> Result<E, Self> {
        match self.error.downcast::<E>() {
            Ok(error) => Ok(*error),
            Err(error) => Err(Self { error }),
        }
    }

    /// Consumes the payload, returning the wrapped error.
    #[must_use]
    pub fn into_inner(self) -> BoxedError {
        self.error
    }
}
