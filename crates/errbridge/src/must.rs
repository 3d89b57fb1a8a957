//! Gates that turn a returned error into a panic.
//!
//! These are meant for call sites where a failure cannot be recovered from
//! locally, such as start-up or fixture setup. The panic payload is always an
//! [`Abort`] wrapping the original error, so anything that catches the unwind
//! can recover the error with its type intact.

use errbridge_errors::abort::{Abort, BoxedError};

/// Unwraps `result`, panicking with its error if there is one.
///
/// # Panics
///
/// If `result` is an [`Err`]. The payload is an [`Abort`] wrapping the error.
#[track_caller]
pub fn must<T, E>(result: Result<T, E>) -> T
where
    E: Into<BoxedError>,
{
    match result {
        Ok(value) => value,
        Err(error) => abort(error),
    }
}

/// Returns `value` when `error` is absent, and panics with `error` otherwise.
///
/// This is the same gate as [`must`] for code that carries a value and an
/// optional error separately. The value is dropped when there is an error.
///
/// # Panics
///
/// If `error` is [`Some`]. The payload is an [`Abort`] wrapping the error.
#[track_caller]
pub fn must_pair<T, E>(value: T, error: Option<E>) -> T
where
    E: Into<BoxedError>,
{
    match error {
        None => value,
        Some(error) => abort(error),
    }
}

/// Starts unwinding with `error` wrapped in an [`Abort`].
#[track_caller]
pub(crate) fn abort<E>(error: E) -> !
where
    E: Into<BoxedError>,
{
    std::panic::panic_any(Abort::new(error))
}

/// Method-position access to [`must`] for [`Result`].
pub trait MustExt<T>: sealed::Sealed {
    /// Unwraps the value, panicking with an [`Abort`] if this is an error.
    ///
    /// # Panics
    ///
    /// If `self` is an [`Err`].
    fn must(self) -> T;
}

impl<T, E> MustExt<T> for Result<T, E>
where
    E: Into<BoxedError>,
{
    #[track_caller]
    fn must(self) -> T {
        must(self)
    }
}

mod sealed {
    pub trait Sealed {}

    impl<T, E> Sealed for Result<T, E> {}
}
