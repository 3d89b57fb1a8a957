//! Ready-made handlers for [`Handle`](crate::handle::Handle) and
//! [`handle`](crate::handle::handle).

use std::fmt::Display;

use errbridge_errors::{abort::BoxedError, handle::Error};

/// Propagates every error unchanged.
///
/// A handle built on this is a strict gate equivalent to
/// [`must`](crate::must::must).
#[allow(clippy::unnecessary_wraps)] // Must match the handler signature
pub fn propagate<E>(error: E) -> Option<E> {
    Some(error)
}

/// Resolves every error.
#[must_use]
pub fn suppress<E>(_error: E) -> Option<BoxedError> {
    None
}

/// Logs the error as a warning and then propagates it.
#[allow(clippy::unnecessary_wraps)] // Must match the handler signature
pub fn log_and_propagate<E: Display>(error: E) -> Option<E> {
    tracing::warn!(%error, "operation failed");
    Some(error)
}

/// Logs the error as a warning and then resolves it.
#[must_use]
pub fn log_and_suppress<E: Display>(error: E) -> Option<BoxedError> {
    tracing::warn!(%error, "operation failed, continuing");
    None
}

/// Resolves the errors for which `predicate` holds and propagates the rest.
pub fn suppress_if<E, P>(predicate: P) -> impl Fn(E) -> Option<E>
where
    P: Fn(&E) -> bool,
{
    move |error: E| if predicate(&error) { None } else { Some(error) }
}

/// Propagates every error, rewritten to say what was being done when it
/// happened.
///
/// The original error stays reachable as the rewritten error's source.
pub fn context<E>(context: impl Into<String>) -> impl Fn(E) -> Option<Error>
where
    E: Into<BoxedError>,
{
    let context = context.into();
    move |error: E| {
        Some(Error::Contextual {
            context: context.clone(),
            source:  error.into(),
        })
    }
}
