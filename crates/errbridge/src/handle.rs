//! Error processing driven by a caller-supplied handler.
//!
//! A handler is any `Fn(E) -> Option<R>`. It is shown each error that arrives
//! and decides what happens to it:
//!
//! - returning [`None`] marks the error as resolved, and the value that came
//!   with it is handed back to the caller;
//! - returning [`Some`] propagates the returned error, which need not be the one
//!   it was given, as a panic.
//!
//! That one shape covers a strict gate (return the error unchanged, which is
//! exactly [`must`](crate::must::must)), a suppressor (always return `None`), a
//! logger or rewriter, and selective suppression of particular errors. See
//! [`crate::handlers`] for ready-made versions of each.
//!
//! A [`Handle`] holds no state besides the handler itself, so every call is
//! independent of every other.

use std::fmt;

use errbridge_errors::{abort::BoxedError, handle::Error};

use crate::{must::abort, zero::zero};

/// A handler, or the absence of one, ready to be applied to errors.
pub struct Handle<H> {
    handler: Option<H>,
}

impl<H> Handle<H> {
    /// Creates a handle that passes errors to `handler`.
    #[must_use]
    pub fn new(handler: H) -> Self {
        let handler = Some(handler);
        Self { handler }
    }

    /// Creates a handle without a handler.
    ///
    /// Such a handle cannot resolve errors, so it panics on every one it
    /// receives. Calls without an error still succeed.
    #[must_use]
    pub fn unset() -> Self {
        let handler = None;
        Self { handler }
    }

    /// Returns `true` if this handle has a handler.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.handler.is_some()
    }

    /// Applies the handler to a (value, error) pair.
    ///
    /// Without an error the value is returned and the handler is not invoked.
    /// Otherwise the handler sees the error, and the value is returned if the
    /// handler resolves it.
    ///
    /// # Panics
    ///
    /// - With the handler's returned error, wrapped in an
    ///   [`Abort`](errbridge_errors::abort::Abort), if it does not resolve the
    ///   error.
    /// - With [`Error::UnsetHandler`] if there is an error and no handler.
    #[track_caller]
    pub fn call<T, E, R>(&self, value: T, error: Option<E>) -> T
    where
        H: Fn(E) -> Option<R>,
        R: Into<BoxedError>,
    {
        let Some(error) = error else {
            return value;
        };
        let Some(handler) = &self.handler else {
            abort(Error::UnsetHandler)
        };

        match handler(error) {
            None => value,
            Some(error) => abort(error),
        }
    }

    /// Applies the handler to a [`Result`].
    ///
    /// A resolved error yields [`zero`]`::<T>()`, as there is no value to hand
    /// back in its place.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`Self::call`].
    #[track_caller]
    pub fn call_result<T, E, R>(&self, result: Result<T, E>) -> T
    where
        T: Default,
        H: Fn(E) -> Option<R>,
        R: Into<BoxedError>,
    {
        match result {
            Ok(value) => value,
            Err(error) => self.call(zero(), Some(error)),
        }
    }
}

impl<H> Default for Handle<H> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<H> From<Option<H>> for Handle<H> {
    fn from(handler: Option<H>) -> Self {
        Self { handler }
    }
}

impl<H> fmt::Debug for Handle<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle").field("is_set", &self.is_set()).finish()
    }
}

/// Builds a function that applies `handler` to (value, error) pairs.
///
/// This is [`Handle::call`] in closure form, for passing straight to code that
/// expects a function.
pub fn handle<T, E, H, R>(handler: H) -> impl Fn(T, Option<E>) -> T
where
    H: Fn(E) -> Option<R>,
    R: Into<BoxedError>,
{
    let handle = Handle::new(handler);
    move |value: T, error: Option<E>| handle.call(value, error)
}
