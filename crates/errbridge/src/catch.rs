//! Boundaries that turn an unwinding panic back into an ordinary value.
//!
//! [`catch`] runs a computation under [`std::panic::catch_unwind`]. If the
//! computation panics, the unwind stops at that call and the payload is
//! rendered into a [`catch::Error`](Error) instead, so that code signalling
//! failure by panicking can be driven with the same `Result` handling as
//! everything else.
//!
//! # Scope
//!
//! Interception happens on the calling thread and only for the duration of the
//! call, so concurrent calls never observe each other's panics. The process
//! panic hook is left alone, which means the standard hook still reports the
//! panic on stderr before it is caught. None of this works when the binary is
//! built with `panic = "abort"`.
//!
//! # Unwind Safety
//!
//! The computation is run as if it were [`UnwindSafe`](std::panic::UnwindSafe).
//! If it mutates captured state and then panics halfway through, that state is
//! left as it was at the point of the panic, and it is up to the caller to
//! decide whether it can still be trusted.

use std::{
    any::Any,
    error::Error as StdError,
    io,
    panic::{self, AssertUnwindSafe},
};

use errbridge_errors::{
    abort::{Abort, BoxedError},
    catch::{Error, Result},
};

use crate::zero::zero;

/// The text used for panic payloads that cannot be rendered.
///
/// This matches what the standard panic hook prints for the same payloads.
pub const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

/// Runs `f`, returning its result or the panic it raised.
///
/// # Errors
///
/// - [`Error::Panicked`] if `f` panics, carrying the rendered payload (see
///   [`describe`]).
pub fn catch<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = describe(payload.as_ref());
        tracing::debug!(%message, "caught panic");
        Error::Panicked(message)
    })
}

/// Runs `f`, returning its result alongside the panic it raised, if any.
///
/// When `f` panics the value slot holds [`zero`]`::<T>()`.
pub fn catch_pair<T, F>(f: F) -> (T, Option<Error>)
where
    T: Default,
    F: FnOnce() -> T,
{
    match catch(f) {
        Ok(value) => (value, None),
        Err(error) => (zero(), Some(error)),
    }
}

// Returns the display form of the payload as soon as one of the listed types
// matches it.
macro_rules! describe_displayable {
    ($payload:expr, $($ty:ty),+ $(,)?) => {
        $(
            if let Some(value) = $payload.downcast_ref::<$ty>() {
                return value.to_string();
            }
        )+
    };
}

/// Renders a panic payload as text.
///
/// - An [`Abort`] renders as the error it wraps.
/// - String payloads, as produced by `panic!` and the runtime's own checks,
///   render verbatim.
/// - Boxed errors and [`io::Error`]s render as their display form.
/// - Numbers, `bool` and `char` render as their display form.
/// - Anything else renders as [`OPAQUE_PAYLOAD`].
#[must_use]
pub fn describe(payload: &(dyn Any + Send)) -> String {
    if let Some(abort) = payload.downcast_ref::<Abort>() {
        return abort.to_string();
    }
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        return (*message).to_string();
    }

    describe_displayable!(
        payload,
        String,
        BoxedError,
        Box<dyn StdError + Send>,
        io::Error,
        i8,
        i16,
        i32,
        i64,
        i128,
        isize,
        u8,
        u16,
        u32,
        u64,
        u128,
        usize,
        f32,
        f64,
        bool,
        char,
    );

    OPAQUE_PAYLOAD.to_string()
}
