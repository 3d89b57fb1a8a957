//! This library provides a handful of small bridges between the two ways Rust
//! code reports failure: returning an error, and panicking.
//!
//! - [`must`](must::must) turns a returned error into a panic, for call sites
//!   where a failure cannot be dealt with locally.
//! - [`catch`](catch::catch) turns a panic back into a returned error, at a
//!   single boundary, so that code which fails by panicking can be driven like
//!   any other fallible code.
//! - [`handle`](handle::handle) sits between the two, letting a caller-supplied
//!   handler decide which errors are resolved and which become panics, and
//!   what they look like when they do.
//!
//! Alongside these are two value-construction conveniences,
//! [`zero`](zero::zero) and [`ptr`](ptr::ptr).
//!
//! # Panic Payloads
//!
//! Every panic raised on purpose by this library carries an
//! [`Abort`](errbridge_errors::abort::Abort) as its payload. It wraps the error
//! that caused the panic without erasing its type, so anything catching the
//! unwind, [`catch`](catch::catch) included, can get at the original error.
//!
//! # Logging
//!
//! Raising a panic logs nothing. [`catch`](catch::catch) emits a `debug`
//! level [`tracing`] event when it intercepts one, purely as a diagnostic. The
//! logging handlers in [`handlers`] emit at `warn`, as that is what they are
//! for. The library never installs a subscriber.

#![warn(clippy::all, clippy::cargo, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Allows for better API naming
#![allow(clippy::multiple_crate_versions)] // Enforced by our dependencies

pub mod catch;
pub mod handle;
pub mod handlers;
pub mod must;
pub mod ptr;
pub mod zero;

pub use catch::{catch, catch_pair};
pub use errbridge_errors::abort::Abort;
pub use handle::{handle, Handle};
pub use must::{must, must_pair, MustExt};
pub use ptr::{ptr, ptr_to};
pub use zero::zero;
