//! Error handling types and utilities for the errbridge project.
//!
//! # Error Conventions
//!
//! The whole point of this project is moving failures between two shapes: an
//! error that is _returned_, and a panic that _unwinds_. To keep both sides of
//! that bridge inspectable we keep our errors strongly typed at all times, with
//! one module per concern:
//!
//! - [`abort`] holds [`abort::Abort`], the payload of every panic that we raise
//!   on purpose. It wraps the caller's error without changing its type, so a
//!   catcher can get the original error back out of it.
//! - [`catch`] holds the error produced when an unwinding panic is intercepted
//!   and turned back into a value.
//! - [`handle`] holds the errors raised by handler-driven error processing.

#![warn(clippy::all, clippy::cargo, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Allows for better API naming
#![allow(clippy::multiple_crate_versions)] // Enforced by our dependencies

pub mod abort;
pub mod catch;
pub mod handle;

use thiserror::Error;

/// The result type to be used at the boundaries of the library.
pub type Result<T> = std::result::Result<T, Error>;

/// The root of the error hierarchy for this project.
///
/// Every module-level error can be implicitly converted to this type, which
/// makes it the natural choice for code that deals with more than one of them
/// at once.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Abort(#[from] abort::Abort),

    #[error(transparent)]
    Catch(#[from] catch::Error),

    #[error(transparent)]
    Handle(#[from] handle::Error),
}

#[cfg(test)]
mod test {
    use crate::{abort::Abort, catch, handle, Error, Result};

    #[test]
    fn module_errors_convert_into_the_root() {
        let caught: Error = catch::Error::Panicked("boom".to_string()).into();
        assert!(matches!(caught, Error::Catch(_)));
        assert_eq!(caught.to_string(), "panic: boom");

        let unset: Error = handle::Error::UnsetHandler.into();
        assert!(matches!(unset, Error::Handle(handle::Error::UnsetHandler)));

        let aborted: Error = Abort::new("disk on fire").into();
        assert_eq!(aborted.to_string(), "disk on fire");
    }

    #[test]
    fn module_errors_propagate_through_the_root_result() {
        fn recover(caught: catch::Result<u8>) -> Result<u8> {
            let value = caught?;
            Ok(value + 1)
        }

        assert!(matches!(recover(Ok(1)), Ok(2)));

        let failed = recover(Err(catch::Error::Panicked("boom".to_string())));
        assert!(matches!(
            failed,
            Err(Error::Catch(catch::Error::Panicked(ref message))) if message == "boom"
        ));
    }
}
