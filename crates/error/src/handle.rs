//! Errors raised while processing errors through a caller-supplied handler.

use thiserror::Error;

use crate::abort::BoxedError;

/// Errors to do with handler-driven error processing.
#[derive(Debug, Error)]
pub enum Error {
    /// An error arrived at a handle that was never given a handler, so there
    /// is nothing that could decide whether it is resolved.
    #[error("an error was received but no handler is set")]
    UnsetHandler,

    /// An error rewritten by a handler to carry additional context.
    #[error("{context}: {source}")]
    Contextual {
        context: String,
        #[source]
        source:  BoxedError,
    },
}
