//! Errors raised by the dispatch engines.
//!
//! Every variant signals a bug in the application's state handlers or its
//! configuration, not a runtime condition to recover from. After one is
//! returned the machine's active state is unspecified.

use super::signal::Signal;
use thiserror::Error;

/// Errors that can occur while initializing a machine or dispatching to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError<S> {
    #[error("state nesting exceeds the configured maximum depth of {max}")]
    DepthExceeded { max: usize },

    #[error("state {state:?} requested a transition while handling {signal}")]
    TransitionInPseudo { state: S, signal: Signal },

    #[error("state {state:?} did not report its ancestor")]
    MissingAncestor { state: S },

    #[error("machine has not been initialized")]
    NotInitialized,

    #[error("machine does not name an initial state")]
    NoInitialState,
}
