//! Ways a state hierarchy can be malformed.

use thiserror::Error;

/// A defect in the ancestor chain of one state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HierarchyViolation<S> {
    #[error("ancestor chain of {state:?} loops back to {repeated:?}")]
    Cycle { state: S, repeated: S },

    #[error("ancestor chain of {state:?} exceeds the maximum depth of {max}")]
    TooDeep { state: S, max: usize },

    #[error("state {state:?} did not report its ancestor")]
    MissingAncestor { state: S },

    #[error("state {state:?} requested a transition instead of reporting its ancestor")]
    TransitionOnSuper { state: S },
}
