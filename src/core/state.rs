//! State identifiers.
//!
//! A state is a value naming one node of a machine's state tree. The
//! behavior attached to it lives in the owning [`Machine`](crate::Machine),
//! which dispatches on the identifier.

use std::fmt::Debug;

/// Trait for state identifiers.
///
/// States are compared by value, so they must be cheap to copy and
/// compare. Usually they are fieldless enums; see
/// [`state_enum!`](crate::state_enum) for a shorthand.
///
/// # Example
///
/// ```rust
/// use hsmlite::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Door {
///     Closed,
///     Open,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State: Copy + Eq + Debug {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}
