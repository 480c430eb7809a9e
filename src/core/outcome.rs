//! The answer a state gives for one event.

/// Result of delivering an event to a state.
///
/// Transition targets and reported ancestors travel inside the variant, so
/// the engines never need a side channel to learn where to go next.
///
/// | Signal      | Expected answer                                        |
/// |-------------|--------------------------------------------------------|
/// | `ENTER`     | anything but `Transition`, normally `Handled`          |
/// | `LEAVE`     | `Handled`, or `Super` to also report the ancestor      |
/// | `INIT`      | `Transition(child)` for a default child, else anything |
/// | `SUPER`     | `Super(ancestor)`, `Super(None)` for top-level states  |
/// | user signal | `Handled`, `Unhandled`, `Super`, or `Transition`       |
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DispatchOutcome<S> {
    /// The event was consumed.
    Handled,

    /// The event was not consumed; the engine asks the state for its
    /// ancestor and tries there.
    Unhandled,

    /// Move to the named state.
    Transition(S),

    /// The immediate ancestor of the answering state. `None` is the root.
    Super(Option<S>),
}

impl<S> DispatchOutcome<S> {
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transition(_))
    }

    /// Target of a `Transition`, if this is one.
    pub fn transition_target(self) -> Option<S> {
        match self {
            Self::Transition(target) => Some(target),
            _ => None,
        }
    }
}
