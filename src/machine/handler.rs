//! The contract between an application and the engines.

use crate::core::{DispatchError, DispatchOutcome, Event, Signal, State};
use tracing::trace;

/// An application object whose behavior is split into states.
///
/// The engines call [`handle`](Machine::handle) with the identifier of the
/// state that should react; the implementation typically matches on the
/// state and forwards to one method per state.
///
/// # Example
///
/// ```rust
/// use hsmlite::core::{DispatchOutcome, Event, Signal};
/// use hsmlite::{state_enum, Machine};
///
/// state_enum! {
///     pub enum Light {
///         Off,
///         On,
///     }
/// }
///
/// const TOGGLE: Signal = Signal::user(0);
///
/// struct Lamp {
///     lit: bool,
/// }
///
/// impl Machine for Lamp {
///     type State = Light;
///     type Payload = ();
///
///     fn handle(&mut self, state: Light, event: &Event) -> DispatchOutcome<Light> {
///         match (state, event.signal) {
///             (Light::On, Signal::ENTER) => {
///                 self.lit = true;
///                 DispatchOutcome::Handled
///             }
///             (Light::On, Signal::LEAVE) => {
///                 self.lit = false;
///                 DispatchOutcome::Handled
///             }
///             (Light::Off, TOGGLE) => DispatchOutcome::Transition(Light::On),
///             (Light::On, TOGGLE) => DispatchOutcome::Transition(Light::Off),
///             _ => DispatchOutcome::Super(None),
///         }
///     }
/// }
/// ```
pub trait Machine {
    /// Identifier of one state of this machine.
    type State: State;

    /// Application data carried by events. The engines never look at it.
    type Payload;

    /// Deliver `event` to `state`.
    ///
    /// See [`DispatchOutcome`] for what each signal expects back.
    fn handle(
        &mut self,
        state: Self::State,
        event: &Event<Self::Payload>,
    ) -> DispatchOutcome<Self::State>;

    /// State to start in when the engine is started without naming one.
    ///
    /// Default implementation returns `None`.
    fn initial(&self) -> Option<Self::State> {
        None
    }
}

pub(crate) fn deliver_enter<M: Machine>(
    machine: &mut M,
    state: M::State,
) -> Result<(), DispatchError<M::State>> {
    trace!(state = state.name(), "enter");
    reject_transition(state, Signal::ENTER, machine.handle(state, &Event::ENTER)).map(drop)
}

/// Delivers LEAVE and hands back the raw answer for callers that care
/// about a reported ancestor.
pub(crate) fn deliver_leave<M: Machine>(
    machine: &mut M,
    state: M::State,
) -> Result<DispatchOutcome<M::State>, DispatchError<M::State>> {
    trace!(state = state.name(), "leave");
    reject_transition(state, Signal::LEAVE, machine.handle(state, &Event::LEAVE))
}

/// Target of the state's initial transition, if it has one.
pub(crate) fn deliver_init<M: Machine>(machine: &mut M, state: M::State) -> Option<M::State> {
    trace!(state = state.name(), "init");
    machine.handle(state, &Event::INIT).transition_target()
}

fn reject_transition<S: State>(
    state: S,
    signal: Signal,
    outcome: DispatchOutcome<S>,
) -> Result<DispatchOutcome<S>, DispatchError<S>> {
    match outcome {
        DispatchOutcome::Transition(_) => Err(DispatchError::TransitionInPseudo { state, signal }),
        other => Ok(other),
    }
}
