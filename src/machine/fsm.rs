//! Flat state machine engine.

use crate::core::{DispatchError, DispatchOutcome, Event, State};
use crate::machine::handler::{deliver_enter, deliver_init, deliver_leave, Machine};
use tracing::debug;

/// Engine for machines whose states do not nest.
///
/// `Unhandled` and `Super` answers are treated like `Handled`: there is no
/// ancestor to escalate to. Initial transitions are still honored, so a
/// state can hand over to a default successor right after it is entered.
///
/// Handlers must not answer ENTER or LEAVE with `Transition`; doing so is
/// rejected with [`DispatchError::TransitionInPseudo`].
pub struct Fsm<M: Machine> {
    machine: M,
    current: Option<M::State>,
}

impl<M: Machine> Fsm<M> {
    /// Wrap `machine`. No state is active until [`init`](Fsm::init).
    pub fn new(machine: M) -> Self {
        Self {
            machine,
            current: None,
        }
    }

    /// Active state, `None` before initialization.
    pub fn current(&self) -> Option<M::State> {
        self.current
    }

    pub fn machine(&self) -> &M {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut M {
        &mut self.machine
    }

    pub fn into_inner(self) -> M {
        self.machine
    }

    /// Enter `initial`, then follow initial transitions until a state
    /// answers INIT without one.
    pub fn init(&mut self, initial: M::State) -> Result<(), DispatchError<M::State>> {
        let mut state = initial;
        self.current = Some(state);
        deliver_enter(&mut self.machine, state)?;

        while let Some(next) = deliver_init(&mut self.machine, state) {
            debug!(source = state.name(), target = next.name(), "initial transition");
            deliver_leave(&mut self.machine, state)?;
            state = next;
            self.current = Some(state);
            deliver_enter(&mut self.machine, state)?;
        }
        Ok(())
    }

    /// [`init`](Fsm::init) with the state named by [`Machine::initial`].
    pub fn start(&mut self) -> Result<(), DispatchError<M::State>> {
        let initial = self
            .machine
            .initial()
            .ok_or(DispatchError::NoInitialState)?;
        self.init(initial)
    }

    /// Deliver `event` to the active state and carry out any transition it
    /// requests. A transition to the active state itself still leaves and
    /// re-enters it.
    pub fn dispatch(&mut self, event: &Event<M::Payload>) -> Result<(), DispatchError<M::State>> {
        let state = self.current.ok_or(DispatchError::NotInitialized)?;

        if let DispatchOutcome::Transition(target) = self.machine.handle(state, event) {
            debug!(
                source = state.name(),
                target = target.name(),
                signal = %event.signal,
                "transition"
            );
            deliver_leave(&mut self.machine, state)?;
            self.init(target)?;
        }
        Ok(())
    }
}
