//! Helpers for driving a machine from a queue.

use crate::core::{DispatchError, Event, State};
use crate::machine::fsm::Fsm;
use crate::machine::handler::Machine;
use crate::machine::hsm::Hsm;
use crate::queue::EventQueue;

/// Anything events can be dispatched to.
pub trait Dispatch {
    type State: State;
    type Payload;

    fn dispatch(&mut self, event: &Event<Self::Payload>) -> Result<(), DispatchError<Self::State>>;
}

impl<M: Machine> Dispatch for Fsm<M> {
    type State = M::State;
    type Payload = M::Payload;

    fn dispatch(&mut self, event: &Event<M::Payload>) -> Result<(), DispatchError<M::State>> {
        Fsm::dispatch(self, event)
    }
}

impl<M: Machine, const DEPTH: usize> Dispatch for Hsm<M, DEPTH> {
    type State = M::State;
    type Payload = M::Payload;

    fn dispatch(&mut self, event: &Event<M::Payload>) -> Result<(), DispatchError<M::State>> {
        Hsm::dispatch(self, event)
    }
}

/// Dispatch the IDLE pseudo-event.
pub fn dispatch_idle<D>(machine: &mut D) -> Result<(), DispatchError<D::State>>
where
    D: Dispatch + ?Sized,
{
    machine.dispatch(&Event::IDLE)
}

/// Dispatch, then remove, every event queued when the call starts.
///
/// Events pushed while draining wait for the next call. When the queue is
/// empty to begin with and `idle_if_empty` is set, a single IDLE event is
/// dispatched instead. Returns how many events were dispatched.
///
/// An event whose dispatch fails is still removed before the error is
/// returned; later events stay queued.
pub fn dispatch_all<D, Q>(
    machine: &mut D,
    queue: &mut Q,
    idle_if_empty: bool,
) -> Result<usize, DispatchError<D::State>>
where
    D: Dispatch + ?Sized,
    Q: EventQueue<Event<D::Payload>> + ?Sized,
{
    let pending = queue.size();
    if pending == 0 {
        if idle_if_empty {
            dispatch_idle(machine)?;
            return Ok(1);
        }
        return Ok(0);
    }

    let mut dispatched = 0;
    while dispatched < pending {
        let Some(event) = queue.front() else { break };
        let result = machine.dispatch(event);
        queue.pop_front();
        dispatched += 1;
        result?;
    }
    Ok(dispatched)
}
