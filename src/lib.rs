//! Hsmlite: a small hierarchical state machine dispatch engine
//!
//! Behavior is written as a tree of nested states with UML-statechart
//! style entry, exit and initial transitions. The engines work out which
//! states to leave and enter for every transition, pivoting on the least
//! common ancestor of its source and target.
//!
//! The engines do no I/O, no timing, and no allocation. They are driven
//! synchronously by a caller that owns the event source.
//!
//! # Core Concepts
//!
//! - **Signal / Event**: what happened, as a small integer tag plus an
//!   optional payload
//! - **State**: identifier of one node in the state tree
//! - **Machine**: the application object, answering each event with a
//!   `DispatchOutcome`
//! - **Fsm / Hsm**: flat and hierarchical engines
//! - **Queues**: bounded ring buffer and unbounded heap queue, drained with
//!   `dispatch_all`
//!
//! # Example
//!
//! ```rust
//! use hsmlite::core::{DispatchOutcome, Event, Signal};
//! use hsmlite::queue::{EventQueue, RingBuffer};
//! use hsmlite::{dispatch_all, signals, state_enum, Hsm, Machine};
//!
//! state_enum! {
//!     pub enum Turnstile {
//!         Operational,
//!         Locked,
//!         Unlocked,
//!     }
//! }
//!
//! signals! {
//!     pub enum Input {
//!         Coin,
//!         Push,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Gate {
//!     fares: u32,
//! }
//!
//! impl Machine for Gate {
//!     type State = Turnstile;
//!     type Payload = ();
//!
//!     fn handle(&mut self, state: Turnstile, event: &Event) -> DispatchOutcome<Turnstile> {
//!         use Turnstile::*;
//!         match (state, event.signal, Input::from_signal(event.signal)) {
//!             (Operational, Signal::INIT, _) => DispatchOutcome::Transition(Locked),
//!             (Operational, _, _) => DispatchOutcome::Super(None),
//!             (Locked, _, Some(Input::Coin)) => {
//!                 self.fares += 1;
//!                 DispatchOutcome::Transition(Unlocked)
//!             }
//!             (Unlocked, _, Some(Input::Push)) => DispatchOutcome::Transition(Locked),
//!             _ => DispatchOutcome::Super(Some(Operational)),
//!         }
//!     }
//! }
//!
//! let mut hsm: Hsm<Gate> = Hsm::new(Gate::default());
//! hsm.init(Turnstile::Operational).unwrap();
//!
//! let mut queue: RingBuffer<Event> = RingBuffer::new();
//! queue.push_back(Input::Coin.into());
//! queue.push_back(Input::Push.into());
//! queue.push_back(Input::Coin.into());
//!
//! assert_eq!(dispatch_all(&mut hsm, &mut queue, true).unwrap(), 3);
//! assert_eq!(hsm.current(), Some(Turnstile::Unlocked));
//! assert_eq!(hsm.machine().fares, 2);
//! ```

#[macro_use]
mod macros;

pub mod core;
pub mod machine;
pub mod queue;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{DispatchError, DispatchOutcome, Event, Signal, State};
pub use crate::machine::{dispatch_all, dispatch_idle, Dispatch, Fsm, Hsm, Machine, MAX_STATE_DEPTH};
pub use crate::queue::{EventQueue, HeapQueue, RingBuffer};
