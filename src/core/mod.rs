//! Core vocabulary shared by the engines and queues.
//!
//! This module contains the value types every part of the crate speaks:
//! - Signals and events
//! - State identifiers via the `State` trait
//! - The `DispatchOutcome` every state handler returns
//! - The `DispatchError` raised on contract violations

mod error;
mod event;
mod outcome;
pub(crate) mod path;
mod signal;
mod state;

pub use error::DispatchError;
pub use event::Event;
pub use outcome::DispatchOutcome;
pub use signal::Signal;
pub use state::State;
