//! Dispatch engines.
//!
//! # Key Concepts
//!
//! - **Machine**: the application object that reacts to events, one state
//!   at a time
//! - **Fsm**: flat engine, one level of states
//! - **Hsm**: hierarchical engine with entry/exit ordering around the least
//!   common ancestor
//! - **Dispatch helpers**: deliver IDLE, or drain a queue into a machine
//!
//! Engines are driven synchronously by one caller. A handler only ever sees
//! the machine object, never the engine, so it cannot re-enter `dispatch`.

mod dispatch;
mod fsm;
mod handler;
mod hsm;

pub use dispatch::{dispatch_all, dispatch_idle, Dispatch};
pub use fsm::Fsm;
pub use handler::Machine;
pub use hsm::{Hsm, MAX_STATE_DEPTH};
