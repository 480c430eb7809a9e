//! Events delivered to state machines.

use super::signal::Signal;
use serde::{Deserialize, Serialize};

/// A signal plus an optional application payload.
///
/// Events are values: queues store copies and the engines only borrow them
/// for the duration of one delivery. The engines read nothing but
/// [`signal`](Event::signal); the payload is for the application.
///
/// The pseudo-events used to drive state lifecycles are available as
/// associated constants, so dispatching never has to build one.
///
/// # Example
///
/// ```rust
/// use hsmlite::core::{Event, Signal};
///
/// const KEY: Signal = Signal::user(0);
///
/// let press = Event::with_payload(KEY, 'a');
/// assert_eq!(press.signal, KEY);
/// assert_eq!(press.payload(), Some(&'a'));
///
/// let enter: Event<char> = Event::ENTER;
/// assert_eq!(enter.signal, Signal::ENTER);
/// assert!(enter.payload().is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Event<P = ()> {
    pub signal: Signal,
    pub payload: Option<P>,
}

impl<P> Event<P> {
    pub const SUPER: Self = Self::new(Signal::SUPER);
    pub const ENTER: Self = Self::new(Signal::ENTER);
    pub const LEAVE: Self = Self::new(Signal::LEAVE);
    pub const INIT: Self = Self::new(Signal::INIT);
    pub const IDLE: Self = Self::new(Signal::IDLE);

    /// Event carrying only a signal.
    pub const fn new(signal: Signal) -> Self {
        Event {
            signal,
            payload: None,
        }
    }

    /// Event carrying a signal and a payload.
    pub const fn with_payload(signal: Signal, payload: P) -> Self {
        Event {
            signal,
            payload: Some(payload),
        }
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Whether this is one of the lifecycle pseudo-events.
    pub fn is_pseudo(&self) -> bool {
        self.signal.pseudo_name().is_some()
    }
}

impl<P> From<Signal> for Event<P> {
    fn from(signal: Signal) -> Self {
        Event::new(signal)
    }
}
