//! Signal numbers identifying event types.
//!
//! The first sixteen values are reserved. Five of them are pseudo-signals
//! the engines use to drive a state's lifecycle; application signals start
//! at [`Signal::USER`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Small unsigned tag identifying the type of an [`Event`](super::Event).
///
/// Signals are plain values and can be used as `match` patterns:
///
/// ```rust
/// use hsmlite::core::Signal;
///
/// const TIMER: Signal = Signal::user(0);
///
/// fn describe(signal: Signal) -> &'static str {
///     match signal {
///         Signal::ENTER => "entry",
///         TIMER => "timer",
///         _ => "other",
///     }
/// }
///
/// assert_eq!(describe(Signal::ENTER), "entry");
/// assert_eq!(describe(Signal::user(0)), "timer");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signal(pub u8);

impl Signal {
    /// Asks a state to report its immediate ancestor.
    pub const SUPER: Signal = Signal(0);
    /// The state was entered.
    pub const ENTER: Signal = Signal(1);
    /// The state is about to be left.
    pub const LEAVE: Signal = Signal(2);
    /// Asks a state for its initial transition.
    pub const INIT: Signal = Signal(3);
    /// Delivered when there is nothing else to do.
    pub const IDLE: Signal = Signal(4);
    /// First application-defined signal number.
    pub const USER: Signal = Signal(0x10);

    /// The `index`-th application signal, counted from [`Signal::USER`].
    pub const fn user(index: u8) -> Signal {
        Signal(Self::USER.0 + index)
    }

    /// Raw signal number.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether this signal falls in the reserved range below [`Signal::USER`].
    pub const fn is_reserved(self) -> bool {
        self.0 < Self::USER.0
    }

    /// Offset from [`Signal::USER`], or `None` for reserved signals.
    pub const fn user_index(self) -> Option<u8> {
        if self.is_reserved() {
            None
        } else {
            Some(self.0 - Self::USER.0)
        }
    }

    /// Name of a pseudo-signal.
    pub fn pseudo_name(self) -> Option<&'static str> {
        match self {
            Self::SUPER => Some("SUPER"),
            Self::ENTER => Some("ENTER"),
            Self::LEAVE => Some("LEAVE"),
            Self::INIT => Some("INIT"),
            Self::IDLE => Some("IDLE"),
            _ => None,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.pseudo_name(), self.user_index()) {
            (Some(name), _) => f.write_str(name),
            (None, Some(index)) => write!(f, "USER+{index}"),
            (None, None) => write!(f, "RESERVED({})", self.0),
        }
    }
}

impl From<u8> for Signal {
    fn from(value: u8) -> Self {
        Signal(value)
    }
}

impl From<Signal> for u8 {
    fn from(signal: Signal) -> Self {
        signal.0
    }
}
