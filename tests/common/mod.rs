//! Canonical nested-state fixture shared by the integration tests.
//!
//! ```text
//! root
//! └── S
//!     ├── S1
//!     │   └── S11
//!     └── S2
//!         └── S21
//!             └── S211
//! ```
//!
//! Every state logs `name-SIGNAL` for the lifecycle and application events
//! it reacts to, so a run produces a trace of entries, exits and handled
//! events.

#![allow(dead_code)]

use hsmlite::core::{DispatchOutcome, Event, Signal, State};
use hsmlite::{signals, state_enum, Machine};

state_enum! {
    pub enum Node {
        S,
        S1,
        S11,
        S2,
        S21,
        S211,
    }
}

signals! {
    pub enum Sig {
        A,
        B,
        C,
        D,
        E,
        F,
        G,
        H,
        I,
    }
}

use DispatchOutcome::{Handled, Super, Transition, Unhandled};

#[derive(Default)]
pub struct Fixture {
    pub foo: bool,
    pub trace: Vec<String>,
}

impl Fixture {
    pub fn take_trace(&mut self) -> String {
        std::mem::take(&mut self.trace).join(";")
    }

    fn log(&mut self, state: Node, signal: Signal) {
        let label = match Sig::from_signal(signal) {
            Some(sig) => sig.name().to_string(),
            None => signal.to_string(),
        };
        self.trace
            .push(format!("{}-{}", state.name().to_lowercase(), label));
    }

    /// Log and answer for lifecycle events common to every state.
    fn lifecycle(&mut self, state: Node, signal: Signal) -> Option<DispatchOutcome<Node>> {
        match signal {
            Signal::ENTER | Signal::LEAVE => {
                self.log(state, signal);
                Some(Handled)
            }
            _ => None,
        }
    }

    fn state_s(&mut self, event: &Event) -> DispatchOutcome<Node> {
        let state = Node::S;
        if let Some(outcome) = self.lifecycle(state, event.signal) {
            return outcome;
        }
        match (event.signal, Sig::from_signal(event.signal)) {
            (Signal::INIT, _) => {
                self.log(state, event.signal);
                Transition(Node::S11)
            }
            (_, Some(Sig::E)) => {
                self.log(state, event.signal);
                Transition(Node::S11)
            }
            (_, Some(Sig::I)) => {
                if self.foo {
                    self.log(state, event.signal);
                    self.foo = false;
                    Handled
                } else {
                    Unhandled
                }
            }
            _ => Super(None),
        }
    }

    fn state_s1(&mut self, event: &Event) -> DispatchOutcome<Node> {
        let state = Node::S1;
        if let Some(outcome) = self.lifecycle(state, event.signal) {
            return outcome;
        }
        let target = match (event.signal, Sig::from_signal(event.signal)) {
            (Signal::INIT, _) => Node::S11,
            (_, Some(Sig::A)) => Node::S1,
            (_, Some(Sig::B)) => Node::S11,
            (_, Some(Sig::C)) => Node::S2,
            (_, Some(Sig::D)) if !self.foo => {
                self.foo = true;
                Node::S
            }
            (_, Some(Sig::D)) => return Unhandled,
            (_, Some(Sig::F)) => Node::S211,
            (_, Some(Sig::I)) => {
                self.log(state, event.signal);
                return Handled;
            }
            _ => return Super(Some(Node::S)),
        };
        self.log(state, event.signal);
        Transition(target)
    }

    fn state_s11(&mut self, event: &Event) -> DispatchOutcome<Node> {
        let state = Node::S11;
        if let Some(outcome) = self.lifecycle(state, event.signal) {
            return outcome;
        }
        let target = match Sig::from_signal(event.signal) {
            Some(Sig::D) if self.foo => {
                self.foo = false;
                Node::S1
            }
            Some(Sig::D) => return Unhandled,
            Some(Sig::G) => Node::S211,
            Some(Sig::H) => Node::S,
            _ => return Super(Some(Node::S1)),
        };
        self.log(state, event.signal);
        Transition(target)
    }

    fn state_s2(&mut self, event: &Event) -> DispatchOutcome<Node> {
        let state = Node::S2;
        if let Some(outcome) = self.lifecycle(state, event.signal) {
            return outcome;
        }
        let target = match (event.signal, Sig::from_signal(event.signal)) {
            (Signal::INIT, _) => Node::S211,
            (_, Some(Sig::C)) => Node::S1,
            (_, Some(Sig::F)) => Node::S11,
            (_, Some(Sig::I)) if !self.foo => {
                self.log(state, event.signal);
                self.foo = true;
                return Handled;
            }
            (_, Some(Sig::I)) => return Unhandled,
            _ => return Super(Some(Node::S)),
        };
        self.log(state, event.signal);
        Transition(target)
    }

    fn state_s21(&mut self, event: &Event) -> DispatchOutcome<Node> {
        let state = Node::S21;
        if let Some(outcome) = self.lifecycle(state, event.signal) {
            return outcome;
        }
        let target = match (event.signal, Sig::from_signal(event.signal)) {
            (Signal::INIT, _) => Node::S211,
            (_, Some(Sig::A)) => Node::S21,
            (_, Some(Sig::B)) => Node::S211,
            (_, Some(Sig::G)) => Node::S1,
            _ => return Super(Some(Node::S2)),
        };
        self.log(state, event.signal);
        Transition(target)
    }

    fn state_s211(&mut self, event: &Event) -> DispatchOutcome<Node> {
        let state = Node::S211;
        if let Some(outcome) = self.lifecycle(state, event.signal) {
            return outcome;
        }
        let target = match Sig::from_signal(event.signal) {
            Some(Sig::D) => Node::S21,
            Some(Sig::H) => Node::S,
            _ => return Super(Some(Node::S21)),
        };
        self.log(state, event.signal);
        Transition(target)
    }
}

impl Machine for Fixture {
    type State = Node;
    type Payload = ();

    fn handle(&mut self, state: Node, event: &Event) -> DispatchOutcome<Node> {
        match state {
            Node::S => self.state_s(event),
            Node::S1 => self.state_s1(event),
            Node::S11 => self.state_s11(event),
            Node::S2 => self.state_s2(event),
            Node::S21 => self.state_s21(event),
            Node::S211 => self.state_s211(event),
        }
    }

    fn initial(&self) -> Option<Node> {
        Some(Node::S2)
    }
}

/// Immediate ancestor of each fixture state, `None` for the root.
pub fn parent_of(state: Node) -> Option<Node> {
    match state {
        Node::S => None,
        Node::S1 | Node::S2 => Some(Node::S),
        Node::S11 => Some(Node::S1),
        Node::S21 => Some(Node::S2),
        Node::S211 => Some(Node::S21),
    }
}

/// The event for a fixture letter, `'A'..='I'`.
pub fn letter(name: char) -> Event {
    let index = (name as u8) - b'A';
    Event::new(Signal::user(index))
}
