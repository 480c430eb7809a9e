//! Blinking LED
//!
//! A nested state machine driving a simulated LED from a bounded queue.
//!
//! ```text
//! Powered
//! ├── Blinking
//! │   ├── Lit
//! │   └── Unlit
//! └── Dark
//! ```
//!
//! Every tick flips the LED while blinking. A button press toggles between
//! blinking and dark, and idle cycles are counted when nothing is queued.
//!
//! Run with: RUST_LOG=hsmlite=trace cargo run --example blink

use hsmlite::core::{DispatchError, DispatchOutcome, Event, Signal};
use hsmlite::queue::{EventQueue, RingBuffer};
use hsmlite::{dispatch_all, signals, state_enum, Hsm, Machine};
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

state_enum! {
    enum Mode {
        Powered,
        Blinking,
        Lit,
        Unlit,
        Dark,
    }
}

signals! {
    enum Input {
        Tick,
        Button,
    }
}

/// Stand-in for a GPIO pin.
#[derive(Default)]
struct Led {
    lit: bool,
    switches: u32,
}

impl Led {
    fn set(&mut self, lit: bool) {
        if self.lit != lit {
            self.lit = lit;
            self.switches += 1;
        }
    }
}

#[derive(Default)]
struct Blinker {
    led: Led,
    idle_cycles: u32,
}

impl Machine for Blinker {
    type State = Mode;
    type Payload = ();

    fn handle(&mut self, state: Mode, event: &Event) -> DispatchOutcome<Mode> {
        use DispatchOutcome::{Handled, Super, Transition};
        use Mode::*;

        let input = Input::from_signal(event.signal);
        match (state, event.signal, input) {
            (Powered, Signal::INIT, _) => Transition(Blinking),
            (Powered, Signal::IDLE, _) => {
                self.idle_cycles += 1;
                Handled
            }
            (Powered, _, _) => Super(None),

            (Blinking, Signal::INIT, _) => Transition(Lit),
            (Blinking, _, Some(Input::Button)) => Transition(Dark),
            (Blinking, _, _) => Super(Some(Powered)),

            (Lit, Signal::ENTER, _) => {
                self.led.set(true);
                Handled
            }
            (Lit, _, Some(Input::Tick)) => Transition(Unlit),
            (Lit, _, _) => Super(Some(Blinking)),

            (Unlit, Signal::ENTER, _) => {
                self.led.set(false);
                Handled
            }
            (Unlit, _, Some(Input::Tick)) => Transition(Lit),
            (Unlit, _, _) => Super(Some(Blinking)),

            (Dark, Signal::ENTER, _) => {
                self.led.set(false);
                Handled
            }
            (Dark, _, Some(Input::Button)) => Transition(Blinking),
            (Dark, _, _) => Super(Some(Powered)),
        }
    }

    fn initial(&self) -> Option<Mode> {
        Some(Mode::Powered)
    }
}

fn main() -> Result<(), DispatchError<Mode>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut hsm: Hsm<Blinker> = Hsm::new(Blinker::default());
    hsm.start()?;

    let mut queue: RingBuffer<Event, 4> = RingBuffer::new();
    for cycle in 0..16u32 {
        match cycle % 8 {
            6 => {}
            7 => queue.push_back(Input::Button.into()),
            _ => queue.push_back(Input::Tick.into()),
        }

        let handled = dispatch_all(&mut hsm, &mut queue, true)?;
        info!(
            cycle,
            handled,
            state = ?hsm.current(),
            lit = hsm.machine().led.lit,
            "cycle complete"
        );
    }

    let blinker = hsm.into_inner();
    println!(
        "LED switched {} times, {} idle cycles",
        blinker.led.switches, blinker.idle_cycles
    );
    Ok(())
}
