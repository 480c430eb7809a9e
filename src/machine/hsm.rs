//! Hierarchical state machine engine.

use crate::core::path::Path;
use crate::core::{DispatchError, DispatchOutcome, Event, Signal, State};
use crate::machine::handler::{deliver_enter, deliver_init, deliver_leave, Machine};
use crate::validation::{validate_hierarchy, HierarchyViolation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Default bound on how deeply states may nest.
pub const MAX_STATE_DEPTH: usize = 6;

/// Engine for machines whose states nest.
///
/// Every state reports its immediate ancestor when asked with SUPER;
/// top-level states report `Super(None)`, naming the root. The root is
/// owned by the engine: it consumes every event that reaches it and is
/// never the active state once [`init`](Hsm::init) returns.
///
/// `DEPTH` bounds the number of nested levels below the root. Transitions
/// walk the hierarchy through fixed buffers of that size; a deeper
/// hierarchy is reported as [`DispatchError::DepthExceeded`].
///
/// # Example
///
/// ```rust
/// use hsmlite::core::{DispatchOutcome, Event, Signal};
/// use hsmlite::{state_enum, Hsm, Machine};
///
/// state_enum! {
///     pub enum Player {
///         Powered,
///         Stopped,
///         Playing,
///     }
/// }
///
/// const PLAY: Signal = Signal::user(0);
/// const STOP: Signal = Signal::user(1);
///
/// struct Deck;
///
/// impl Machine for Deck {
///     type State = Player;
///     type Payload = ();
///
///     fn handle(&mut self, state: Player, event: &Event) -> DispatchOutcome<Player> {
///         match (state, event.signal) {
///             (Player::Powered, Signal::INIT) => DispatchOutcome::Transition(Player::Stopped),
///             (Player::Powered, STOP) => DispatchOutcome::Transition(Player::Stopped),
///             (Player::Powered, _) => DispatchOutcome::Super(None),
///             (Player::Stopped, PLAY) => DispatchOutcome::Transition(Player::Playing),
///             _ => DispatchOutcome::Super(Some(Player::Powered)),
///         }
///     }
/// }
///
/// let mut hsm: Hsm<Deck> = Hsm::new(Deck);
/// hsm.init(Player::Powered).unwrap();
/// assert_eq!(hsm.current(), Some(Player::Stopped));
///
/// hsm.dispatch(&Event::new(PLAY)).unwrap();
/// assert_eq!(hsm.current(), Some(Player::Playing));
///
/// // Playing does not handle STOP, its ancestor does.
/// hsm.dispatch(&Event::new(STOP)).unwrap();
/// assert_eq!(hsm.current(), Some(Player::Stopped));
/// ```
pub struct Hsm<M: Machine, const DEPTH: usize = MAX_STATE_DEPTH> {
    machine: M,
    current: Option<M::State>,
}

impl<M: Machine, const DEPTH: usize> Hsm<M, DEPTH> {
    const DEPTH_IS_NONZERO: () = assert!(DEPTH > 0, "maximum state depth must be at least 1");

    /// Wrap `machine`. No state is active until [`init`](Hsm::init).
    pub fn new(machine: M) -> Self {
        let () = Self::DEPTH_IS_NONZERO;
        Self {
            machine,
            current: None,
        }
    }

    /// Innermost active state, `None` before initialization.
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

    /// Enter `initial` and every ancestor above it, outermost first, then
    /// drill down through initial transitions.
    pub fn init(&mut self, initial: M::State) -> Result<(), DispatchError<M::State>> {
        self.current = None;
        self.enter_from(None, initial)?;
        self.drill_down(initial)
    }

    /// [`init`](Hsm::init) with the state named by [`Machine::initial`].
    pub fn start(&mut self) -> Result<(), DispatchError<M::State>> {
        let initial = self
            .machine
            .initial()
            .ok_or(DispatchError::NoInitialState)?;
        self.init(initial)
    }

    /// Deliver `event` to the active state, escalating to ancestors while
    /// it goes unhandled, and carry out any transition requested.
    ///
    /// States are left innermost first up to the least common ancestor of
    /// the transition's source and target, then entered outermost first
    /// down to the target, whose initial transitions are then followed.
    pub fn dispatch(&mut self, event: &Event<M::Payload>) -> Result<(), DispatchError<M::State>> {
        let active = self.current.ok_or(DispatchError::NotInitialized)?;

        let mut vertex = Some(active);
        let mut consulted = 0;
        let (source, target) = loop {
            // the root consumes whatever reaches it
            let Some(state) = vertex else {
                return Ok(());
            };
            consulted += 1;
            if consulted > DEPTH {
                return Err(DispatchError::DepthExceeded { max: DEPTH });
            }
            vertex = match self.machine.handle(state, event) {
                DispatchOutcome::Handled => return Ok(()),
                DispatchOutcome::Transition(target) => break (state, target),
                DispatchOutcome::Super(parent) => parent,
                DispatchOutcome::Unhandled => self.ancestor(state)?,
            };
        };
        debug!(
            source = source.name(),
            target = target.name(),
            signal = %event.signal,
            "transition"
        );

        // Leave everything below the state that took the transition.
        let mut vertex = Some(active);
        let mut left = 0;
        while vertex != Some(source) {
            let Some(state) = vertex else { break };
            left += 1;
            if left > DEPTH {
                return Err(DispatchError::DepthExceeded { max: DEPTH });
            }
            vertex = self.leave(state)?;
        }
        self.current = Some(source);

        if source == target {
            deliver_leave(&mut self.machine, source)?;
            deliver_enter(&mut self.machine, target)?;
            self.current = Some(target);
        } else {
            let mut path: Path<M::State, DEPTH> = Path::new();
            let mut vertex = Some(target);
            while let Some(state) = vertex {
                path.push(state)?;
                vertex = self.ancestor(state)?;
            }

            // Climb from the source until reaching a state the target
            // descends from. The root always qualifies.
            let mut vertex = Some(source);
            let mut climbed = 0;
            let entries = loop {
                let Some(state) = vertex else {
                    break path.len();
                };
                if state == target {
                    break 0;
                }
                if let Some(lca) = path.position(state) {
                    break lca;
                }
                climbed += 1;
                if climbed > DEPTH {
                    return Err(DispatchError::DepthExceeded { max: DEPTH });
                }
                vertex = self.leave(state)?;
                self.current = vertex;
            };

            for state in path.prefix(entries).rev() {
                deliver_enter(&mut self.machine, state)?;
                self.current = Some(state);
            }
        }

        self.drill_down(target)
    }

    /// Whether `state` is the active state or one of its ancestors.
    pub fn is_in(&mut self, state: M::State) -> Result<bool, DispatchError<M::State>> {
        let mut vertex = self.current;
        let mut climbed = 0;
        while let Some(candidate) = vertex {
            if candidate == state {
                return Ok(true);
            }
            climbed += 1;
            if climbed > DEPTH {
                return Err(DispatchError::DepthExceeded { max: DEPTH });
            }
            vertex = self.ancestor(candidate)?;
        }
        Ok(false)
    }

    /// Check the ancestor chains of `states` against this engine's depth.
    pub fn validate(
        &mut self,
        states: &[M::State],
    ) -> Validation<(), NonEmptyVec<HierarchyViolation<M::State>>> {
        validate_hierarchy(&mut self.machine, states, DEPTH)
    }

    fn ancestor(&mut self, state: M::State) -> Result<Option<M::State>, DispatchError<M::State>> {
        match self.machine.handle(state, &Event::SUPER) {
            DispatchOutcome::Super(parent) => Ok(parent),
            DispatchOutcome::Transition(_) => Err(DispatchError::TransitionInPseudo {
                state,
                signal: Signal::SUPER,
            }),
            DispatchOutcome::Handled | DispatchOutcome::Unhandled => {
                Err(DispatchError::MissingAncestor { state })
            }
        }
    }

    /// Leave `state` and resolve its ancestor.
    ///
    /// A LEAVE answered with `Super` already names the ancestor; any other
    /// answer is followed by a SUPER query. Both must agree for a
    /// well-formed machine, so the shortcut only saves a call.
    fn leave(&mut self, state: M::State) -> Result<Option<M::State>, DispatchError<M::State>> {
        match deliver_leave(&mut self.machine, state)? {
            DispatchOutcome::Super(parent) => Ok(parent),
            _ => self.ancestor(state),
        }
    }

    /// Enter every state from just below `source` down to `target`,
    /// outermost first. `source` of `None` is the root.
    fn enter_from(
        &mut self,
        source: Option<M::State>,
        target: M::State,
    ) -> Result<(), DispatchError<M::State>> {
        let mut path: Path<M::State, DEPTH> = Path::new();
        let mut vertex = Some(target);
        while vertex != source {
            let Some(state) = vertex else { break };
            path.push(state)?;
            vertex = self.ancestor(state)?;
        }
        for state in path.iter().rev() {
            deliver_enter(&mut self.machine, state)?;
        }
        self.current = Some(target);
        Ok(())
    }

    /// Follow initial transitions from the freshly entered `state`.
    fn drill_down(&mut self, mut state: M::State) -> Result<(), DispatchError<M::State>> {
        let mut steps = 0;
        while let Some(child) = deliver_init(&mut self.machine, state) {
            steps += 1;
            if steps > DEPTH {
                return Err(DispatchError::DepthExceeded { max: DEPTH });
            }
            debug!(source = state.name(), target = child.name(), "initial transition");
            self.enter_from(Some(state), child)?;
            state = child;
        }
        Ok(())
    }
}
