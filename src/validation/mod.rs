//! Development-time checks of a machine's state hierarchy.
//!
//! The engines trust every state to report its ancestor and only find out
//! about a broken hierarchy in the middle of a transition. Running these
//! checks over all states up front reports every defect at once, using
//! Stillwater's `Validation` to accumulate them instead of stopping at the
//! first.
//!
//! # Example
//!
//! ```rust
//! use hsmlite::core::{DispatchOutcome, Event};
//! use hsmlite::validation::validate_hierarchy;
//! use hsmlite::{state_enum, Machine};
//!
//! state_enum! {
//!     pub enum Node {
//!         Outer,
//!         Inner,
//!     }
//! }
//!
//! struct Nested;
//!
//! impl Machine for Nested {
//!     type State = Node;
//!     type Payload = ();
//!
//!     fn handle(&mut self, state: Node, _event: &Event) -> DispatchOutcome<Node> {
//!         match state {
//!             Node::Outer => DispatchOutcome::Super(None),
//!             Node::Inner => DispatchOutcome::Super(Some(Node::Outer)),
//!         }
//!     }
//! }
//!
//! assert!(validate_hierarchy(&mut Nested, Node::ALL, 2).is_success());
//! assert!(validate_hierarchy(&mut Nested, Node::ALL, 1).is_failure());
//! ```

pub mod violations;

pub use violations::HierarchyViolation;

use crate::core::{DispatchOutcome, Event};
use crate::machine::Machine;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check the ancestor chain of every state in `states`.
///
/// Each chain must reach the root in at most `max_depth` states (counting
/// the state itself) without revisiting a state. Only SUPER is delivered,
/// so states see no lifecycle events.
pub fn validate_hierarchy<M: Machine>(
    machine: &mut M,
    states: &[M::State],
    max_depth: usize,
) -> Validation<(), NonEmptyVec<HierarchyViolation<M::State>>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<HierarchyViolation<M::State>>>> =
        Vec::with_capacity(states.len());

    for &state in states {
        checks.push(check_chain(machine, state, max_depth));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_chain<M: Machine>(
    machine: &mut M,
    state: M::State,
    max_depth: usize,
) -> Validation<(), NonEmptyVec<HierarchyViolation<M::State>>> {
    let mut chain = vec![state];
    let mut current = state;

    loop {
        if chain.len() > max_depth {
            return Validation::fail(HierarchyViolation::TooDeep {
                state,
                max: max_depth,
            });
        }
        match machine.handle(current, &Event::SUPER) {
            DispatchOutcome::Super(None) => return Validation::success(()),
            DispatchOutcome::Super(Some(parent)) => {
                if chain.contains(&parent) {
                    return Validation::fail(HierarchyViolation::Cycle {
                        state,
                        repeated: parent,
                    });
                }
                chain.push(parent);
                current = parent;
            }
            DispatchOutcome::Transition(_) => {
                return Validation::fail(HierarchyViolation::TransitionOnSuper { state: current })
            }
            DispatchOutcome::Handled | DispatchOutcome::Unhandled => {
                return Validation::fail(HierarchyViolation::MissingAncestor { state: current })
            }
        }
    }
}
