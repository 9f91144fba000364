//! Treestate: a hierarchical state machine engine.
//!
//! States are registered by name, optionally nested inside parent states,
//! with guard conditions restricting which states may transition into them
//! and optional enter/exit hooks. The engine tracks exactly one active state
//! and, on each transition request, computes the chain of ancestor exits and
//! enters required to move between two positions in the state tree: exit
//! hooks run from the innermost state outward, enter hooks from the
//! outermost state inward, stopping at the lowest common ancestor on each
//! side.
//!
//! # Core Concepts
//!
//! - **Guards**: declarative entry rules, wildcard or an explicit source set
//! - **Hierarchy**: an arena of name-keyed nodes; parents are weak name links
//! - **Notifications**: per-machine `transition_complete` / `transition_denied`
//!   events published to a machine-owned emitter
//!
//! # Example
//!
//! ```rust
//! use treestate::{EventKind, StateDef, StateMachine};
//!
//! let mut player = StateMachine::new();
//!
//! player.add_state(StateDef::new("stopped")).unwrap();
//! player.add_state(StateDef::new("playing")).unwrap();
//! player
//!     .add_state(
//!         StateDef::new("paused")
//!             .from(["playing"])
//!             .on_enter(|ctx| println!("paused, was {:?}", ctx.from)),
//!     )
//!     .unwrap();
//!
//! player.events().subscribe(EventKind::Denied, |event| {
//!     println!("denied: {event:?}");
//! });
//!
//! player.set_initial_state("stopped");
//! player.change_state("paused"); // denied: paused only accepts "playing"
//! assert_eq!(player.current_state_name(), Some("stopped"));
//!
//! player.change_state("playing");
//! player.change_state("paused");
//! assert_eq!(player.current_state_name(), Some("paused"));
//! ```

pub mod builder;
pub mod core;
pub mod events;
pub mod machine;

// Re-export commonly used types
pub use builder::StateDef;
pub use self::core::{Guard, Hook, HookContext, StateNode, TransitionLog, TransitionRecord};
pub use events::{
    EventEmitter, EventKind, SubscriberId, TransitionCompleted, TransitionDenied, TransitionEvent,
};
pub use machine::{ConfigError, StateMachine, TransitionPath};
