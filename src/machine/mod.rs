//! The transition engine.
//!
//! A [`StateMachine`] owns an arena of named states, tracks the single
//! active state, validates transition requests against the target's guard,
//! and dispatches enter/exit hooks along the lowest-common-ancestor path:
//! exits run innermost to outermost, enters run outermost to innermost.
//!
//! Everything is synchronous and single-threaded: hooks and event handlers
//! run inline on the caller's thread, and there is no internal locking.
//! Callers sharing a machine across threads must synchronize externally.

mod error;
mod path;

pub use error::ConfigError;
pub use path::TransitionPath;

use crate::builder::StateDef;
use crate::core::{HookContext, StateNode, TransitionLog, TransitionRecord};
use crate::events::{
    EventEmitter, TransitionCompleted, TransitionDenied, TransitionEvent,
};
use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Hierarchical state machine engine.
///
/// Lifecycle: register states with [`add_state`](Self::add_state), set the
/// starting state once with [`set_initial_state`](Self::set_initial_state),
/// then drive it with [`change_state`](Self::change_state). States are never
/// removed; the machine is dropped as a unit.
///
/// # Example
///
/// ```rust
/// use treestate::{StateDef, StateMachine};
///
/// let mut player = StateMachine::new();
/// player.add_state(StateDef::new("stopped")).unwrap();
/// player.add_state(StateDef::new("playing")).unwrap();
/// player
///     .add_state(StateDef::new("paused").from(["playing"]))
///     .unwrap();
///
/// player.set_initial_state("stopped");
/// assert!(!player.can_change_state_to("paused"));
///
/// player.change_state("playing");
/// assert_eq!(player.current_state_name(), Some("playing"));
/// ```
#[derive(Debug, Default)]
pub struct StateMachine {
    registry: HashMap<String, StateNode>,
    // Registration order, for introspection; lookup goes through the map.
    order: Vec<String>,
    active: Option<String>,
    emitter: EventEmitter,
    log: TransitionLog,
}

impl StateMachine {
    /// Create an empty, unconfigured machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state.
    ///
    /// Fails with [`ConfigError::DuplicateState`] if the name is taken and
    /// [`ConfigError::UnknownParent`] if the definition names a parent that
    /// has not been registered yet. Parents-first ordering is what keeps the
    /// hierarchy a forest: a node can never reference a state that does not
    /// exist at its creation.
    pub fn add_state(&mut self, def: StateDef) -> Result<(), ConfigError> {
        let (name, guard, parent, on_enter, on_exit) = def.into_parts();

        if self.registry.contains_key(&name) {
            return Err(ConfigError::DuplicateState(name));
        }
        if let Some(parent_name) = &parent {
            if !self.registry.contains_key(parent_name) {
                return Err(ConfigError::UnknownParent {
                    state: name,
                    parent: parent_name.clone(),
                });
            }
        }

        let node = StateNode::new(name.clone(), guard, parent.clone(), on_enter, on_exit);
        if let Some(parent_name) = &parent {
            if let Some(parent_node) = self.registry.get_mut(parent_name) {
                parent_node.add_child(name.clone());
            }
        }
        self.order.push(name.clone());
        self.registry.insert(name, node);
        Ok(())
    }

    /// Set the starting state. One-time: once an active state exists, or if
    /// the name is unregistered, the call is a logged no-op.
    ///
    /// On success the target's ancestors are entered from the root downward,
    /// then the target itself, and a `transition_complete` event is
    /// published carrying no source state.
    pub fn set_initial_state(&mut self, name: &str) {
        if self.active.is_some() {
            debug!(name, "initial state ignored: machine is already configured");
            return;
        }
        if !self.registry.contains_key(name) {
            debug!(name, "initial state ignored: state is not registered");
            return;
        }

        let chain: Vec<String> = self
            .ancestors(name)
            .into_iter()
            .map(str::to_string)
            .collect();
        for state in chain.iter().rev() {
            self.run_enter(state, None, name);
        }
        self.run_enter(name, None, name);

        self.active = Some(name.to_string());
        self.log = self.log.record(TransitionRecord::now(None, name));
        self.emitter
            .publish(&TransitionEvent::TransitionComplete(TransitionCompleted {
                from: None,
                to: name.to_string(),
                timestamp: Utc::now(),
            }));
    }

    /// Request a transition to `to`.
    ///
    /// An unregistered target (or a machine with no initial state) is a
    /// logged no-op with no event; a guard rejection publishes
    /// `transition_denied` and changes nothing. The asymmetry is deliberate:
    /// a denial payload carries the target's guard, which an unregistered
    /// name does not have.
    ///
    /// On success, exit hooks run from the active leaf outward up to (not
    /// including) the common ancestor, the active pointer moves, and enter
    /// hooks run from just below the common ancestor inward to the target.
    /// Hook panics propagate to the caller; hooks already run are not rolled
    /// back, so the active pointer may then reflect a partially-applied
    /// transition.
    pub fn change_state(&mut self, to: &str) {
        let Some(from) = self.active.clone() else {
            warn!(to, "transition refused: no initial state has been set");
            return;
        };
        if !self.registry.contains_key(to) {
            warn!(to, "transition refused: state is not registered");
            return;
        }

        if !self.can_transition(&from, to) {
            let Some(target) = self.registry.get(to) else {
                return;
            };
            let allowed = target.guard().clone();
            debug!(%from, to, "transition denied by guard");
            self.emitter
                .publish(&TransitionEvent::TransitionDenied(TransitionDenied {
                    from: from.clone(),
                    to: to.to_string(),
                    allowed,
                    timestamp: Utc::now(),
                }));
            return;
        }

        let path = self.path_between(&from, to);

        // Exit phase: the active leaf first, then outward, stopping before
        // the common ancestor (which stays active for sibling moves).
        if path.exits > 0 {
            let mut exiting = vec![from.clone()];
            exiting.extend(
                self.ancestors(&from)
                    .into_iter()
                    .take(path.exits - 1)
                    .map(str::to_string),
            );
            for state in &exiting {
                self.run_exit(state, &from, to);
            }
        }

        self.active = Some(to.to_string());

        // Enter phase: ancestors strictly below the common ancestor,
        // outermost first, then the target itself.
        if path.enters > 0 {
            let entering: Vec<String> = self
                .ancestors(to)
                .into_iter()
                .take(path.enters - 1)
                .map(str::to_string)
                .collect();
            for state in entering.iter().rev() {
                self.run_enter(state, Some(&from), to);
            }
            self.run_enter(to, Some(&from), to);
        }

        debug!(%from, to, "state changed");
        self.log = self.log.record(TransitionRecord::now(Some(from.clone()), to));
        self.emitter
            .publish(&TransitionEvent::TransitionComplete(TransitionCompleted {
                from: Some(from),
                to: to.to_string(),
                timestamp: Utc::now(),
            }));
    }

    /// Pure predicate: may the machine move from `from` to `to`?
    ///
    /// Self-transitions are always rejected, before any guard evaluation.
    /// Otherwise true iff `to` is registered and its guard admits `from`.
    pub fn can_transition(&self, from: &str, to: &str) -> bool {
        if from == to {
            return false;
        }
        match self.registry.get(to) {
            Some(target) => target.guard().admits(from),
            None => false,
        }
    }

    /// [`can_transition`](Self::can_transition) applied to the active state.
    /// Always `false` while no initial state has been set.
    pub fn can_change_state_to(&self, to: &str) -> bool {
        match &self.active {
            Some(active) => self.can_transition(active, to),
            None => false,
        }
    }

    /// Exit/enter counts between two registered states, or `None` if either
    /// name is unknown.
    pub fn transition_path(&self, from: &str, to: &str) -> Option<TransitionPath> {
        if !self.registry.contains_key(from) || !self.registry.contains_key(to) {
            return None;
        }
        Some(self.path_between(from, to))
    }

    /// Whether a state with this name is registered.
    pub fn has_state(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// Look up a state by name.
    pub fn state(&self, name: &str) -> Option<&StateNode> {
        self.registry.get(name)
    }

    /// The currently active state, if the machine has been configured.
    pub fn current_state(&self) -> Option<&StateNode> {
        self.active.as_deref().and_then(|name| self.registry.get(name))
    }

    /// Name of the currently active state.
    pub fn current_state_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// All registered states, in registration order.
    pub fn states(&self) -> impl Iterator<Item = &StateNode> {
        self.order.iter().filter_map(|name| self.registry.get(name))
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Ancestor chain of a state, nearest parent first. Empty for roots and
    /// unregistered names.
    pub fn ancestors(&self, name: &str) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut cursor = self.registry.get(name).and_then(|node| node.parent());
        while let Some(parent_name) = cursor {
            chain.push(parent_name);
            cursor = self.registry.get(parent_name).and_then(|node| node.parent());
        }
        chain
    }

    /// Topmost ancestor of a state (the state itself if it is a root), or
    /// `None` for unregistered names.
    pub fn root_of(&self, name: &str) -> Option<&str> {
        let node = self.registry.get(name)?;
        Some(self.ancestors(name).last().copied().unwrap_or(node.name()))
    }

    /// Log of completed transitions, oldest first.
    pub fn log(&self) -> &TransitionLog {
        &self.log
    }

    /// The machine's notification sink, for subscribing and unsubscribing.
    pub fn events(&mut self) -> &mut EventEmitter {
        &mut self.emitter
    }

    fn path_between(&self, from: &str, to: &str) -> TransitionPath {
        path::find_path(from, to, |name| {
            self.registry.get(name).and_then(|node| node.parent())
        })
    }

    fn run_enter(&self, state: &str, from: Option<&str>, to: &str) {
        if let Some(node) = self.registry.get(state) {
            if let Some(hook) = &node.on_enter {
                hook(&HookContext { state, from, to });
            }
        }
    }

    fn run_exit(&self, state: &str, from: &str, to: &str) {
        if let Some(node) = self.registry.get(state) {
            if let Some(hook) = &node.on_exit {
                hook(&HookContext {
                    state,
                    from: Some(from),
                    to,
                });
            }
        }
    }
}
