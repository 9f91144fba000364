//! Fluent per-state definitions consumed by the engine at registration.
//!
//! A [`StateDef`] collects everything a state needs before it enters the
//! registry: its name, entry guard, optional parent, and optional enter/exit
//! hooks. Validation (duplicate names, unresolved parents) happens in
//! [`StateMachine::add_state`](crate::machine::StateMachine::add_state),
//! which is the only consumer.

use crate::core::{Guard, Hook, HookContext};

/// Definition of a single state, built with a fluent API.
///
/// # Example
///
/// ```rust
/// use treestate::builder::StateDef;
/// use treestate::machine::StateMachine;
///
/// let mut machine = StateMachine::new();
/// machine.add_state(StateDef::new("playing")).unwrap();
/// machine
///     .add_state(
///         StateDef::new("paused")
///             .from(["playing"])
///             .on_enter(|ctx| println!("paused (coming from {:?})", ctx.from)),
///     )
///     .unwrap();
/// ```
pub struct StateDef {
    name: String,
    guard: Guard,
    parent: Option<String>,
    on_enter: Option<Hook>,
    on_exit: Option<Hook>,
}

impl StateDef {
    /// Start a definition. The guard defaults to [`Guard::Any`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guard: Guard::Any,
            parent: None,
            on_enter: None,
            on_exit: None,
        }
    }

    /// Restrict entry to the named source states.
    pub fn from<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guard = Guard::from_states(states);
        self
    }

    /// Allow entry from any source state (the default).
    pub fn from_any(mut self) -> Self {
        self.guard = Guard::Any;
        self
    }

    /// Set the guard directly.
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    /// Nest this state under an already-registered parent.
    pub fn parent(mut self, name: impl Into<String>) -> Self {
        self.parent = Some(name.into());
        self
    }

    /// Attach an enter hook.
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: Fn(&HookContext<'_>) + Send + Sync + 'static,
    {
        self.on_enter = Some(Box::new(hook));
        self
    }

    /// Attach an exit hook.
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: Fn(&HookContext<'_>) + Send + Sync + 'static,
    {
        self.on_exit = Some(Box::new(hook));
        self
    }

    pub(crate) fn into_parts(self) -> (String, Guard, Option<String>, Option<Hook>, Option<Hook>) {
        (self.name, self.guard, self.parent, self.on_enter, self.on_exit)
    }
}

impl std::fmt::Debug for StateDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateDef")
            .field("name", &self.name)
            .field("guard", &self.guard)
            .field("parent", &self.parent)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}
