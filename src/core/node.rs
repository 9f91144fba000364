//! State nodes: one named position in the hierarchy.
//!
//! Nodes live in the engine's arena and refer to each other by name. The
//! parent link is a weak, non-owning name reference fixed at registration;
//! child names are cached back-links maintained by the engine for
//! introspection. The transition algorithm itself only follows parent links.

use crate::core::Guard;

/// Context handed to enter/exit hooks describing the transition in flight.
#[derive(Clone, Copy, Debug)]
pub struct HookContext<'a> {
    /// Name of the state whose hook is firing (the target itself or one of
    /// its ancestors during entry; the exiting state or one of its ancestors
    /// during exit).
    pub state: &'a str,
    /// The previously active state. `None` while entering the initial state.
    pub from: Option<&'a str>,
    /// The target of the transition request.
    pub to: &'a str,
}

/// Side-effect callback invoked when a state is entered or left.
///
/// Hooks run inline on the caller's thread during `change_state` /
/// `set_initial_state`. A hook that panics propagates to the caller; the
/// engine does not roll back hooks already run in that transition.
pub type Hook = Box<dyn Fn(&HookContext<'_>) + Send + Sync>;

/// One named state in the hierarchy.
///
/// Constructed through [`StateDef`](crate::builder::StateDef) and owned by
/// the engine's registry; callers only ever borrow nodes for introspection.
pub struct StateNode {
    name: String,
    guard: Guard,
    parent: Option<String>,
    children: Vec<String>,
    pub(crate) on_enter: Option<Hook>,
    pub(crate) on_exit: Option<Hook>,
}

impl StateNode {
    pub(crate) fn new(
        name: String,
        guard: Guard,
        parent: Option<String>,
        on_enter: Option<Hook>,
        on_exit: Option<Hook>,
    ) -> Self {
        Self {
            name,
            guard,
            parent,
            children: Vec::new(),
            on_enter,
            on_exit,
        }
    }

    /// The state's unique name within its engine.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entry guard for this state.
    pub fn guard(&self) -> &Guard {
        &self.guard
    }

    /// Name of the parent state, if this state is nested. Immutable after
    /// registration; there is no re-parenting.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Names of directly nested states, in registration order.
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Whether an enter hook is attached.
    pub fn has_enter(&self) -> bool {
        self.on_enter.is_some()
    }

    /// Whether an exit hook is attached.
    pub fn has_exit(&self) -> bool {
        self.on_exit.is_some()
    }

    pub(crate) fn add_child(&mut self, child: String) {
        self.children.push(child);
    }
}

impl std::fmt::Debug for StateNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateNode")
            .field("name", &self.name)
            .field("guard", &self.guard)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}
