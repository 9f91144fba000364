//! Guard conditions for controlling which states may transition into a state.
//!
//! A guard is declarative data, not code: either the wildcard (`Any`), which
//! admits a transition from every source state, or an explicit set of source
//! state names. Guards are attached to the *destination* state and evaluated
//! against the name of the state being left.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Rule determining which source states may transition into a state.
///
/// Guards serialize (they are embedded in denial notifications), so the set
/// variant uses a `BTreeSet` for a stable, ordered representation.
///
/// # Example
///
/// ```rust
/// use treestate::core::Guard;
///
/// let any = Guard::Any;
/// assert!(any.admits("playing"));
/// assert!(any.admits("stopped"));
///
/// let only_playing = Guard::from_states(["playing"]);
/// assert!(only_playing.admits("playing"));
/// assert!(!only_playing.admits("stopped"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Guard {
    /// Entry is permitted from any source state.
    Any,
    /// Entry is permitted only from the named source states.
    FromSet(BTreeSet<String>),
}

impl Guard {
    /// Build a `FromSet` guard from any iterable of state names.
    pub fn from_states<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Guard::FromSet(states.into_iter().map(Into::into).collect())
    }

    /// Check whether a transition out of `from` is admitted.
    ///
    /// Pure predicate. Note that self-transition rejection is *not* the
    /// guard's job; the engine short-circuits `from == to` before any guard
    /// is consulted.
    pub fn admits(&self, from: &str) -> bool {
        match self {
            Guard::Any => true,
            Guard::FromSet(sources) => sources.contains(from),
        }
    }

    /// True for the wildcard variant.
    pub fn is_any(&self) -> bool {
        matches!(self, Guard::Any)
    }
}

impl Default for Guard {
    fn default() -> Self {
        Guard::Any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_admits_every_source() {
        let guard = Guard::Any;
        assert!(guard.admits("idle"));
        assert!(guard.admits("attack"));
        assert!(guard.admits(""));
    }

    #[test]
    fn from_set_admits_only_members() {
        let guard = Guard::from_states(["playing", "paused"]);
        assert!(guard.admits("playing"));
        assert!(guard.admits("paused"));
        assert!(!guard.admits("stopped"));
    }

    #[test]
    fn empty_from_set_admits_nothing() {
        let guard = Guard::from_states(Vec::<String>::new());
        assert!(!guard.admits("anything"));
    }

    #[test]
    fn default_is_wildcard() {
        assert!(Guard::default().is_any());
    }

    #[test]
    fn from_states_deduplicates() {
        let guard = Guard::from_states(["a", "a", "b"]);
        match guard {
            Guard::FromSet(set) => assert_eq!(set.len(), 2),
            Guard::Any => panic!("expected FromSet"),
        }
    }

    #[test]
    fn guard_roundtrips_through_json() {
        let guard = Guard::from_states(["playing"]);
        let json = serde_json::to_string(&guard).unwrap();
        let back: Guard = serde_json::from_str(&json).unwrap();
        assert_eq!(guard, back);

        let any_json = serde_json::to_string(&Guard::Any).unwrap();
        assert_eq!(any_json, "\"any\"");
    }
}
