//! Transition outcome notifications.

use crate::core::Guard;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kinds of notification an engine publishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A transition (or initial-state entry) completed.
    Completed,
    /// A transition request was rejected by the target's guard.
    Denied,
}

/// Payload of a completed transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionCompleted {
    /// The previously active state. `None` for the initial-state entry.
    pub from: Option<String>,
    /// The state that became active.
    pub to: String,
    /// When the transition completed.
    pub timestamp: DateTime<Utc>,
}

/// Payload of a guard-denied transition request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDenied {
    /// The active state at the time of the request. Unchanged afterwards.
    pub from: String,
    /// The requested target state.
    pub to: String,
    /// The target's guard, i.e. the set of states the transition *would*
    /// have been admitted from.
    pub allowed: Guard,
    /// When the request was rejected.
    pub timestamp: DateTime<Utc>,
}

/// A notification published by the engine after processing a request.
///
/// Denial is an expected outcome communicated here, never an error: a guard
/// doing its job is not a failure of the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TransitionEvent {
    /// `transition_complete`: the active state changed.
    TransitionComplete(TransitionCompleted),
    /// `transition_denied`: the request was rejected, nothing changed.
    TransitionDenied(TransitionDenied),
}

impl TransitionEvent {
    /// The kind of this event, used for subscription filtering.
    pub fn kind(&self) -> EventKind {
        match self {
            TransitionEvent::TransitionComplete(_) => EventKind::Completed,
            TransitionEvent::TransitionDenied(_) => EventKind::Denied,
        }
    }

    /// The target state name carried by either payload.
    pub fn to_state(&self) -> &str {
        match self {
            TransitionEvent::TransitionComplete(c) => &c.to,
            TransitionEvent::TransitionDenied(d) => &d.to,
        }
    }
}
