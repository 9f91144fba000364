//! Transition outcome notifications and the per-instance emitter.
//!
//! The engine announces two outcomes to third parties: `transition_complete`
//! and `transition_denied`. Each engine owns its own [`EventEmitter`], so
//! subscriptions are scoped to one machine and never leak across instances.

mod emitter;
mod event;

pub use emitter::{EventEmitter, SubscriberId};
pub use event::{EventKind, TransitionCompleted, TransitionDenied, TransitionEvent};
