//! Per-instance notification sink.
//!
//! Every engine owns exactly one emitter; nothing is process-global, so
//! listeners attached through one engine can never observe another engine's
//! events.

use super::event::{EventKind, TransitionEvent};

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Handler = Box<dyn Fn(&TransitionEvent) + Send + Sync>;

struct Subscriber {
    id: SubscriberId,
    // None subscribes to every event kind.
    filter: Option<EventKind>,
    handler: Handler,
}

/// Synchronous publish/subscribe dispatcher for transition outcomes.
///
/// Handlers run inline on the publishing thread, in subscription order. The
/// engine treats the emitter purely as an output sink; its own correctness
/// never depends on subscriber behavior.
///
/// # Example
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use treestate::events::{EventEmitter, EventKind, TransitionCompleted, TransitionEvent};
///
/// let mut emitter = EventEmitter::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// emitter.subscribe(EventKind::Completed, move |event| {
///     sink.lock().unwrap().push(event.to_state().to_string());
/// });
///
/// emitter.publish(&TransitionEvent::TransitionComplete(TransitionCompleted {
///     from: None,
///     to: "ready".into(),
///     timestamp: chrono::Utc::now(),
/// }));
///
/// assert_eq!(seen.lock().unwrap().as_slice(), ["ready"]);
/// ```
#[derive(Default)]
pub struct EventEmitter {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

impl EventEmitter {
    /// Create an emitter with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to one event kind.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriberId
    where
        F: Fn(&TransitionEvent) + Send + Sync + 'static,
    {
        self.attach(Some(kind), Box::new(handler))
    }

    /// Subscribe a handler to every event kind.
    pub fn subscribe_all<F>(&mut self, handler: F) -> SubscriberId
    where
        F: Fn(&TransitionEvent) + Send + Sync + 'static,
    {
        self.attach(None, Box::new(handler))
    }

    /// Remove a subscription. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver an event to every matching subscriber, in subscription order.
    pub fn publish(&self, event: &TransitionEvent) {
        let kind = event.kind();
        for subscriber in &self.subscribers {
            match subscriber.filter {
                Some(filter) if filter != kind => continue,
                _ => (subscriber.handler)(event),
            }
        }
    }

    fn attach(&mut self, filter: Option<EventKind>, handler: Handler) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            filter,
            handler,
        });
        id
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guard;
    use crate::events::{TransitionCompleted, TransitionDenied};
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    fn completed(to: &str) -> TransitionEvent {
        TransitionEvent::TransitionComplete(TransitionCompleted {
            from: None,
            to: to.into(),
            timestamp: Utc::now(),
        })
    }

    fn denied(to: &str) -> TransitionEvent {
        TransitionEvent::TransitionDenied(TransitionDenied {
            from: "somewhere".into(),
            to: to.into(),
            allowed: Guard::Any,
            timestamp: Utc::now(),
        })
    }

    #[test]
    fn kind_filter_selects_events() {
        let mut emitter = EventEmitter::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        emitter.subscribe(EventKind::Denied, move |event| {
            sink.lock().unwrap().push(event.to_state().to_string());
        });

        emitter.publish(&completed("a"));
        emitter.publish(&denied("b"));
        emitter.publish(&completed("c"));

        assert_eq!(seen.lock().unwrap().as_slice(), ["b"]);
    }

    #[test]
    fn subscribe_all_sees_everything() {
        let mut emitter = EventEmitter::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        emitter.subscribe_all(move |event| {
            sink.lock().unwrap().push(event.to_state().to_string());
        });

        emitter.publish(&completed("a"));
        emitter.publish(&denied("b"));

        assert_eq!(seen.lock().unwrap().as_slice(), ["a", "b"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut emitter = EventEmitter::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let id = emitter.subscribe_all(move |event| {
            sink.lock().unwrap().push(event.to_state().to_string());
        });

        emitter.publish(&completed("a"));
        assert!(emitter.unsubscribe(id));
        emitter.publish(&completed("b"));

        assert_eq!(seen.lock().unwrap().as_slice(), ["a"]);
        assert!(!emitter.unsubscribe(id));
    }

    #[test]
    fn delivery_follows_subscription_order() {
        let mut emitter = EventEmitter::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let sink = Arc::clone(&seen);
            emitter.subscribe_all(move |_| sink.lock().unwrap().push(tag));
        }

        emitter.publish(&completed("x"));
        assert_eq!(seen.lock().unwrap().as_slice(), ["first", "second", "third"]);
    }
}
