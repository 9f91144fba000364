//! Transition log: immutable record of completed transitions over time.
//!
//! The log only ever grows and only records *successful* transitions
//! (including the initial-state entry); denials and rejected requests leave
//! no trace here, they surface through notifications instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single completed transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state that was active before the transition. `None` for the
    /// initial-state entry, which has no predecessor.
    pub from: Option<String>,
    /// The state that became active.
    pub to: String,
    /// When the transition completed.
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// Record a transition completing now.
    pub fn now(from: Option<String>, to: impl Into<String>) -> Self {
        Self {
            from,
            to: to.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered log of completed transitions.
///
/// The log is an immutable value: [`record`](TransitionLog::record) returns
/// a new log with the entry appended, so the engine updates it with
/// `self.log = self.log.record(entry)`.
///
/// # Example
///
/// ```rust
/// use treestate::core::{TransitionLog, TransitionRecord};
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord::now(None, "stopped"));
/// let log = log.record(TransitionRecord::now(Some("stopped".into()), "playing"));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.path(), ["stopped", "playing"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, returning the extended log. The original log is
    /// untouched; the engine updates with `self.log = self.log.record(rec)`.
    #[must_use]
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records in completion order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// The most recent record, if any.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names of the states that became active, in order.
    pub fn path(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.to.as_str()).collect()
    }

    /// Wall-clock span between the first and last record. `None` with fewer
    /// than two records.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        if self.records.len() < 2 {
            return None;
        }
        (last.timestamp - first.timestamp).to_std().ok()
    }
}
