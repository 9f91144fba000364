//! Registration-time configuration errors.

use thiserror::Error;

/// Errors raised while registering states.
///
/// Only configuration can fail hard. Runtime transition requests never
/// surface here: unknown targets are logged no-ops and guard rejections are
/// reported through `transition_denied` notifications.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The named parent was not registered before the child referencing it.
    /// Parents must exist first; this is what keeps the hierarchy acyclic
    /// by construction.
    #[error("parent state '{parent}' is not registered (required by '{state}')")]
    UnknownParent { state: String, parent: String },

    /// The name is already taken. Duplicate registration is rejected rather
    /// than overwritten, so parent/child back-links can never dangle.
    #[error("state '{0}' is already registered")]
    DuplicateState(String),
}
