//! Core state machine vocabulary.
//!
//! This module contains the data the engine operates on:
//! - Guard conditions restricting entry into a state
//! - State nodes and the hook types they carry
//! - The immutable transition log
//!
//! Everything here is passive data; the transition algorithm lives in
//! [`crate::machine`].

mod guard;
mod history;
mod node;

pub use guard::Guard;
pub use history::{TransitionLog, TransitionRecord};
pub use node::{Hook, HookContext, StateNode};
