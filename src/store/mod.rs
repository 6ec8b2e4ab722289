//! Application state store.
//!
//! This module contains the client-side state synchronization model:
//! - `AppState`, the single source of truth for server-derived data
//! - `Action`, the closed set of transitions
//! - `reduce`, the pure transition function
//! - `Store`, the session-scoped container with stale-response guarding

pub mod action;
pub mod container;
pub mod reducer;
pub mod state;

pub use action::Action;
pub use container::{Diagnostic, RequestKind, RequestToken, Store};
pub use reducer::reduce;
pub use state::AppState;
