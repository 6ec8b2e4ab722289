//! Session-scoped state container.
//!
//! The container owns the current [`AppState`], applies actions through
//! [`reduce`], and publishes each new snapshot on a `watch` channel so
//! renderers can re-draw. It is created per session and shared by `Arc`;
//! there is no global instance.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::watch;

use super::action::Action;
use super::reducer::reduce;
use super::state::AppState;

/// Kinds of request whose responses can be superseded by a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    ListComplaints,
    Categories,
    Priorities,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::ListComplaints => write!(f, "list_complaints"),
            RequestKind::Categories => write!(f, "categories"),
            RequestKind::Priorities => write!(f, "priorities"),
        }
    }
}

/// Ticket handed out when a request starts. Only the most recent ticket of
/// each kind may still write its response into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    kind: RequestKind,
    sequence: u64,
}

impl RequestToken {
    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

/// A non-fatal problem, kept apart from the blocking error state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub source: RequestKind,
    pub message: String,
    pub recorded_at: DateTime<Utc>,
}

/// Most diagnostics kept; older entries are dropped first.
pub const MAX_DIAGNOSTICS: usize = 64;

pub struct Store {
    state: watch::Sender<AppState>,
    sequence: AtomicU64,
    latest: Mutex<HashMap<RequestKind, u64>>,
    diagnostics: Mutex<VecDeque<Diagnostic>>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(initial: AppState) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            state,
            sequence: AtomicU64::new(0),
            latest: Mutex::new(HashMap::new()),
            diagnostics: Mutex::new(VecDeque::with_capacity(MAX_DIAGNOSTICS)),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Read part of the current state without cloning all of it.
    pub fn select<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        f(&self.state.borrow())
    }

    /// Receive every snapshot published after this call.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    /// Reduce `action` into the current state and publish the result.
    pub fn dispatch(&self, action: Action) {
        let name = action.name();
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = reduce(current, action);
        });
        tracing::trace!(action = name, "Dispatched action");
    }

    /// Start a request of `kind`, superseding any earlier one still in flight.
    pub fn begin(&self, kind: RequestKind) -> RequestToken {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        self.latest.lock().insert(kind, sequence);
        RequestToken { kind, sequence }
    }

    /// Whether `token` is still the latest of its kind.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.lock().get(&token.kind) == Some(&token.sequence)
    }

    /// Dispatch `action` only if `token` has not been superseded.
    ///
    /// Returns `false` and drops the action when a newer request of the same
    /// kind has started since `token` was issued.
    pub fn dispatch_latest(&self, token: RequestToken, action: Action) -> bool {
        let latest = self.latest.lock();
        if latest.get(&token.kind) != Some(&token.sequence) {
            tracing::debug!(
                kind = %token.kind,
                sequence = token.sequence,
                action = action.name(),
                "Dropping superseded response"
            );
            return false;
        }
        self.dispatch(action);
        true
    }

    /// Record a non-fatal failure. Never touches `AppState::error`.
    ///
    /// At most [`MAX_DIAGNOSTICS`] entries are kept.
    pub fn record_diagnostic(&self, source: RequestKind, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(source = %source, message = %message, "Non-fatal load failure");
        let mut diagnostics = self.diagnostics.lock();
        if diagnostics.len() == MAX_DIAGNOSTICS {
            diagnostics.pop_front();
        }
        diagnostics.push_back(Diagnostic {
            source,
            message,
            recorded_at: Utc::now(),
        });
    }

    /// Recorded diagnostics, oldest first.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().iter().cloned().collect()
    }

    /// Drain recorded diagnostics, oldest first.
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().drain(..).collect()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
