//! Headless view controllers.
//!
//! Each controller receives the session's [`ApiClient`] and [`Store`] by
//! injection, issues API calls in response to user intents and dispatches the
//! resulting actions. None of them draw anything.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::http::HttpClient;
use crate::store::{Action, RequestKind, Store};

pub mod form;
pub mod list;
pub mod status;

pub use form::ComplaintForm;
pub use list::{ComplaintList, ListDisplay};
pub use status::StatusEditor;

/// Load categories into the store. Failures are diagnostics, not errors.
pub(crate) async fn load_categories<H: HttpClient>(api: &ApiClient<H>, store: &Arc<Store>) {
    let token = store.begin(RequestKind::Categories);
    match api.list_categories().await {
        Ok(categories) => {
            store.dispatch_latest(token, Action::SetCategories(categories));
        }
        Err(e) => store.record_diagnostic(
            RequestKind::Categories,
            format!("Failed to load categories: {}", e),
        ),
    }
}

/// Load priorities into the store. Failures are diagnostics, not errors.
pub(crate) async fn load_priorities<H: HttpClient>(api: &ApiClient<H>, store: &Arc<Store>) {
    let token = store.begin(RequestKind::Priorities);
    match api.list_priorities().await {
        Ok(priorities) => {
            store.dispatch_latest(token, Action::SetPriorities(priorities));
        }
        Err(e) => store.record_diagnostic(
            RequestKind::Priorities,
            format!("Failed to load priorities: {}", e),
        ),
    }
}
