//! Filterable complaint list.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::domain::{Complaint, ComplaintFilter, FilterField};
use crate::http::HttpClient;
use crate::store::{Action, RequestKind, Store};

/// What the list area should show, derived from the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum ListDisplay {
    Loading,
    /// Blocking error, shown instead of the list
    Error(String),
    /// Loaded, nothing matches the filters
    Empty,
    Items(Vec<Complaint>),
}

pub struct ComplaintList<H: HttpClient> {
    api: ApiClient<H>,
    store: Arc<Store>,
}

impl<H: HttpClient> ComplaintList<H> {
    pub fn new(api: ApiClient<H>, store: Arc<Store>) -> Self {
        Self { api, store }
    }

    /// Initial load: complaints plus the filter option lists.
    ///
    /// Category and priority failures are non-fatal; the filters stay usable
    /// with empty option lists.
    #[tracing::instrument(skip(self))]
    pub async fn mount(&self) {
        tokio::join!(
            self.load_complaints(),
            super::load_categories(&self.api, &self.store),
            super::load_priorities(&self.api, &self.store),
        );
    }

    /// Fetch complaints for the current filters.
    ///
    /// A response that arrives after a newer fetch has started is discarded.
    pub async fn load_complaints(&self) {
        let token = self.store.begin(RequestKind::ListComplaints);
        self.store.dispatch(Action::SetLoading(true));

        let filters = self.store.select(|state| state.filters.clone());
        let action = match self.api.list_complaints(&filters).await {
            Ok(complaints) => Action::SetComplaints(complaints),
            Err(e) => Action::SetError(e.user_message()),
        };
        self.store.dispatch_latest(token, action);
    }

    /// Change one filter and reload if the effective filter set changed.
    /// An empty value removes the filter.
    pub async fn set_filter(&self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        let unchanged = self
            .store
            .select(|state| state.filters.get(field).unwrap_or_default() == value);
        if unchanged {
            return;
        }

        tracing::debug!(field = %field, value = %value, "Filter changed");
        self.store
            .dispatch(Action::SetFilters(ComplaintFilter::only(field, value)));
        self.load_complaints().await;
    }

    /// Remove every filter, reloading if any was active.
    pub async fn clear_filters(&self) {
        if !self.store.select(|state| state.filters.is_active()) {
            return;
        }
        self.store
            .dispatch(Action::SetFilters(ComplaintFilter::cleared()));
        self.load_complaints().await;
    }

    pub fn filters(&self) -> ComplaintFilter {
        self.store.select(|state| state.filters.clone())
    }

    pub fn display(&self) -> ListDisplay {
        self.store.select(|state| {
            if state.loading {
                ListDisplay::Loading
            } else if let Some(error) = &state.error {
                ListDisplay::Error(error.clone())
            } else if state.complaints.is_empty() {
                ListDisplay::Empty
            } else {
                ListDisplay::Items(state.complaints.clone())
            }
        })
    }
}
