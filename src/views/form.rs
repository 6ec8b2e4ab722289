//! Complaint creation form.
//!
//! Validation happens here, at the form boundary: a form with a blank title
//! or description never reaches the network or the shared error state.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::domain::{Complaint, NewComplaint};
use crate::error::{DocketError, Result};
use crate::http::HttpClient;
use crate::store::{Action, Store};

/// Prompt shown when a required field is blank.
pub const MISSING_FIELDS: &str = "Please fill in all required fields";

pub struct ComplaintForm<H: HttpClient> {
    api: ApiClient<H>,
    store: Arc<Store>,
    title: String,
    description: String,
    user_id: String,
}

impl<H: HttpClient> ComplaintForm<H> {
    pub fn new(api: ApiClient<H>, store: Arc<Store>, user_id: impl Into<String>) -> Self {
        Self {
            api,
            store,
            title: String::new(),
            description: String::new(),
            user_id: user_id.into(),
        }
    }

    /// Load categories for the form. Best-effort.
    #[tracing::instrument(skip(self))]
    pub async fn mount(&self) {
        super::load_categories(&self.api, &self.store).await;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Build the request body, rejecting blank required fields.
    pub fn validate(&self) -> Result<NewComplaint> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(DocketError::Validation(MISSING_FIELDS.to_string()));
        }
        Ok(NewComplaint {
            title: self.title.clone(),
            description: self.description.clone(),
            user_id: self.user_id.clone(),
        })
    }

    /// Submit the form.
    ///
    /// On success the created complaint is prepended to the store and the
    /// inputs are cleared. On an API failure the error is surfaced through the
    /// store and the inputs are left for correction.
    #[tracing::instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<Complaint> {
        let complaint = self.validate().inspect_err(|e| {
            tracing::debug!(error = %e, "Form rejected");
        })?;

        match self.api.create_complaint(&complaint).await {
            Ok(created) => {
                self.store.dispatch(Action::AddComplaint(created.clone()));
                self.title.clear();
                self.description.clear();
                Ok(created)
            }
            Err(e) => {
                self.store.dispatch(Action::SetError(e.user_message()));
                Err(e)
            }
        }
    }
}
