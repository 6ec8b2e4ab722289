//! Per-complaint status editor.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::domain::{Complaint, ComplaintId, ComplaintStatus};
use crate::error::{DocketError, Result};
use crate::http::HttpClient;
use crate::store::{Action, Store};

pub struct StatusEditor<H: HttpClient> {
    api: ApiClient<H>,
    store: Arc<Store>,
}

impl<H: HttpClient> StatusEditor<H> {
    pub fn new(api: ApiClient<H>, store: Arc<Store>) -> Self {
        Self { api, store }
    }

    /// Send the new status immediately.
    ///
    /// The store is updated with the full record the server returns, so
    /// server-side changes such as `updated_at` are picked up too.
    /// [`ComplaintStatus::Unknown`] is refused locally without a request.
    pub async fn change_status(
        &self,
        id: &ComplaintId,
        status: ComplaintStatus,
    ) -> Result<Complaint> {
        if !status.is_known() {
            return Err(DocketError::Validation(format!(
                "cannot set status '{}' on complaint {}",
                status, id
            )));
        }
        match self.api.update_complaint_status(id, status).await {
            Ok(updated) => {
                self.store
                    .dispatch(Action::UpdateComplaint(updated.clone()));
                Ok(updated)
            }
            Err(e) => {
                self.store.dispatch(Action::SetError(e.user_message()));
                Err(e)
            }
        }
    }
}
