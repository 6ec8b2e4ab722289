//! Typed client for the complaint service's REST API.
//!
//! Every operation maps onto exactly one HTTP request. Responses are decoded
//! from the service's JSON envelopes and every failure (transport, non-success
//! status, unexpected body) comes back as a single [`DocketError`]. Nothing here
//! retries: creating a complaint has side effects, so retry policy belongs to
//! the caller.

use std::sync::Arc;

use metrics::counter;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Category, Complaint, ComplaintFilter, ComplaintId, ComplaintStatus, NewComplaint, Priority,
};
use crate::error::{DocketError, GENERIC_API_ERROR, Result};
use crate::http::{ApiRequest, HttpClient, HttpResponse};

#[derive(Debug, Deserialize)]
struct ComplaintEnvelope {
    complaint: Complaint,
}

#[derive(Debug, Deserialize)]
struct ComplaintsEnvelope {
    complaints: Vec<Complaint>,
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct PrioritiesEnvelope {
    priorities: Vec<Priority>,
}

/// Shape of a failure body. The service uses `error` on its routes and
/// `message` when the failure comes from deeper in the stack.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

#[derive(Serialize)]
struct StatusUpdate {
    status: ComplaintStatus,
}

/// Confirmation returned by a delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Client for the complaint service.
pub struct ApiClient<H: HttpClient> {
    http: Arc<H>,
}

impl<H: HttpClient> Clone for ApiClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

impl<H: HttpClient> ApiClient<H> {
    pub fn new(http: Arc<H>) -> Self {
        Self { http }
    }

    /// Submit a new complaint. Never retried by this layer.
    #[tracing::instrument(skip(self, complaint), fields(user_id = %complaint.user_id))]
    pub async fn create_complaint(&self, complaint: &NewComplaint) -> Result<Complaint> {
        let request =
            ApiRequest::new("POST", "/complaints").with_body(serde_json::to_string(complaint)?);
        let envelope: ComplaintEnvelope = self.send("create_complaint", request).await?;
        tracing::info!(complaint_id = %envelope.complaint.id, "Complaint created");
        Ok(envelope.complaint)
    }

    /// List complaints in server order. Only non-empty filter fields are sent.
    #[tracing::instrument(skip(self, filter), fields(status = ?filter.status, category = ?filter.category, priority = ?filter.priority))]
    pub async fn list_complaints(&self, filter: &ComplaintFilter) -> Result<Vec<Complaint>> {
        let request = ApiRequest::new("GET", "/complaints").with_query(filter.query_pairs());
        let envelope: ComplaintsEnvelope = self.send("list_complaints", request).await?;
        tracing::debug!(count = envelope.complaints.len(), "Listed complaints");
        Ok(envelope.complaints)
    }

    /// Set a complaint's status and return the full updated record.
    #[tracing::instrument(skip(self), fields(complaint_id = %id, status = %status))]
    pub async fn update_complaint_status(
        &self,
        id: &ComplaintId,
        status: ComplaintStatus,
    ) -> Result<Complaint> {
        let request = ApiRequest::new("PUT", complaint_path(id))
            .with_body(serde_json::to_string(&StatusUpdate { status })?);
        let envelope: ComplaintEnvelope = self.send("update_complaint_status", request).await?;
        Ok(envelope.complaint)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let envelope: CategoriesEnvelope = self
            .send("list_categories", ApiRequest::new("GET", "/categories"))
            .await?;
        Ok(envelope.categories)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_priorities(&self) -> Result<Vec<Priority>> {
        let envelope: PrioritiesEnvelope = self
            .send("list_priorities", ApiRequest::new("GET", "/priorities"))
            .await?;
        Ok(envelope.priorities)
    }

    #[tracing::instrument(skip(self), fields(complaint_id = %id))]
    pub async fn delete_complaint(&self, id: &ComplaintId) -> Result<DeleteConfirmation> {
        self.send(
            "delete_complaint",
            ApiRequest::new("DELETE", complaint_path(id)),
        )
        .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: ApiRequest,
    ) -> Result<T> {
        let result = self.http.execute(&request).await.and_then(decode);

        match &result {
            Ok(_) => {
                counter!(
                    "docket_api_requests_total",
                    "operation" => operation,
                    "outcome" => "success"
                )
                .increment(1);
            }
            Err(e) => {
                counter!(
                    "docket_api_requests_total",
                    "operation" => operation,
                    "outcome" => "failure"
                )
                .increment(1);
                tracing::error!(
                    operation,
                    method = %request.method,
                    path = %request.path,
                    status = ?e.status(),
                    error = %e,
                    "API request failed"
                );
            }
        }

        result
    }
}

/// Path of a single complaint. Ids are opaque, so they are percent-encoded.
fn complaint_path(id: &ComplaintId) -> String {
    format!("/complaints/{}", urlencoding::encode(id))
}

/// Turn a raw response into `T`, or into the uniform failure.
///
/// An empty success body (a 204, say) decodes as `{}`, so types whose fields
/// all default still come back.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    if !response.is_success() {
        return Err(DocketError::Api {
            status: response.status,
            message: error_message(&response.body),
        });
    }
    let body = match response.body.trim() {
        "" => "{}",
        body => body,
    };
    Ok(serde_json::from_str(body)?)
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error.or(body.message))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_API_ERROR.to_string())
}
