//! Application session.
//!
//! A session owns one [`Store`] and one [`ApiClient`] and hands both to its
//! view controllers. Dropping the session discards all state; nothing is
//! persisted.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::domain::Complaint;
use crate::error::Result;
use crate::http::{HttpClient, ReqwestHttpClient};
use crate::store::Store;
use crate::views::{ComplaintForm, ComplaintList, StatusEditor};

/// Which view is in front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    List,
    Create,
}

pub struct Session<H: HttpClient> {
    config: ClientConfig,
    store: Arc<Store>,
    api: ApiClient<H>,
    list: ComplaintList<H>,
    form: ComplaintForm<H>,
    status: StatusEditor<H>,
    active: View,
}

impl Session<ReqwestHttpClient> {
    /// Session talking to the configured service over HTTP.
    pub fn new(config: ClientConfig) -> Self {
        let http = Arc::new(ReqwestHttpClient::new(
            config.base_url.clone(),
            config.timeout_ms,
        ));
        Self::with_client(config, http)
    }
}

impl<H: HttpClient> Session<H> {
    pub fn with_client(config: ClientConfig, http: Arc<H>) -> Self {
        let store = Arc::new(Store::new());
        let api = ApiClient::new(http);
        Self {
            list: ComplaintList::new(api.clone(), store.clone()),
            form: ComplaintForm::new(api.clone(), store.clone(), config.user_id.clone()),
            status: StatusEditor::new(api.clone(), store.clone()),
            config,
            store,
            api,
            active: View::default(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn api(&self) -> &ApiClient<H> {
        &self.api
    }

    pub fn list(&self) -> &ComplaintList<H> {
        &self.list
    }

    pub fn form(&self) -> &ComplaintForm<H> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ComplaintForm<H> {
        &mut self.form
    }

    pub fn status_editor(&self) -> &StatusEditor<H> {
        &self.status
    }

    pub fn active_view(&self) -> View {
        self.active
    }

    /// Bring `view` to the front and run its mount-time loads.
    #[tracing::instrument(skip(self))]
    pub async fn show(&mut self, view: View) {
        self.active = view;
        match view {
            View::List => self.list.mount().await,
            View::Create => self.form.mount().await,
        }
    }

    /// Submit the creation form; on success switch back to the list.
    pub async fn submit_form(&mut self) -> Result<Complaint> {
        let created = self.form.submit().await?;
        self.show(View::List).await;
        Ok(created)
    }
}
