//! Client core for a complaint-management service.
//!
//! This crate provides a typed API client for the service's REST endpoints, a
//! reducer-driven application state store, and headless view controllers (a
//! filterable list, a creation form and a per-complaint status editor) that turn
//! user intents into API calls and store actions.
//!
//! Control flow: user intent → view controller calls [`ApiClient`] → on success
//! the controller dispatches an [`Action`] → [`Store`] reduces it into a new
//! [`AppState`] and publishes the snapshot to subscribers.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod session;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use api::{ApiClient, DeleteConfirmation};
pub use config::ClientConfig;
pub use domain::*;
pub use error::{DocketError, Result};
pub use http::{ApiRequest, HttpClient, HttpResponse, MockHttpClient, ReqwestHttpClient};
pub use session::{Session, View};
pub use store::{Action, AppState, Store, reduce};
pub use views::{ComplaintForm, ComplaintList, ListDisplay, StatusEditor};
