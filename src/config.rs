//! Client configuration.

use serde::{Deserialize, Serialize};

/// Base URL of a locally running complaint service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/v1";

/// Configuration for a client session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every API path is appended to
    pub base_url: String,

    /// Per-request timeout in milliseconds.
    /// Set to None to use the transport's default
    pub timeout_ms: Option<u64>,

    /// User identifier sent with new complaints
    pub user_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: Some(30_000),
            user_id: "anonymous".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "https://complaints.example.org/api/v1"}"#)
                .unwrap();
        assert_eq!(config.base_url, "https://complaints.example.org/api/v1");
        assert_eq!(config.timeout_ms, Some(30_000));
        assert_eq!(config.user_id, "anonymous");
    }

    #[test]
    fn test_timeout_can_be_disabled() {
        let config: ClientConfig = serde_json::from_str(r#"{"timeout_ms": null}"#).unwrap();
        assert_eq!(config.timeout_ms, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
