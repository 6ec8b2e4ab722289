//! Error types for the complaint client.

use thiserror::Error;

/// Result type alias using the docket error type.
pub type Result<T> = std::result::Result<T, DocketError>;

/// Message used when the server reports a failure without saying why.
pub const GENERIC_API_ERROR: &str = "API request failed";

/// Message shown when a successful response could not be understood.
pub const UNEXPECTED_RESPONSE: &str = "Unexpected response from server";

/// Main error type for the complaint client.
#[derive(Error, Debug)]
pub enum DocketError {
    /// The server answered with a status outside the success range.
    ///
    /// `message` is the server-supplied reason (or [`GENERIC_API_ERROR`]) and is
    /// the whole display text, so it can be surfaced to users verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Client-side validation failed before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP transport error (connection refused, timeout, invalid URL)
    #[error("HTTP request failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Response body was not the JSON shape we expected
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General error from anyhow
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DocketError {
    /// The single human-readable string surfaced through the shared error state.
    ///
    /// Decoding failures are reported generically; the serde detail only goes
    /// to the logs.
    pub fn user_message(&self) -> String {
        match self {
            DocketError::Serialization(_) => UNEXPECTED_RESPONSE.to_string(),
            other => other.to_string(),
        }
    }

    /// HTTP status reported by the server, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            DocketError::Api { status, .. } => Some(*status),
            DocketError::HttpClient(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this error was raised locally by form validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, DocketError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_server_message_only() {
        let error = DocketError::Api {
            status: 500,
            message: "db unavailable".to_string(),
        };
        assert_eq!(error.user_message(), "db unavailable");
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn test_validation_error_is_flagged() {
        let error = DocketError::Validation("title is required".to_string());
        assert!(error.is_validation());
        assert_eq!(error.status(), None);
        assert!(error.user_message().contains("title is required"));
    }

    #[test]
    fn test_serialization_error_has_plain_user_message() {
        let error = DocketError::from(serde_json::from_str::<u32>("nope").unwrap_err());
        assert_eq!(error.user_message(), UNEXPECTED_RESPONSE);
        assert!(error.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn test_other_error_is_transparent() {
        let error = DocketError::from(anyhow::anyhow!("No mock response configured"));
        assert_eq!(error.user_message(), "No mock response configured");
    }
}
