//! Client failure classification
//!
//! All failures of a remote call end up in one of three buckets. Callers
//! outside this crate are expected to treat them uniformly as "operation
//! failed" and only use [`ClientError::remote_message`] for display.

use thiserror::Error;

/// Result alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Classified failure of a single remote round-trip
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No response was received (connection refused, DNS, reset, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Message extracted from the error body, if any
        message: Option<String>,
    },

    /// The response body could not be decoded into the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Human-readable message supplied by the service, if there was one
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Remote { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// The service message when present, otherwise `fallback`
    pub fn message_or(&self, fallback: &str) -> String {
        self.remote_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Extract a message from a non-2xx response body
///
/// Looks for a string `message` field, then a string `detail` field (the
/// service framework's default error shape), then falls back to the raw body
/// when it is plain, non-empty text.
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) => ["message", "detail"]
            .iter()
            .filter_map(|key| value.get(*key))
            .filter_map(|field| field.as_str())
            .map(str::trim)
            .find(|text| !text.is_empty())
            .map(str::to_string),
        Err(_) => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_field() {
        let body = r#"{"message": "Folder already exists", "detail": "ignored"}"#;
        assert_eq!(
            extract_error_message(body),
            Some("Folder already exists".to_string())
        );
    }

    #[test]
    fn test_extract_detail_field() {
        let body = r#"{"detail": "Git clone failed: repository not found"}"#;
        assert_eq!(
            extract_error_message(body),
            Some("Git clone failed: repository not found".to_string())
        );
    }

    #[test]
    fn test_extract_skips_non_string_detail() {
        // validation errors carry a list in `detail`
        let body = r#"{"detail": [{"loc": ["body", "repo_url"], "msg": "field required"}]}"#;
        assert_eq!(extract_error_message(body), None);
    }

    #[test]
    fn test_extract_plain_text_body() {
        assert_eq!(
            extract_error_message("Internal Server Error"),
            Some("Internal Server Error".to_string())
        );
    }

    #[test]
    fn test_extract_empty_body() {
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message("   \n"), None);
    }

    #[test]
    fn test_message_or_falls_back() {
        let network = ClientError::Network("connection refused".to_string());
        assert_eq!(network.message_or("operation failed"), "operation failed");
        assert!(network.is_network());

        let remote = ClientError::Remote {
            status: 500,
            message: Some("boom".to_string()),
        };
        assert_eq!(remote.message_or("operation failed"), "boom");

        let remote_without_message = ClientError::Remote {
            status: 502,
            message: None,
        };
        assert_eq!(
            remote_without_message.message_or("operation failed"),
            "operation failed"
        );
    }

    #[test]
    fn test_display() {
        let err = ClientError::Remote {
            status: 404,
            message: None,
        };
        assert_eq!(err.to_string(), "Request failed with status code 404");
    }
}
