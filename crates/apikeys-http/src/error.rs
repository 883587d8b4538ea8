//! Transport error types for API key requests.
//!
//! These errors stay inside `apikeys-http`. At the contract boundary they are
//! logged and collapsed into the `ApiKeyError` kind of the operation.

use thiserror::Error;

/// Result type alias for transport operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors raised while building or executing an API key request.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with a status outside the success range.
    #[error("API request failed with status {status}: {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The configured base URL cannot carry a path (e.g. `mailto:`).
    #[error("Base URL cannot be used for API requests: {url}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let error = HttpError::Status {
            status: 503,
            url: "http://127.0.0.1:8787/api/apikeys".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("/api/apikeys"));
    }

    #[test]
    fn test_invalid_base_url_message() {
        let error = HttpError::InvalidBaseUrl {
            url: "mailto:ops@example.com".to_string(),
        };
        assert!(error.to_string().contains("mailto:ops@example.com"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<u64>("not json").unwrap_err();
        let error: HttpError = parse.into();
        assert!(matches!(error, HttpError::Json(_)));
    }
}
