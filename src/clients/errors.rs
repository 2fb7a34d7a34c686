//! HTTP-specific error types for the transport layer.
//!
//! This module contains error types for HTTP operations, including response
//! errors, retry exhaustion, and network failures.
//!
//! # Error Handling
//!
//! The crate uses specific error types for different failure scenarios:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the server
//! - [`MaxHttpRetriesExceededError`]: When retry attempts are exhausted
//! - [`HttpError`]: Unified error type encompassing all transport failures
//!
//! The resource layer treats all of these as opaque and propagates them
//! unchanged to the caller of the operation that triggered the request.
//!
//! # Example
//!
//! ```rust,ignore
//! use canopy_rest::clients::{HttpError, Transport};
//!
//! match client.get("/Accounts", None, false).await {
//!     Ok(envelope) => println!("Success: {}", envelope.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::MaxRetries(e)) => {
//!         println!("Retries exhausted after {} tries", e.tries);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message field carries the serialized error body from the server;
/// `error_reference` carries the `X-Request-Id` header when present so the
/// failing request can be reported.
///
/// # Example
///
/// ```rust
/// use canopy_rest::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"message":"not found"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when maximum retry attempts have been exhausted.
///
/// Raised when a request continues to fail with 429 or 500 responses after
/// all configured retry attempts have been made.
///
/// # Example
///
/// ```rust
/// use canopy_rest::clients::MaxHttpRetriesExceededError;
///
/// let error = MaxHttpRetriesExceededError {
///     code: 429,
///     tries: 3,
///     message: r#"{"message":"rate limited"}"#.to_string(),
///     error_reference: None,
/// };
///
/// println!("{}", error); // "Exceeded maximum retry count of 3. Last message: ..."
/// ```
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Serialized error message from the last response.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Unified error type for all HTTP transport operations.
///
/// This enum wraps the specific error types, allowing functions to return
/// a single error type while preserving specific error information.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx HTTP response was received.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts were exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// A network-level error occurred (connection, DNS, timeout).
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code of the failing response, if one was
    /// received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Returns the request ID reference of the failing response, if present.
    #[must_use]
    pub fn error_reference(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.error_reference.as_deref(),
            Self::MaxRetries(e) => e.error_reference.as_deref(),
            Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_displays_message() {
        let error = HttpResponseError {
            code: 400,
            message: r#"{"message":"bad request"}"#.to_string(),
            error_reference: None,
        };
        assert!(error.to_string().contains("bad request"));
    }

    #[test]
    fn test_max_retries_error_displays_tries() {
        let error = MaxHttpRetriesExceededError {
            code: 500,
            tries: 3,
            message: "{}".to_string(),
            error_reference: None,
        };
        assert!(error.to_string().contains("retry count of 3"));
    }

    #[test]
    fn test_http_error_status_for_response() {
        let error = HttpError::Response(HttpResponseError {
            code: 404,
            message: "{}".to_string(),
            error_reference: Some("req-1".to_string()),
        });
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.error_reference(), Some("req-1"));
    }

    #[test]
    fn test_http_error_status_for_max_retries() {
        let error = HttpError::MaxRetries(MaxHttpRetriesExceededError {
            code: 429,
            tries: 2,
            message: "{}".to_string(),
            error_reference: None,
        });
        assert_eq!(error.status(), Some(429));
        assert_eq!(error.error_reference(), None);
    }
}
