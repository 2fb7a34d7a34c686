//! HTTP response envelope for the transport layer.
//!
//! This module provides the [`ResponseEnvelope`] type returned by every
//! [`Transport`](crate::clients::Transport) operation. The resource layer
//! reads the JSON body; the envelope also carries the parsed headers the
//! default client needs for retry and error reporting.

use std::collections::HashMap;

/// An HTTP response as seen by the resource layer.
///
/// Contains the response status code, headers, and the parsed JSON body.
/// Header values are stored lowercased-by-name since headers may repeat.
#[derive(Clone, Debug)]
pub struct ResponseEnvelope {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (a header may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl ResponseEnvelope {
    /// Creates a new `ResponseEnvelope` with automatic header parsing.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

// Verify ResponseEnvelope is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResponseEnvelope>();
};
