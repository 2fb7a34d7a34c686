//! The injected HTTP collaborator seam.
//!
//! The resource layer never talks to the network directly; it is handed an
//! `Arc<dyn Transport>` and issues one request per operation through it.
//! [`HttpClient`](crate::clients::HttpClient) is the default implementation;
//! tests substitute doubles that record or refuse invocations.
//!
//! Transport policy (timeouts, retries, TLS, pooling) belongs entirely to
//! the implementation behind this trait. The resource layer propagates any
//! [`HttpError`] unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use async_trait::async_trait;
//! use canopy_rest::clients::{HttpError, ResponseEnvelope, Transport};
//!
//! #[derive(Debug)]
//! struct Recorder;
//!
//! #[async_trait]
//! impl Transport for Recorder {
//!     async fn get(
//!         &self,
//!         path: &str,
//!         query: Option<&HashMap<String, String>>,
//!         absolute: bool,
//!     ) -> Result<ResponseEnvelope, HttpError> {
//!         /* ... */
//!     }
//!
//!     async fn post(
//!         &self,
//!         path: &str,
//!         body: &serde_json::Value,
//!     ) -> Result<ResponseEnvelope, HttpError> {
//!         /* ... */
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;

use crate::clients::{HttpError, ResponseEnvelope};

/// The HTTP collaborator injected into every resource handle.
///
/// `path` is a server-absolute path (leading slash). When `absolute` is
/// `true` the path is a continuation URI exactly as the server supplied it
/// (it may carry its own query string) and must be requested verbatim;
/// otherwise the implementation may normalize the path before joining it to
/// its base URL.
///
/// Implementations must surface non-2xx responses as
/// [`HttpError::Response`] so the resource layer only ever sees successful
/// envelopes.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Issues a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    async fn get(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
        absolute: bool,
    ) -> Result<ResponseEnvelope, HttpError>;

    /// Issues a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<ResponseEnvelope, HttpError>;
}
