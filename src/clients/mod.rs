//! HTTP collaborator types.
//!
//! This module provides the transport seam between the resource layer and
//! the network. The resource layer depends only on the [`Transport`] trait;
//! [`HttpClient`] is the default `reqwest`-backed implementation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: The injected HTTP collaborator trait (get/post)
//! - [`HttpClient`]: The default async HTTP client
//! - [`ResponseEnvelope`]: A parsed response (status, headers, JSON body)
//! - [`HttpError`]: Unified transport error type
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use canopy_rest::{BaseUrl, ClientConfig};
//! use canopy_rest::clients::{HttpClient, Transport};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()?;
//!
//! let client: Arc<dyn Transport> = Arc::new(HttpClient::new(&config));
//! let envelope = client.get("/2010-04-01/Accounts", None, false).await?;
//! println!("{}", envelope.body);
//! ```
//!
//! # Retry Behavior
//!
//! The default client implements bounded retry for transient failures:
//!
//! - **429 (Rate Limited)**: retries using the `Retry-After` header value,
//!   or 1 second if not present
//! - **500 (Server Error)**: retries with a fixed 1-second delay
//! - **Other errors (4xx)**: returned immediately without retry
//!
//! The default try budget is 1, meaning no retries. Configure via
//! [`ClientConfigBuilder::tries`](crate::config::ClientConfigBuilder::tries).
//! The resource layer itself never retries anything.

mod errors;
mod http_client;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_response::ResponseEnvelope;
pub use transport::Transport;
