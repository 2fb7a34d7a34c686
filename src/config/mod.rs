//! Configuration types for the canopy-rest client.
//!
//! This module provides the configuration used to construct the default
//! HTTP collaborator ([`HttpClient`](crate::clients::HttpClient)).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: The main configuration struct
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`BaseUrl`]: A validated API base URL newtype
//!
//! # Example
//!
//! ```rust
//! use canopy_rest::{ClientConfig, BaseUrl};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::BaseUrl;

use crate::error::ConfigError;

/// Configuration for the default HTTP collaborator.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use canopy_rest::{ClientConfig, BaseUrl};
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .tries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.tries(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    tries: u32,
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request try budget (1 means no retries).
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

/// Builder for [`ClientConfig`].
///
/// # Example
///
/// ```rust
/// use canopy_rest::{ClientConfig, BaseUrl};
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
}

impl ClientConfigBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets a prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the request try budget (1 means no retries; default 1).
    #[must_use]
    pub fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` was not
    /// set, or [`ConfigError::InvalidTries`] if `tries` is zero.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries);
        }

        Ok(ClientConfig {
            base_url,
            user_agent_prefix: self.user_agent_prefix,
            tries,
        })
    }
}
