//! Error types for crate configuration.
//!
//! This module contains error types used by the configuration layer for
//! fail-fast validation of client settings.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use canopy_rest::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not-a-url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
///
/// Each variant provides a clear, actionable message; configuration errors
/// are always fatal and never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is missing a scheme or otherwise malformed.
    #[error("Invalid base URL '{url}'. Expected an absolute http(s) URL (e.g., 'https://api.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field was not set before building the configuration.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Retry budget of zero tries is meaningless.
    #[error("Invalid retry budget: tries must be at least 1 (1 means no retries).")]
    InvalidTries,
}
