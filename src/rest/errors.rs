//! Error types for resource operations.
//!
//! The resource layer has a small, deliberate error taxonomy:
//!
//! - [`ResourceError::UnresolvedType`] — a configuration/generation defect:
//!   a descriptor names an instance type the registry does not know. Caught
//!   at registry construction, never at request time.
//! - [`ResourceError::NoClient`] — a precondition failure: an operation that
//!   performs I/O was invoked on a handle with no bound collaborator.
//! - [`ResourceError::Envelope`] — the server answered 2xx but the body does
//!   not match the envelope contract.
//! - [`ResourceError::Http`] — an opaque transport failure, propagated
//!   unchanged from the collaborator. Not-found for a lazily fetched handle
//!   arrives here, at first property access rather than at `get` time.
//!
//! The layer performs no retries, no backoff, and no silent recovery.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust,ignore
/// use canopy_rest::rest::ResourceError;
///
/// match collection.list(None).await {
///     Ok(page) => println!("{} of {}", page.len(), page.total()),
///     Err(ResourceError::NoClient { operation }) => {
///         println!("bind a client before calling {operation}");
///     }
///     Err(e) => println!("Other error: {}", e),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No HTTP collaborator is bound to this handle.
    ///
    /// Raised by every operation that must perform I/O. Building handles
    /// (`get`, sub-resource accessors) never requires a client.
    #[error("Can't {operation} without a bound HTTP client")]
    NoClient {
        /// The operation that needed a client (e.g., "list", "create").
        operation: &'static str,
    },

    /// No resource type with the given name exists in the namespace.
    ///
    /// Raised when a collection's instance type is not registered, or when a
    /// sub-resource accessor names a child the descriptor tree does not
    /// define. Both are generation/configuration defects; the former is
    /// detected when the registry is built, before any traffic is served.
    #[error("No resource type named '{name}' registered under namespace '{namespace}'")]
    UnresolvedType {
        /// The namespace that was searched.
        namespace: String,
        /// The instance type name that could not be resolved.
        name: String,
    },

    /// The response body does not match the envelope contract.
    #[error("Response envelope for '{path}' is missing or has a malformed '{field}' field")]
    Envelope {
        /// The envelope field that was missing or malformed.
        field: String,
        /// The request path that produced the envelope.
        path: String,
    },

    /// An opaque transport error from the HTTP collaborator.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the HTTP status code if this error carries one.
    ///
    /// Convenient for callers that branch on not-found surfacing from a
    /// deferred fetch.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
