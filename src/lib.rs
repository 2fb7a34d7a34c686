//! # canopy-rest
//!
//! A client framework for navigating tree-shaped REST APIs: resources are
//! addressed by hierarchical paths, list endpoints return paginated
//! collections of instance resources, and instance resources expose further
//! nested sub-resources.
//!
//! ## Overview
//!
//! This crate provides:
//! - A generic resource engine ([`rest`]): collection handles, lazily
//!   hydrated instance handles, and cursor-free lazy pagination
//! - Init-time type resolution via a validated [`TypeRegistry`]
//! - Pure path and name composition with exceptions tables for irregular
//!   names ([`rest::naming`], [`ResourcePath`])
//! - An injected HTTP collaborator seam ([`clients::Transport`]) with a
//!   default `reqwest`-backed implementation ([`HttpClient`])
//! - Type-safe configuration via [`ClientConfig`] and validated newtypes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use canopy_rest::{BaseUrl, ClientConfig, HttpClient};
//! use canopy_rest::rest::resources::{self, api::v2010};
//!
//! // Configure the default HTTP collaborator
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()?;
//! let client = Arc::new(HttpClient::new(&config));
//!
//! // Bootstrap the generated resource tree
//! let registry = Arc::new(resources::registry()?);
//! let accounts = v2010::accounts(registry, Some(client))?;
//!
//! // Walk it
//! let page = accounts.list(None).await?;
//! for account in page.iter() {
//!     println!("{:?}", account.property("friendly_name").await?);
//! }
//! let next = page.next_page().await?; // empty page when exhausted
//! ```
//!
//! ## Laziness Contract
//!
//! Building a handle never performs I/O:
//!
//! - [`ResourceCollection::get`](rest::ResourceCollection::get) returns a
//!   hollow instance; the GET (and any not-found) happens at first property
//!   access.
//! - `next_page()` is evaluated on demand; when the server reports no
//!   further page it returns an empty page without a request.
//! - Sub-resource accessors compose paths only; child collections are
//!   memoized per parent handle.
//!
//! ## Design Principles
//!
//! - **No global state**: registries and clients are instance-based and
//!   passed explicitly
//! - **Fail-fast validation**: configuration newtypes and the type registry
//!   validate on construction
//! - **Thread-safe**: all handles are `Send + Sync`, with guarded
//!   memoization and hydration
//! - **Async-first**: designed for the Tokio runtime; no background work,
//!   no prefetching
//! - **Opaque transport errors**: the engine performs no retries and no
//!   recovery; collaborator failures propagate unchanged

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, ClientConfig, ClientConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP collaborator types
pub use clients::{
    HttpClient, HttpError, HttpResponseError, MaxHttpRetriesExceededError, ResponseEnvelope,
    Transport,
};

// Re-export resource engine types
pub use rest::{
    CollectionDef, FetchedCollection, InstanceDef, InstanceResource, Page, PageMetadata,
    Properties, ResourceCollection, ResourceError, ResourcePath, Subresource, TypeRegistry,
};
