//! The resource-resolution and pagination engine.
//!
//! This module is the core of the crate: the generic machinery for walking a
//! tree-shaped REST API.
//!
//! - **[`ResourcePath`] + [`naming`]**: pure path and name composition —
//!   pluralization, envelope keys, and segment casing, each with its
//!   exceptions table.
//! - **[`TypeRegistry`]**: init-time resolution from an abstract resource
//!   kind to its instance descriptor, validated before any traffic.
//! - **[`ResourceCollection`]**: the collection handle —
//!   list/create/get/total and the polymorphic [`subresource`] accessor.
//! - **[`FetchedCollection`] + [`Page`]**: one fetched page, bound to its
//!   own metadata, with the lazy `next_page()` continuation.
//! - **[`InstanceResource`]**: one addressed item, hollow until a property
//!   is demanded.
//! - **[`resources`]**: generated descriptor tables for the concrete tree.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use canopy_rest::clients::HttpClient;
//! use canopy_rest::rest::resources::{self, api::v2010};
//!
//! let registry = Arc::new(resources::registry()?);
//! let client = Arc::new(HttpClient::new(&config));
//! let accounts = v2010::accounts(registry, Some(client))?;
//!
//! // One GET; total and next_page ride along with the response.
//! let page = accounts.list(None).await?;
//! println!("{} of {}", page.len(), page.total());
//!
//! // No I/O: a hollow handle. The GET happens at first property access.
//! let account = accounts.get("AC123");
//! let name = account.property("friendly_name").await?;
//!
//! // Descend the tree: /Accounts/AC123/SIP/Domains
//! let domains = account
//!     .subresource("sip", None)?.into_collection().unwrap()
//!     .subresource("domains", None)?.into_collection().unwrap();
//! ```
//!
//! [`subresource`]: ResourceCollection::subresource

mod collection;
mod errors;
mod instance;
pub mod naming;
mod page;
mod path;
mod registry;
mod response;

pub mod resources;

// Public exports
pub use collection::{ResourceCollection, Subresource};
pub use errors::ResourceError;
pub use instance::{InstanceResource, Properties};
pub use page::Page;
pub use path::ResourcePath;
pub use registry::{CollectionDef, InstanceDef, TypeRegistry};
pub use response::{FetchedCollection, PageMetadata};
