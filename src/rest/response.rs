//! Fetched pages and lazy pagination.
//!
//! A [`FetchedCollection`] is the result of one `list` call: the deserialized
//! items plus the [`PageMetadata`] of the exact response that produced them.
//! Carrying the metadata in an explicit wrapper keeps the binding between a
//! page and its response visible in the type, rather than as ad hoc
//! properties bolted onto a bare item sequence.
//!
//! `next_page()` is the lazy continuation: nothing is prefetched, no cursor
//! is managed by the caller, and walking a multi-thousand-item collection
//! costs one request per page actually visited.
//!
//! # Deref Pattern
//!
//! `FetchedCollection` derefs to `[InstanceResource]`, so slice methods work
//! directly:
//!
//! ```rust,ignore
//! let page = accounts.list(None).await?;
//! for account in page.iter() {
//!     println!("{:?}", account.id());
//! }
//! println!("{} of {}", page.len(), page.total());
//! ```

use std::ops::Deref;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::Transport;
use crate::rest::collection::ResourceCollection;
use crate::rest::errors::ResourceError;
use crate::rest::instance::InstanceResource;
use crate::rest::registry::{CollectionDef, TypeRegistry};

/// Pagination metadata of one list response.
///
/// `next_page_uri` is present iff the server reports more items beyond this
/// page; the client never infers "more data" from page fullness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMetadata {
    /// Server-reported total number of items in the collection.
    pub total: u64,
    /// Server-supplied locator for the next page, if one exists.
    pub next_page_uri: Option<String>,
}

impl PageMetadata {
    /// Extracts metadata from a list response body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Envelope`] if `total` is missing or not an
    /// integer, or if `next_page_uri` is present but not a string.
    pub(crate) fn from_envelope(body: &Value, path: &str) -> Result<Self, ResourceError> {
        let total = body
            .get("total")
            .and_then(Value::as_u64)
            .ok_or_else(|| ResourceError::Envelope {
                field: "total".to_string(),
                path: path.to_string(),
            })?;

        let next_page_uri = match body.get("next_page_uri") {
            None | Some(Value::Null) => None,
            Some(Value::String(uri)) => Some(uri.clone()),
            Some(_) => {
                return Err(ResourceError::Envelope {
                    field: "next_page_uri".to_string(),
                    path: path.to_string(),
                })
            }
        };

        Ok(Self {
            total,
            next_page_uri,
        })
    }
}

/// One fetched page of a collection, bound to its own response metadata.
///
/// A later page carries its own independent metadata, not inherited from the
/// first — each `list` binds a fresh `FetchedCollection` to the response it
/// just received.
#[derive(Debug)]
pub struct FetchedCollection {
    items: Vec<InstanceResource>,
    metadata: PageMetadata,
    def: &'static CollectionDef,
    registry: Arc<TypeRegistry>,
    client: Option<Arc<dyn Transport>>,
}

impl FetchedCollection {
    pub(crate) fn new(
        items: Vec<InstanceResource>,
        metadata: PageMetadata,
        def: &'static CollectionDef,
        registry: Arc<TypeRegistry>,
        client: Option<Arc<dyn Transport>>,
    ) -> Self {
        Self {
            items,
            metadata,
            def,
            registry,
            client,
        }
    }

    /// An empty page: no items, zero total, no continuation.
    pub(crate) fn empty(
        def: &'static CollectionDef,
        registry: Arc<TypeRegistry>,
        client: Option<Arc<dyn Transport>>,
    ) -> Self {
        Self::new(
            Vec::new(),
            PageMetadata {
                total: 0,
                next_page_uri: None,
            },
            def,
            registry,
            client,
        )
    }

    /// Returns the items of this page.
    #[must_use]
    pub fn items(&self) -> &[InstanceResource] {
        &self.items
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_items(self) -> Vec<InstanceResource> {
        self.items
    }

    /// Server-reported total for the collection, read from this page's
    /// response — no extra request.
    ///
    /// May exceed `len()`: the server reports the collection-wide count even
    /// when this page holds fewer items.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.metadata.total
    }

    /// Returns the next-page locator, if the server supplied one.
    #[must_use]
    pub fn next_page_uri(&self) -> Option<&str> {
        self.metadata.next_page_uri.as_deref()
    }

    /// Returns `true` if the server reports more items beyond this page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.metadata.next_page_uri.is_some()
    }

    /// Fetches the next page of the collection.
    ///
    /// When no continuation exists this returns an **empty page without
    /// issuing a request** — walking pages until empty needs no cursor
    /// bookkeeping from the caller. When one does, a fresh collection is
    /// bound to the continuation URI and listed with absolute-path
    /// semantics; the returned page carries its own metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NoClient`] if a continuation exists but no
    /// collaborator is bound, or propagates the transport error of the GET.
    pub async fn next_page(&self) -> Result<Self, ResourceError> {
        let Some(uri) = self.metadata.next_page_uri.as_deref() else {
            return Ok(Self::empty(
                self.def,
                Arc::clone(&self.registry),
                self.client.clone(),
            ));
        };

        let continuation = ResourceCollection::continuation(
            self.def,
            Arc::clone(&self.registry),
            uri,
            self.client.clone(),
        )?;
        continuation.list(None).await
    }
}

impl Deref for FetchedCollection {
    type Target = [InstanceResource];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<'a> IntoIterator for &'a FetchedCollection {
    type Item = &'a InstanceResource;
    type IntoIter = std::slice::Iter<'a, InstanceResource>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// Verify FetchedCollection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FetchedCollection>();
};
