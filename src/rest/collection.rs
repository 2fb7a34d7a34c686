//! Collection endpoints: listing, creation, addressing, and nesting.
//!
//! A [`ResourceCollection`] is a long-lived handle on one collection
//! endpoint of the resource tree. It is bound to a path and (optionally) an
//! HTTP collaborator, and exposes:
//!
//! - [`list`](ResourceCollection::list) — one GET, returning a
//!   [`FetchedCollection`] of hydrated instances with lazy pagination
//! - [`total`](ResourceCollection::total) — one minimal GET for the
//!   server-side count
//! - [`get`](ResourceCollection::get) — a hollow instance handle, **no I/O**
//! - [`create`](ResourceCollection::create) — one POST, returning a hydrated
//!   instance
//! - [`subresource`](ResourceCollection::subresource) — the polymorphic
//!   accessor over nested resources: a memoized child collection, or a
//!   transient single-item context when an identifier is given
//!
//! Building handles never touches the network; only `list`, `total`,
//! `create`, and deferred instance hydration do.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

use crate::clients::Transport;
use crate::rest::errors::ResourceError;
use crate::rest::instance::InstanceResource;
use crate::rest::naming;
use crate::rest::page::Page;
use crate::rest::path::ResourcePath;
use crate::rest::registry::{CollectionDef, InstanceDef, TypeRegistry};
use crate::rest::response::{FetchedCollection, PageMetadata};

pub(crate) fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Result of a named sub-resource accessor.
///
/// One accessor, two shapes: no identifier yields the whole nested
/// collection, an identifier yields a single-item context. Neither performs
/// I/O.
#[derive(Debug)]
pub enum Subresource {
    /// The nested collection (memoized on the parent handle).
    Collection(Arc<ResourceCollection>),
    /// A single-item context (fresh on every call).
    Context(InstanceResource),
}

impl Subresource {
    /// Returns the nested collection, if that is what the accessor produced.
    #[must_use]
    pub fn into_collection(self) -> Option<Arc<ResourceCollection>> {
        match self {
            Self::Collection(collection) => Some(collection),
            Self::Context(_) => None,
        }
    }

    /// Returns the single-item context, if that is what the accessor produced.
    #[must_use]
    pub fn into_context(self) -> Option<InstanceResource> {
        match self {
            Self::Collection(_) => None,
            Self::Context(context) => Some(context),
        }
    }
}

/// Shared implementation of the sub-resource accessor for collections and
/// instances: same lookup, same memo discipline, different child tables.
pub(crate) struct ChildAccess<'a> {
    pub children: &'static [&'static CollectionDef],
    pub namespace: &'static str,
    pub registry: &'a Arc<TypeRegistry>,
    pub base: &'a ResourcePath,
    pub client: Option<&'a Arc<dyn Transport>>,
    pub memo: &'a Mutex<HashMap<String, Arc<ResourceCollection>>>,
}

impl ChildAccess<'_> {
    pub(crate) fn access(
        &self,
        name: &str,
        id: Option<&str>,
    ) -> Result<Subresource, ResourceError> {
        let child = self
            .children
            .iter()
            .find(|child| child.key() == name)
            .ok_or_else(|| ResourceError::UnresolvedType {
                namespace: self.namespace.to_string(),
                name: naming::path_segment(name),
            })?;

        let segment = naming::path_segment(name);

        if let Some(id) = id {
            // A context is scoped by its arguments, so it is rebuilt on
            // every call rather than memoized.
            let instance = self.registry.resolve_collection(child)?;
            return Ok(Subresource::Context(InstanceResource::hollow(
                instance,
                Arc::clone(self.registry),
                self.base.join(&segment, Some(id)),
                self.client.cloned(),
            )));
        }

        let mut memo = lock_unpoisoned(self.memo);
        if let Some(existing) = memo.get(name) {
            return Ok(Subresource::Collection(Arc::clone(existing)));
        }

        let collection = Arc::new(ResourceCollection::new(
            child,
            Arc::clone(self.registry),
            self.base.child(&segment),
            self.client.cloned(),
        )?);
        memo.insert(name.to_string(), Arc::clone(&collection));
        Ok(Subresource::Collection(collection))
    }
}

/// A handle on one collection endpoint of the resource tree.
///
/// # Thread Safety
///
/// `ResourceCollection` is `Send + Sync`; child memoization is guarded, so a
/// handle shared across tasks hands out the same child collection to all of
/// them.
#[derive(Debug)]
pub struct ResourceCollection {
    def: &'static CollectionDef,
    instance: &'static InstanceDef,
    registry: Arc<TypeRegistry>,
    path: ResourcePath,
    /// Set when this collection continues a pagination cursor; `list` then
    /// requests this URI verbatim with absolute-path semantics.
    page_uri: Option<String>,
    client: Option<Arc<dyn Transport>>,
    key: String,
    children: Mutex<HashMap<String, Arc<ResourceCollection>>>,
}

impl ResourceCollection {
    /// Builds a collection handle bound to a path and collaborator.
    ///
    /// Resolves the collection's instance type once, up front.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnresolvedType`] if the instance type is not
    /// registered (a generation defect; [`TypeRegistry::new`] catches this
    /// earlier for descriptor trees it was validated against).
    pub fn new(
        def: &'static CollectionDef,
        registry: Arc<TypeRegistry>,
        path: ResourcePath,
        client: Option<Arc<dyn Transport>>,
    ) -> Result<Self, ResourceError> {
        let instance = registry.resolve_collection(def)?;
        Ok(Self {
            def,
            instance,
            registry,
            path,
            page_uri: None,
            client,
            key: def.key(),
            children: Mutex::new(HashMap::new()),
        })
    }

    /// Builds the continuation collection for a server-supplied page URI.
    ///
    /// Items listed through it are addressed under the URI's path (query
    /// string and format suffix stripped). The full sub-resource surface
    /// remains available.
    pub(crate) fn continuation(
        def: &'static CollectionDef,
        registry: Arc<TypeRegistry>,
        uri: &str,
        client: Option<Arc<dyn Transport>>,
    ) -> Result<Self, ResourceError> {
        let mut collection = Self::new(def, registry, ResourcePath::from_page_uri(uri), client)?;
        collection.page_uri = Some(uri.to_string());
        Ok(collection)
    }

    /// Returns the path this collection is bound to.
    #[must_use]
    pub const fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Returns the collection type name (e.g., `"Domains"`).
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.def.name
    }

    /// Fetches one page of the collection.
    ///
    /// Issues exactly one GET with `params` as query parameters. Each raw
    /// item becomes a hydrated [`InstanceResource`] addressed at
    /// `path/{item[id_field]}`; the page's `total` and `next_page` come from
    /// the envelope of this very response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NoClient`] if no collaborator is bound,
    /// [`ResourceError::Envelope`] if the body violates the envelope
    /// contract, or the transport error of the GET.
    pub async fn list(
        &self,
        params: Option<HashMap<String, String>>,
    ) -> Result<FetchedCollection, ResourceError> {
        let client = self
            .client
            .as_ref()
            .ok_or(ResourceError::NoClient { operation: "list" })?;

        let (request_path, absolute) = self.request_path();
        tracing::debug!(path = %request_path, kind = self.def.name, "listing collection");
        let envelope = client.get(&request_path, params.as_ref(), absolute).await?;

        let metadata = PageMetadata::from_envelope(&envelope.body, &request_path)?;

        let items = envelope
            .body
            .get(&self.key)
            .and_then(Value::as_array)
            .ok_or_else(|| ResourceError::Envelope {
                field: self.key.clone(),
                path: request_path.clone(),
            })?;

        let page = Page::new(
            self.path.clone(),
            self.instance,
            Arc::clone(&self.registry),
            Arc::clone(client),
        );

        let mut instances = Vec::with_capacity(items.len());
        for item in items {
            instances.push(page.build_instance(item)?);
        }

        Ok(FetchedCollection::new(
            instances,
            metadata,
            self.def,
            Arc::clone(&self.registry),
            self.client.clone(),
        ))
    }

    /// Asks the server for the total number of items in the collection.
    ///
    /// Issues one GET with a page size of 1 to minimize data over the wire
    /// while still obtaining the count. Don't use this if you are going to
    /// call [`list`](Self::list) anyway — the fetched page carries
    /// [`total`](FetchedCollection::total) for free.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NoClient`] if no collaborator is bound,
    /// [`ResourceError::Envelope`] if the body has no integer `total`, or
    /// the transport error of the GET.
    pub async fn total(&self) -> Result<u64, ResourceError> {
        let client = self
            .client
            .as_ref()
            .ok_or(ResourceError::NoClient { operation: "total" })?;

        let mut params = HashMap::new();
        params.insert("PageSize".to_string(), "1".to_string());

        let (request_path, absolute) = self.request_path();
        let envelope = client.get(&request_path, Some(&params), absolute).await?;

        envelope
            .body
            .get("total")
            .and_then(Value::as_u64)
            .ok_or_else(|| ResourceError::Envelope {
                field: "total".to_string(),
                path: request_path,
            })
    }

    /// Returns a hollow instance addressed at `path/{id}`.
    ///
    /// **No I/O happens here** — building a handle never fails on network
    /// grounds. The HTTP request (and any not-found) happens when a property
    /// of the returned instance is first accessed.
    #[must_use]
    pub fn get(&self, id: &str) -> InstanceResource {
        InstanceResource::hollow(
            self.instance,
            Arc::clone(&self.registry),
            self.path.child(id),
            self.client.clone(),
        )
    }

    /// Creates a new item in the collection.
    ///
    /// Issues one POST; the response envelope is the new item's property
    /// map, and the returned instance is hydrated from it and addressed by
    /// its identifier field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NoClient`] if no collaborator is bound,
    /// [`ResourceError::Envelope`] if the response carries no usable
    /// identifier, or the transport error of the POST.
    pub async fn create(&self, params: &Value) -> Result<InstanceResource, ResourceError> {
        let client = self.client.as_ref().ok_or(ResourceError::NoClient {
            operation: "create",
        })?;

        let path = self.path.to_string();
        tracing::debug!(%path, kind = self.def.name, "creating resource");
        let envelope = client.post(&path, params).await?;

        let page = Page::new(
            self.path.clone(),
            self.instance,
            Arc::clone(&self.registry),
            Arc::clone(client),
        );
        page.build_instance(&envelope.body)
    }

    /// Accesses a named nested resource.
    ///
    /// With no identifier, returns the child collection scoped under this
    /// collection's path — constructed once per parent and cached
    /// thereafter, so repeated calls yield the identical handle. With an
    /// identifier, returns a fresh single-item context at
    /// `path/{segment}/{id}`; contexts are never memoized since their
    /// arguments vary.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnresolvedType`] if this collection has no
    /// sub-resource with the given accessor name.
    pub fn subresource(&self, name: &str, id: Option<&str>) -> Result<Subresource, ResourceError> {
        ChildAccess {
            children: self.def.children,
            namespace: self.def.namespace,
            registry: &self.registry,
            base: &self.path,
            client: self.client.as_ref(),
            memo: &self.children,
        }
        .access(name, id)
    }

    fn request_path(&self) -> (String, bool) {
        self.page_uri.as_ref().map_or_else(
            || (self.path.to_string(), false),
            |uri| (uri.clone(), true),
        )
    }
}

// Verify ResourceCollection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceCollection>();
};
