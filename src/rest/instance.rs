//! Addressed instance resources with lazy field hydration.
//!
//! An [`InstanceResource`] represents one addressed item of the resource
//! tree. It is constructible in two states:
//!
//! - **hollow** — path and client only. Built by
//!   [`ResourceCollection::get`](crate::rest::ResourceCollection::get) and by
//!   sub-resource context accessors, with **no network call**. The first
//!   property access performs exactly one GET to the instance's own path.
//!   A not-found for a bogus identifier therefore surfaces at that later
//!   point, not at `get` time.
//! - **hydrated** — properties supplied directly from a list or create
//!   response; no further fetch happens until [`refresh`] is called.
//!
//! Hydration state lives behind an async mutex so a handle shared across
//! tasks still issues exactly one fetch.
//!
//! [`refresh`]: InstanceResource::refresh

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::clients::Transport;
use crate::rest::collection::{ChildAccess, ResourceCollection, Subresource};
use crate::rest::errors::ResourceError;
use crate::rest::path::ResourcePath;
use crate::rest::registry::{InstanceDef, TypeRegistry};

/// The property map of a hydrated instance.
pub type Properties = serde_json::Map<String, Value>;

/// One addressed item of the resource tree.
///
/// # Thread Safety
///
/// `InstanceResource` is `Send + Sync`. First-access hydration and child
/// memoization are internally guarded, so sharing a handle across tasks is
/// safe; a shared hollow handle still fetches its properties exactly once.
#[derive(Debug)]
pub struct InstanceResource {
    def: &'static InstanceDef,
    registry: Arc<TypeRegistry>,
    path: ResourcePath,
    client: Option<Arc<dyn Transport>>,
    properties: tokio::sync::Mutex<Option<Properties>>,
    children: Mutex<HashMap<String, Arc<ResourceCollection>>>,
}

impl InstanceResource {
    /// Builds a hollow instance: path and client only, no properties, no I/O.
    pub(crate) fn hollow(
        def: &'static InstanceDef,
        registry: Arc<TypeRegistry>,
        path: ResourcePath,
        client: Option<Arc<dyn Transport>>,
    ) -> Self {
        Self {
            def,
            registry,
            path,
            client,
            properties: tokio::sync::Mutex::new(None),
            children: Mutex::new(HashMap::new()),
        }
    }

    /// Builds a hydrated instance from an already-fetched property map.
    pub(crate) fn hydrated(
        def: &'static InstanceDef,
        registry: Arc<TypeRegistry>,
        path: ResourcePath,
        client: Option<Arc<dyn Transport>>,
        properties: Properties,
    ) -> Self {
        Self {
            def,
            registry,
            path,
            client,
            properties: tokio::sync::Mutex::new(Some(properties)),
            children: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the path this instance is addressed at.
    #[must_use]
    pub const fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Returns the instance identifier (the final path segment).
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.path.last()
    }

    /// Returns the instance type name (e.g., `"Domain"`).
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.def.name
    }

    /// Returns `true` if properties have been fetched or supplied.
    pub async fn is_hydrated(&self) -> bool {
        self.properties.lock().await.is_some()
    }

    /// Returns one property value, hydrating the instance first if needed.
    ///
    /// The first call on a hollow instance performs exactly one GET to this
    /// instance's own path; later calls read the cached map. A failed fetch
    /// leaves the instance hollow so the next access retries.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NoClient`] if no collaborator is bound, or
    /// propagates the transport error from the deferred fetch (this is where
    /// a not-found for a nonexistent identifier appears).
    pub async fn property(&self, name: &str) -> Result<Option<Value>, ResourceError> {
        let mut guard = self.properties.lock().await;
        if guard.is_none() {
            *guard = Some(self.fetch().await?);
        }
        Ok(guard.as_ref().and_then(|props| props.get(name)).cloned())
    }

    /// Returns a copy of the full property map, hydrating first if needed.
    ///
    /// # Errors
    ///
    /// Same as [`property`](Self::property).
    pub async fn properties(&self) -> Result<Properties, ResourceError> {
        let mut guard = self.properties.lock().await;
        if guard.is_none() {
            *guard = Some(self.fetch().await?);
        }
        Ok(guard.as_ref().cloned().unwrap_or_default())
    }

    /// Re-fetches the property map, replacing any cached state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NoClient`] if no collaborator is bound, or
    /// the transport error from the fetch; cached state is kept on failure.
    pub async fn refresh(&self) -> Result<(), ResourceError> {
        let mut guard = self.properties.lock().await;
        *guard = Some(self.fetch().await?);
        Ok(())
    }

    /// Accesses a nested sub-resource of this instance.
    ///
    /// With no identifier, returns the memoized child collection scoped
    /// under this instance's path (constructed once, cached for the life of
    /// this handle). With an identifier, returns a fresh single-item context
    /// — never memoized, never performing I/O.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnresolvedType`] if this instance type has
    /// no sub-resource with the given accessor name.
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

    async fn fetch(&self) -> Result<Properties, ResourceError> {
        let client = self.client.as_ref().ok_or(ResourceError::NoClient {
            operation: "fetch properties",
        })?;

        let path = self.path.to_string();
        tracing::debug!(%path, kind = self.def.name, "hydrating instance");
        let envelope = client.get(&path, None, false).await?;

        match envelope.body {
            Value::Object(map) => Ok(map),
            _ => Err(ResourceError::Envelope {
                field: "body".to_string(),
                path,
            }),
        }
    }
}

// Verify InstanceResource is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InstanceResource>();
};
