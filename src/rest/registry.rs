//! Static type registry for resource resolution.
//!
//! Collections name their instance types abstractly; the registry is the
//! init-time mapping from `{namespace, instance name}` to a static
//! [`InstanceDef`]. The whole descriptor tree is validated when the registry
//! is built, so an unresolved type is a startup failure instead of a
//! surprise on first use.
//!
//! Descriptors are the "generated" surface of the crate: per-resource code
//! (see [`resources`](crate::rest::resources)) declares [`CollectionDef`]
//! and [`InstanceDef`] statics and hands them to [`TypeRegistry::new`].
//!
//! # Example
//!
//! ```rust
//! use canopy_rest::rest::{CollectionDef, InstanceDef, TypeRegistry};
//!
//! static WIDGET: InstanceDef = InstanceDef {
//!     namespace: "demo",
//!     name: "Widget",
//!     id_field: "sid",
//!     children: &[],
//! };
//!
//! static WIDGETS: CollectionDef = CollectionDef {
//!     namespace: "demo",
//!     name: "Widgets",
//!     instance_name: None,
//!     children: &[],
//! };
//!
//! let registry = TypeRegistry::new(&[&WIDGET], &[&WIDGETS]).unwrap();
//! let resolved = registry.resolve("demo", "Widget").unwrap();
//! assert_eq!(resolved.id_field, "sid");
//! ```

use std::collections::{HashMap, HashSet};

use crate::rest::errors::ResourceError;
use crate::rest::naming;

/// Describes one collection endpoint of the resource tree.
///
/// Declared as statics by generated per-resource code. The collection's
/// envelope key and accessor name derive from `name`; its instance type
/// name derives from `name` too unless `instance_name` overrides it.
#[derive(Debug)]
pub struct CollectionDef {
    /// Dotted namespace of the module the collection belongs to
    /// (e.g., `"api.v2010.account"`).
    pub namespace: &'static str,
    /// Collection type name (e.g., `"Domains"`).
    pub name: &'static str,
    /// Override for the instance type name when the derivation rules do not
    /// apply (e.g., `Some("SipInstance")` for `"Sip"`).
    pub instance_name: Option<&'static str>,
    /// Nested sub-resources reachable from this collection.
    pub children: &'static [&'static CollectionDef],
}

impl CollectionDef {
    /// Returns the name of this collection's instance type.
    #[must_use]
    pub fn instance_type_name(&self) -> String {
        self.instance_name
            .map_or_else(|| naming::instance_name(self.name), ToString::to_string)
    }

    /// Returns the envelope key (and accessor name) for this collection.
    #[must_use]
    pub fn key(&self) -> String {
        naming::collection_key(self.name)
    }
}

/// Describes the instance type of one resource kind.
#[derive(Debug)]
pub struct InstanceDef {
    /// Dotted namespace, matching the sibling collection's.
    pub namespace: &'static str,
    /// Instance type name (e.g., `"Domain"`).
    pub name: &'static str,
    /// Name of the payload field carrying the instance identifier.
    pub id_field: &'static str,
    /// Nested sub-resources reachable from an addressed instance.
    pub children: &'static [&'static CollectionDef],
}

/// Init-time mapping from `{namespace, instance name}` to [`InstanceDef`].
///
/// Resolution depends only on its arguments, never on request data, so a
/// handle resolves its instance type once at construction and caches the
/// result for its lifetime.
#[derive(Debug)]
pub struct TypeRegistry {
    instances: HashMap<(String, String), &'static InstanceDef>,
}

impl TypeRegistry {
    /// Builds a registry and validates the whole descriptor tree.
    ///
    /// Every collection reachable from `roots` — through collection children
    /// and through the children of each resolved instance — must resolve to
    /// a registered instance type.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnresolvedType`] naming the first collection
    /// whose instance type is not registered. This indicates a generation
    /// defect in the descriptor tables, not a runtime condition.
    pub fn new(
        instances: &[&'static InstanceDef],
        roots: &[&'static CollectionDef],
    ) -> Result<Self, ResourceError> {
        let mut map = HashMap::new();
        for instance in instances {
            map.insert(
                (instance.namespace.to_string(), instance.name.to_string()),
                *instance,
            );
        }

        let registry = Self { instances: map };
        registry.validate(roots)?;
        Ok(registry)
    }

    /// Resolves the instance type with the given name in a namespace.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnresolvedType`] if no such instance type is
    /// registered.
    pub fn resolve(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<&'static InstanceDef, ResourceError> {
        self.instances
            .get(&(namespace.to_string(), name.to_string()))
            .copied()
            .ok_or_else(|| ResourceError::UnresolvedType {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }

    /// Resolves the instance type a collection's items deserialize into.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnresolvedType`] if the collection's
    /// instance type is not registered.
    pub fn resolve_collection(
        &self,
        collection: &CollectionDef,
    ) -> Result<&'static InstanceDef, ResourceError> {
        self.resolve(collection.namespace, &collection.instance_type_name())
    }

    fn validate(&self, roots: &[&'static CollectionDef]) -> Result<(), ResourceError> {
        let mut pending: Vec<&'static CollectionDef> = roots.to_vec();
        let mut visited: HashSet<(&'static str, &'static str)> = HashSet::new();

        while let Some(collection) = pending.pop() {
            if !visited.insert((collection.namespace, collection.name)) {
                continue;
            }

            let instance = self.resolve_collection(collection)?;
            pending.extend(collection.children);
            pending.extend(instance.children);
        }

        Ok(())
    }
}
