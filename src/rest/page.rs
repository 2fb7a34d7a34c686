//! Adapter from one raw list response to addressed instances.
//!
//! A [`Page`] is a short-lived adapter between a single HTTP response and a
//! [`FetchedCollection`](crate::rest::FetchedCollection). It holds nothing
//! beyond the path-scoping values captured when the listing collection built
//! it, and uses them to address each item it deserializes.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::Transport;
use crate::rest::errors::ResourceError;
use crate::rest::instance::InstanceResource;
use crate::rest::path::ResourcePath;
use crate::rest::registry::{InstanceDef, TypeRegistry};

/// Builds addressed, hydrated instances from the raw items of one response.
#[derive(Debug)]
pub struct Page {
    base: ResourcePath,
    instance: &'static InstanceDef,
    registry: Arc<TypeRegistry>,
    client: Arc<dyn Transport>,
}

impl Page {
    pub(crate) fn new(
        base: ResourcePath,
        instance: &'static InstanceDef,
        registry: Arc<TypeRegistry>,
        client: Arc<dyn Transport>,
    ) -> Self {
        Self {
            base,
            instance,
            registry,
            client,
        }
    }

    /// Builds a hydrated instance from one raw item payload.
    ///
    /// The instance is addressed at `base/{payload[id_field]}` and carries
    /// the payload as its property map, so no further fetch is needed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Envelope`] if the payload is not an object
    /// or its identifier field is missing or unusable.
    pub fn build_instance(&self, payload: &Value) -> Result<InstanceResource, ResourceError> {
        let properties = payload
            .as_object()
            .ok_or_else(|| ResourceError::Envelope {
                field: self.instance.id_field.to_string(),
                path: self.base.to_string(),
            })?;

        let id = self.identifier(properties)?;

        Ok(InstanceResource::hydrated(
            self.instance,
            Arc::clone(&self.registry),
            self.base.child(&id),
            Some(Arc::clone(&self.client)),
            properties.clone(),
        ))
    }

    fn identifier(
        &self,
        properties: &serde_json::Map<String, Value>,
    ) -> Result<String, ResourceError> {
        match properties.get(self.instance.id_field) {
            Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
            Some(Value::Number(id)) => Ok(id.to_string()),
            _ => Err(ResourceError::Envelope {
                field: self.instance.id_field.to_string(),
                path: self.base.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::registry::{CollectionDef, InstanceDef};
    use serde_json::json;
    use std::collections::HashMap;

    use crate::clients::{HttpError, ResponseEnvelope};
    use async_trait::async_trait;

    #[derive(Debug)]
    struct NullTransport;

    #[async_trait]
    impl Transport for NullTransport {
        async fn get(
            &self,
            _path: &str,
            _query: Option<&HashMap<String, String>>,
            _absolute: bool,
        ) -> Result<ResponseEnvelope, HttpError> {
            unreachable!("page tests never perform I/O")
        }

        async fn post(
            &self,
            _path: &str,
            _body: &Value,
        ) -> Result<ResponseEnvelope, HttpError> {
            unreachable!("page tests never perform I/O")
        }
    }

    static THING: InstanceDef = InstanceDef {
        namespace: "demo",
        name: "Thing",
        id_field: "sid",
        children: &[],
    };

    static THINGS: CollectionDef = CollectionDef {
        namespace: "demo",
        name: "Things",
        instance_name: None,
        children: &[],
    };

    fn test_page() -> Page {
        let registry = TypeRegistry::new(&[&THING], &[&THINGS]).unwrap();
        Page::new(
            ResourcePath::parse("/demo/Things"),
            &THING,
            Arc::new(registry),
            Arc::new(NullTransport),
        )
    }

    #[test]
    fn test_build_instance_addresses_by_id_field() {
        let page = test_page();
        let instance = page.build_instance(&json!({"sid": "TH1", "label": "one"})).unwrap();

        assert_eq!(instance.path().to_string(), "/demo/Things/TH1");
        tokio_test::block_on(async {
            assert!(instance.is_hydrated().await);
            assert_eq!(
                instance.property("label").await.unwrap(),
                Some(json!("one"))
            );
        });
    }

    #[test]
    fn test_build_instance_accepts_numeric_ids() {
        let page = test_page();
        let instance = page.build_instance(&json!({"sid": 42})).unwrap();
        assert_eq!(instance.path().to_string(), "/demo/Things/42");
    }

    #[test]
    fn test_build_instance_rejects_missing_id() {
        let page = test_page();
        let result = page.build_instance(&json!({"label": "anonymous"}));
        assert!(matches!(
            result,
            Err(ResourceError::Envelope { ref field, .. }) if field == "sid"
        ));
    }

    #[test]
    fn test_build_instance_rejects_non_object_payload() {
        let page = test_page();
        let result = page.build_instance(&json!("not an object"));
        assert!(matches!(result, Err(ResourceError::Envelope { .. })));
    }
}
