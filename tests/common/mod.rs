//! Shared test helpers: a recording transport double and tree bootstrap.
#![allow(dead_code)] // not every test file uses every helper

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use canopy_rest::clients::{HttpError, HttpResponseError, ResponseEnvelope, Transport};
use canopy_rest::rest::resources::{self, api::v2010};
use canopy_rest::rest::{ResourceCollection, TypeRegistry};

/// One recorded transport invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get {
        path: String,
        query: Option<HashMap<String, String>>,
        absolute: bool,
    },
    Post {
        path: String,
        body: Value,
    },
}

/// A `Transport` double that records every invocation and replays queued
/// responses in order.
///
/// Queue nothing to assert that a code path performs zero I/O: any request
/// against an empty queue panics the test.
#[derive(Debug, Default)]
pub struct MockTransport {
    calls: Mutex<Vec<Call>>,
    responses: Mutex<VecDeque<(u16, Value)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response; non-2xx codes replay as `HttpError::Response`.
    pub fn enqueue(&self, code: u16, body: Value) {
        self.responses.lock().unwrap().push_back((code, body));
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn reply(&self, call: Call) -> Result<ResponseEnvelope, HttpError> {
        let (code, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {call:?}"));
        self.calls.lock().unwrap().push(call);

        if (200..300).contains(&code) {
            Ok(ResponseEnvelope::new(code, HashMap::new(), body))
        } else {
            Err(HttpError::Response(HttpResponseError {
                code,
                message: body.to_string(),
                error_reference: None,
            }))
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
        absolute: bool,
    ) -> Result<ResponseEnvelope, HttpError> {
        self.reply(Call::Get {
            path: path.to_string(),
            query: query.cloned(),
            absolute,
        })
    }

    async fn post(&self, path: &str, body: &Value) -> Result<ResponseEnvelope, HttpError> {
        self.reply(Call::Post {
            path: path.to_string(),
            body: body.clone(),
        })
    }
}

/// Builds the generated registry.
pub fn registry() -> Arc<TypeRegistry> {
    Arc::new(resources::registry().unwrap())
}

/// Builds the accounts root bound to the given transport.
pub fn accounts_with(transport: Arc<MockTransport>) -> Arc<ResourceCollection> {
    v2010::accounts(registry(), Some(transport)).unwrap()
}

/// Builds an accounts root with no client bound.
pub fn unbound_accounts() -> Arc<ResourceCollection> {
    v2010::accounts(registry(), None).unwrap()
}

/// Descends to `/2010-04-01/Accounts/AC1/SIP/Domains` through the
/// sub-resource accessors.
pub fn domains_for_ac1(accounts: &ResourceCollection) -> Arc<ResourceCollection> {
    let account = accounts.get("AC1");
    let sip = account
        .subresource("sip", None)
        .unwrap()
        .into_collection()
        .unwrap();
    sip.subresource("domains", None)
        .unwrap()
        .into_collection()
        .unwrap()
}
