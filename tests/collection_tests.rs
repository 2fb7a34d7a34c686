//! Integration tests for collection operations.
//!
//! These tests verify listing, counting, creation, and the no-I/O
//! addressing contract against a recording transport double.

mod common;

use std::collections::HashMap;
use std::sync::Arc;

use common::{accounts_with, domains_for_ac1, unbound_accounts, Call, MockTransport};

use canopy_rest::rest::ResourceError;
use serde_json::json;

// ============================================================================
// list()
// ============================================================================

#[tokio::test]
async fn test_list_hydrates_and_addresses_items() {
    let transport = Arc::new(MockTransport::new());
    transport.enqueue(
        200,
        json!({
            "domains": [
                {"sid": "DM1", "domain_name": "one.sip.example.com"},
                {"sid": "DM2", "domain_name": "two.sip.example.com"}
            ],
            "total": 2
        }),
    );

    let accounts = accounts_with(Arc::clone(&transport));
    let domains = domains_for_ac1(&accounts);

    let page = domains.list(None).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(
        page[0].path().to_string(),
        "/2010-04-01/Accounts/AC1/SIP/Domains/DM1"
    );
    assert_eq!(
        page[1].path().to_string(),
        "/2010-04-01/Accounts/AC1/SIP/Domains/DM2"
    );
    assert_eq!(page.total(), 2);
    assert!(!page.has_next_page());

    // Items come back hydrated: reading properties costs no extra request.
    assert_eq!(
        page[0].property("domain_name").await.unwrap(),
        Some(json!("one.sip.example.com"))
    );
    assert_eq!(transport.call_count(), 1);

    // next_page() on an exhausted collection is an empty page, not an error,
    // and issues no request.
    let next = page.next_page().await.unwrap();
    assert!(next.is_empty());
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_list_issues_one_get_against_collection_path() {
    let transport = Arc::new(MockTransport::new());
    transport.enqueue(200, json!({"accounts": [], "total": 0}));

    let accounts = accounts_with(Arc::clone(&transport));
    accounts.list(None).await.unwrap();

    assert_eq!(
        transport.calls(),
        vec![Call::Get {
            path: "/2010-04-01/Accounts".to_string(),
            query: None,
            absolute: false,
        }]
    );
}

#[tokio::test]
async fn test_list_passes_filter_params_as_query() {
    let transport = Arc::new(MockTransport::new());
    transport.enqueue(200, json!({"accounts": [], "total": 0}));

    let accounts = accounts_with(Arc::clone(&transport));
    let mut params = HashMap::new();
    params.insert("FriendlyName".to_string(), "test".to_string());
    accounts.list(Some(params.clone())).await.unwrap();

    assert_eq!(
        transport.calls(),
        vec![Call::Get {
            path: "/2010-04-01/Accounts".to_string(),
            query: Some(params),
            absolute: false,
        }]
    );
}

#[tokio::test]
async fn test_list_total_reflects_server_count_not_page_size() {
    let transport = Arc::new(MockTransport::new());
    transport.enqueue(
        200,
        json!({
            "accounts": [{"sid": "AC1"}],
            "total": 120,
            "next_page_uri": "/2010-04-01/Accounts?Page=1"
        }),
    );

    let accounts = accounts_with(Arc::clone(&transport));
    let page = accounts.list(None).await.unwrap();

    // The page holds 1 item; the server-reported total is attached verbatim.
    assert_eq!(page.len(), 1);
    assert_eq!(page.total(), 120);
}

#[tokio::test]
async fn test_list_without_client_is_a_precondition_error() {
    let accounts = unbound_accounts();
    let result = accounts.list(None).await;
    assert!(matches!(
        result,
        Err(ResourceError::NoClient { operation: "list" })
    ));
}

#[tokio::test]
async fn test_list_rejects_envelope_without_total() {
    let transport = Arc::new(MockTransport::new());
    transport.enqueue(200, json!({"accounts": []}));

    let accounts = accounts_with(transport);
    let result = accounts.list(None).await;
    assert!(matches!(
        result,
        Err(ResourceError::Envelope { ref field, .. }) if field == "total"
    ));
}

#[tokio::test]
async fn test_list_rejects_envelope_without_collection_key() {
    let transport = Arc::new(MockTransport::new());
    transport.enqueue(200, json!({"total": 0}));

    let accounts = accounts_with(transport);
    let result = accounts.list(None).await;
    assert!(matches!(
        result,
        Err(ResourceError::Envelope { ref field, .. }) if field == "accounts"
    ));
}

#[tokio::test]
async fn test_list_propagates_transport_errors_unchanged() {
    let transport = Arc::new(MockTransport::new());
    transport.enqueue(503, json!({"message": "unavailable"}));

    let accounts = accounts_with(transport);
    let result = accounts.list(None).await;
    match result {
        Err(ResourceError::Http(e)) => assert_eq!(e.status(), Some(503)),
        other => panic!("expected transport error, got {other:?}"),
    }
}

// ============================================================================
// total()
// ============================================================================

#[tokio::test]
async fn test_total_requests_minimal_page() {
    let transport = Arc::new(MockTransport::new());
    transport.enqueue(200, json!({"accounts": [{"sid": "AC1"}], "total": 42}));

    let accounts = accounts_with(Arc::clone(&transport));
    let total = accounts.total().await.unwrap();

    assert_eq!(total, 42);
    let mut expected_query = HashMap::new();
    expected_query.insert("PageSize".to_string(), "1".to_string());
    assert_eq!(
        transport.calls(),
        vec![Call::Get {
            path: "/2010-04-01/Accounts".to_string(),
            query: Some(expected_query),
            absolute: false,
        }]
    );
}

#[tokio::test]
async fn test_total_without_client_is_a_precondition_error() {
    let accounts = unbound_accounts();
    assert!(matches!(
        accounts.total().await,
        Err(ResourceError::NoClient { operation: "total" })
    ));
}

// ============================================================================
// get()
// ============================================================================

#[tokio::test]
async fn test_get_composes_path_with_no_network_call() {
    // Nothing queued: any request would panic the double.
    let transport = Arc::new(MockTransport::new());
    let accounts = accounts_with(Arc::clone(&transport));

    let account = accounts.get("AC404");
    assert_eq!(account.path().to_string(), "/2010-04-01/Accounts/AC404");
    assert_eq!(account.id(), Some("AC404"));
    assert!(!account.is_hydrated().await);
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_get_then_first_property_access_issues_one_get() {
    let transport = Arc::new(MockTransport::new());
    transport.enqueue(200, json!({"sid": "AC1", "friendly_name": "prod"}));

    let accounts = accounts_with(Arc::clone(&transport));
    let account = accounts.get("AC1");
    assert_eq!(transport.call_count(), 0);

    let name = account.property("friendly_name").await.unwrap();
    assert_eq!(name, Some(json!("prod")));
    assert_eq!(
        transport.calls(),
        vec![Call::Get {
            path: "/2010-04-01/Accounts/AC1".to_string(),
            query: None,
            absolute: false,
        }]
    );

    // Subsequent accesses reuse the hydrated state.
    let sid = account.property("sid").await.unwrap();
    assert_eq!(sid, Some(json!("AC1")));
    assert_eq!(transport.call_count(), 1);
}

// ============================================================================
// create()
// ============================================================================

#[tokio::test]
async fn test_create_posts_params_and_returns_hydrated_instance() {
    let transport = Arc::new(MockTransport::new());
    transport.enqueue(
        201,
        json!({"sid": "DM9", "domain_name": "nine.sip.example.com"}),
    );

    let accounts = accounts_with(Arc::clone(&transport));
    let domains = domains_for_ac1(&accounts);

    let params = json!({"domain_name": "nine.sip.example.com"});
    let created = domains.create(&params).await.unwrap();

    assert_eq!(
        created.path().to_string(),
        "/2010-04-01/Accounts/AC1/SIP/Domains/DM9"
    );
    assert!(created.is_hydrated().await);
    assert_eq!(
        transport.calls(),
        vec![Call::Post {
            path: "/2010-04-01/Accounts/AC1/SIP/Domains".to_string(),
            body: params,
        }]
    );
}

#[tokio::test]
async fn test_create_without_client_is_a_precondition_error() {
    let accounts = unbound_accounts();
    assert!(matches!(
        accounts.create(&json!({})).await,
        Err(ResourceError::NoClient { operation: "create" })
    ));
}

#[tokio::test]
async fn test_create_rejects_response_without_identifier() {
    let transport = Arc::new(MockTransport::new());
    transport.enqueue(201, json!({"domain_name": "x"}));

    let accounts = accounts_with(transport);
    let result = accounts.create(&json!({})).await;
    assert!(matches!(
        result,
        Err(ResourceError::Envelope { ref field, .. }) if field == "sid"
    ));
}
