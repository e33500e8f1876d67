//! Integration endpoint tests.
//!
//! # Invariants
//! - An empty search term omits the `search` query parameter entirely.

mod common;

use common::*;
use sentinel_client::{CreateIntegrationParams, IntegrationType};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};

#[tokio::test]
async fn test_list_integrations_without_search() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/integrations"))
        .and(query_param_is_missing("search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("integrations/list.json")),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let all = endpoints::list_integrations(&client, &mock_server.uri(), None, None)
        .await
        .unwrap();
    let empty_term = endpoints::list_integrations(&client, &mock_server.uri(), Some(""), None)
        .await
        .unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(empty_term.len(), 2);
    assert_eq!(all[1].kind, IntegrationType::Discord);
}

#[tokio::test]
async fn test_list_integrations_with_search() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/integrations"))
        .and(query_param("search", "ops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 7,
                "name": "ops",
                "url": "https://hooks.slack.com/services/T000/B000/XXX",
                "type": "SLACK",
                "created_at": 1,
                "updated_at": 1
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let found = endpoints::list_integrations(&client, &mock_server.uri(), Some("ops"), None)
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "7");
}

#[tokio::test]
async fn test_create_integration() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/integrations"))
        .and(body_json(json!({
            "name": "on-call",
            "url": "https://discord.com/api/webhooks/1/abc",
            "type": "DISCORD"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "integration created",
            "data": {
                "id": 8,
                "name": "on-call",
                "url": "https://discord.com/api/webhooks/1/abc",
                "type": "DISCORD",
                "created_at": 2,
                "updated_at": 2
            }
        })))
        .mount(&mock_server)
        .await;

    let params = CreateIntegrationParams {
        name: "on-call".into(),
        url: "https://discord.com/api/webhooks/1/abc".into(),
        kind: IntegrationType::Discord,
    };

    let client = Client::new();
    let created = endpoints::create_integration(&client, &mock_server.uri(), &params, None)
        .await
        .unwrap();

    assert_eq!(created.id, "8");
}
