//! Request log and traffic metrics endpoint tests.

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};

#[tokio::test]
async fn test_list_request_logs_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/requests"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("requests/page.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let page = endpoints::list_request_logs(&client, &mock_server.uri(), 2, 10, None)
        .await
        .unwrap();

    assert_eq!(page.logs.len(), 1);
    assert_eq!(page.logs[0].service_name, "billing");
    assert_eq!(page.pagination.total_pages, 5);
    assert_eq!(page.pagination.page, 2);
    assert!(page.pagination.has_next);
}

#[tokio::test]
async fn test_list_request_logs_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "pagination": {
                "total_items": 0, "total_pages": 0, "page": 1, "per_page": 10,
                "has_next": false, "has_previous": false
            }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let page = endpoints::list_request_logs(&client, &mock_server.uri(), 1, 10, None)
        .await
        .unwrap();

    assert!(page.logs.is_empty());
    assert_eq!(page.pagination.total_pages, 0);
}

#[tokio::test]
async fn test_get_request_metrics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/requests/metrics"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("requests/metrics.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let metrics = endpoints::get_request_metrics(&client, &mock_server.uri(), None)
        .await
        .unwrap();

    assert_eq!(metrics.total_requests, 1200);
    assert_eq!(metrics.daily_traffic.len(), 2);
    assert_eq!(metrics.grouped_requests[0].failed, 12);
}
