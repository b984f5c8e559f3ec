//! HTTP-level tests for `VisualizationClient` against a mock service.

use api::{ApiError, ClientConfig, VisualizationClient, VisualizationService};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(mock_server: &MockServer) -> VisualizationClient {
    let config = ClientConfig {
        endpoint: format!("{}/visualization/visualize", mock_server.uri()),
        request_timeout_secs: Some(5),
        ..ClientConfig::default()
    };
    VisualizationClient::new(&config).expect("Failed to create test client")
}

#[tokio::test]
async fn posts_query_and_decodes_response() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/visualization/visualize"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "query": "revenue by region" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Here is your chart",
            "data": [{ "type": "bar" }],
            "html_snippet": "<div class=\"plotly-graph-div\" id=\"p1\"></div>",
            "success": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let response = client.visualize("revenue by region").await.unwrap();

    assert!(response.success);
    assert_eq!(response.message, "Here is your chart");
    assert_eq!(response.data.len(), 1);
    assert!(response.html_snippet.contains("plotly-graph-div"));
}

#[tokio::test]
async fn non_success_status_is_transport_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.visualize("anything").await.unwrap_err();

    assert!(matches!(err, ApiError::Status(500)));
    assert_eq!(err.to_string(), "HTTP error: 500");
}

#[tokio::test]
async fn success_false_is_returned_for_the_caller_to_judge() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "",
            "data": [],
            "html_snippet": "",
            "success": false,
            "error": "Query could not be answered"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let response = client.visualize("gibberish").await.unwrap();
    let err = response.into_result().unwrap_err();

    assert!(matches!(err, ApiError::Backend(Some(_))));
    assert_eq!(err.to_string(), "Query could not be answered");
}

#[tokio::test]
async fn bare_failure_body_keeps_service_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "html_snippet": null,
            "success": false,
            "error": "table not found"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let response = client.visualize("sales by store").await.unwrap();
    let err = response.into_result().unwrap_err();

    assert_eq!(err.to_string(), "table not found");
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.visualize("anything").await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_http_error() {
    let config = ClientConfig {
        endpoint: "http://127.0.0.1:1/visualize".to_string(),
        request_timeout_secs: Some(2),
        ..ClientConfig::default()
    };
    let client = VisualizationClient::new(&config).unwrap();
    let err = client.visualize("anything").await.unwrap_err();

    assert!(matches!(err, ApiError::Http(_)));
    assert!(err.to_string().starts_with("Request failed"));
}
