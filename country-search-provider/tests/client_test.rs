//! CountryClient 集成测试（本地桩服务）

mod common;

use std::time::Duration;

use common::{
    StubResponse, client_for, client_with_timeout, serve_once, serve_silently,
    unreachable_base_url,
};
use country_search_provider::{ClientError, CountrySource};

const CANADA: &str = r#"[{
    "name": {"common": "Canada", "official": "Canada"},
    "capital": ["Ottawa"],
    "population": 38005238,
    "flags": ["https://flagcdn.com/ca.svg"],
    "languages": {"eng": "English", "fra": "French"}
}]"#;

#[tokio::test]
async fn search_returns_parsed_records() {
    let (base_url, server) = require_ok!(serve_once(StubResponse::json(CANADA)).await);
    let client = client_for(&base_url);

    let records = require_ok!(client.search("Canada").await);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].common_name, "Canada");
    assert_eq!(records[0].capital, vec!["Ottawa".to_string()]);
    assert_eq!(records[0].population, 38_005_238);

    let request_line = require_ok!(server.await);
    assert_eq!(
        request_line,
        "GET /v3/name/Canada?fields=name,capital,population,flags,languages HTTP/1.1"
    );
}

#[tokio::test]
async fn search_sends_fragment_percent_encoded() {
    let (base_url, server) = require_ok!(serve_once(StubResponse::json("[]")).await);
    let client = client_for(&base_url);

    let records = require_ok!(client.search("new zealand").await);
    assert!(records.is_empty());

    let request_line = require_ok!(server.await);
    assert!(
        request_line.starts_with("GET /v3/name/new%20zealand?"),
        "unexpected request line: {request_line}"
    );
}

#[tokio::test]
async fn not_found_is_http_status_error() {
    let (base_url, _server) =
        require_ok!(serve_once(StubResponse::status(404, "Not Found")).await);
    let client = client_for(&base_url);

    let result = client.search("Atlantis").await;
    assert_eq!(result, Err(ClientError::HttpStatus { status: 404 }));
}

#[tokio::test]
async fn server_error_is_http_status_error() {
    let (base_url, _server) =
        require_ok!(serve_once(StubResponse::status(503, "Service Unavailable")).await);
    let client = client_for(&base_url);

    let result = client.search("France").await;
    assert_eq!(result, Err(ClientError::HttpStatus { status: 503 }));
}

#[tokio::test]
async fn malformed_body_is_fetch_error() {
    let (base_url, _server) =
        require_ok!(serve_once(StubResponse::json("<html>maintenance</html>")).await);
    let client = client_for(&base_url);

    let result = client.search("France").await;
    assert!(
        matches!(result, Err(ClientError::Fetch { .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn connection_refused_is_fetch_error() {
    let base_url = require_ok!(unreachable_base_url().await);
    let client = client_for(&base_url);

    let result = client.search("France").await;
    assert!(
        matches!(result, Err(ClientError::Fetch { .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn stalled_server_times_out_as_fetch_error() {
    let (base_url, server) = require_ok!(serve_silently(Duration::from_secs(5)).await);
    let client = client_with_timeout(&base_url, Some(Duration::from_millis(200)));

    let result = client.search("Canada").await;
    assert!(
        matches!(result, Err(ClientError::Fetch { .. })),
        "expected Fetch, got {result:?}"
    );

    server.abort();
}
