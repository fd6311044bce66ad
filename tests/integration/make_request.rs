//! Integration tests for the generic request path

use crate::integration::mock_server::{MockServerFixture, TOKEN};
use graph_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_disabled_client_makes_no_request() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_unreachable("me").await;

    let client = fixture.api(false).client(TOKEN).unwrap();
    let resp = client.make_request("me", None).await.unwrap();

    assert!(resp.is_disabled());
    assert_eq!(resp.to_json(), json!({}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_success_body_is_parsed() {
    let mut fixture = MockServerFixture::new().await;
    let body = json!({
        "id": "1234567",
        "first_name": "Homer",
        "last_name": "Simpson",
        "bio": "A user bio",
        "email": "homer@example.com"
    });
    let mock = fixture.mock_json("test", 200, &body.to_string()).await;

    let resp = fixture.client().make_request("test", None).await.unwrap();
    let envelope = resp.envelope().expect("request should have been sent");

    assert_eq!(envelope.status_code, 200);
    assert_eq!(envelope.body, body);
    assert_eq!(envelope.original_body, body.to_string());
    assert!(envelope.url.ends_with("/v2.5/test"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_400_resolves_as_data() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_json("test", 400, "{}").await;

    let resp = fixture.client().make_request("test", None).await.unwrap();

    assert_eq!(resp.status_code(), Some(400));
    assert!(resp.body().unwrap().is_object());
    assert!(!resp.envelope().unwrap().is_success());
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_raw() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("GET", "/v2.5/test")
        .with_status(503)
        .with_header("content-type", "text/html")
        .with_body("<h1>Service Unavailable</h1>")
        .create_async()
        .await;

    let resp = fixture.client().make_request("test", None).await.unwrap();
    let envelope = resp.into_envelope().unwrap();

    assert_eq!(envelope.status_code, 503);
    assert_eq!(envelope.body, json!("<h1>Service Unavailable</h1>"));
    assert_eq!(envelope.header("content-type"), Some("text/html"));
}

#[tokio::test]
async fn test_query_pairs_are_appended() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json_with_query(
            "me/picture",
            vec![("redirect", "0"), ("type", "large")],
            200,
            r#"{"data":{"url":"https://example.com/p.jpg"}}"#,
        )
        .await;

    let resp = fixture
        .client()
        .make_request("me/picture?redirect=0", Some(&[("type", "large")]))
        .await
        .unwrap();

    assert_eq!(resp.status_code(), Some(200));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_configured_version_is_used() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/v9.0/me")
        .with_status(200)
        .with_body(r#"{"id":"1"}"#)
        .create_async()
        .await;

    let client = GraphApi::builder()
        .base_url_override(&fixture.base_url)
        .api_version("v9.0")
        .enabled(true)
        .build()
        .unwrap()
        .client(TOKEN)
        .unwrap();
    let resp = client.make_request("me", None).await.unwrap();

    assert_eq!(resp.body(), Some(&json!({"id": "1"})));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_transport_failure_is_an_error() {
    // Nothing listens on port 1.
    let client = GraphApi::builder()
        .base_url_override("http://127.0.0.1:1")
        .enabled(true)
        .build()
        .unwrap()
        .client(TOKEN)
        .unwrap();

    let err = client.make_request("me", None).await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let mut fixture = MockServerFixture::new().await;
    let _me = fixture.mock_json("me", 200, r#"{"id":"1"}"#).await;
    let _friends = fixture
        .mock_json("me/friends", 200, r#"{"data":[]}"#)
        .await;

    let client = fixture.client();
    let other = client.clone();
    let (a, b) = tokio::join!(
        client.make_request("me", None),
        other.make_request("me/friends", None)
    );

    assert_eq!(a.unwrap().body(), Some(&json!({"id": "1"})));
    assert_eq!(b.unwrap().body(), Some(&json!({"data": []})));
}

#[tokio::test]
async fn test_invalid_utf8_body_is_replaced_lossily() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("GET", "/v2.5/test")
        .with_status(200)
        .with_header("content-type", "text/plain; charset=utf-8")
        .with_body([0x66u8, 0xff, 0x6f])
        .create_async()
        .await;

    let resp = fixture.client().make_request("test", None).await.unwrap();
    let envelope = resp.into_envelope().unwrap();

    assert_eq!(envelope.original_body, "f\u{FFFD}o");
    assert_eq!(envelope.body, json!("f\u{FFFD}o"));
}

#[tokio::test]
async fn test_injected_http_client_is_used() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/v2.5/me")
        .match_header("x-graph-app", "integration")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body(r#"{"id":"1"}"#)
        .create_async()
        .await;

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        "x-graph-app",
        reqwest::header::HeaderValue::from_static("integration"),
    );
    let http = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap();

    let client = GraphApi::builder()
        .base_url_override(&fixture.base_url)
        .enabled(true)
        .http_client(http)
        .build()
        .unwrap()
        .client(TOKEN)
        .unwrap();
    let resp = client.make_request("me", None).await.unwrap();

    assert_eq!(resp.status_code(), Some(200));
    mock.assert_async().await;
}
