//! Integration tests for `BrochureClient::fetch_json`.
//!
//! Each test stands up a local `wiremock` server, so no real network traffic
//! is made.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pricecmp_catalog::{brochure_rows, BrochureClient, CatalogError, FieldMapping};

/// 5-second timeout, no retries.
fn test_client() -> BrochureClient {
    BrochureClient::new(5, "pricecmp-test/0.1", 0, 0).expect("failed to build test client")
}

fn test_client_with_retries(max_retries: u32) -> BrochureClient {
    BrochureClient::new(5, "pricecmp-test/0.1", max_retries, 0)
        .expect("failed to build test client")
}

#[tokio::test]
async fn fetch_json_returns_parsed_body() {
    let server = MockServer::start().await;
    let body = json!({"items": [{"name": "Eggs", "price_text": "2.99"}]});

    Mock::given(method("GET"))
        .and(path("/flyer.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let url = format!("{}/flyer.json", server.uri());
    let value = test_client().fetch_json(&url).await.expect("fetch succeeds");
    assert_eq!(value, body);

    let rows = brochure_rows(&value, &FieldMapping::default(), 1000).expect("items");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Eggs");
}

#[tokio::test]
async fn fetch_json_sends_configured_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flyer.json"))
        .and(header("user-agent", "pricecmp-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/flyer.json", server.uri());
    let value = test_client().fetch_json(&url).await.expect("fetch succeeds");
    assert_eq!(value, json!([]));
}

#[tokio::test]
async fn fetch_json_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing.json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/missing.json", server.uri());
    let err = test_client_with_retries(3).fetch_json(&url).await.unwrap_err();
    match err {
        CatalogError::NotFound { url: got } => assert_eq!(got, url),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_json_maps_other_status_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flyer.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let url = format!("{}/flyer.json", server.uri());
    let err = test_client().fetch_json(&url).await.unwrap_err();
    assert!(
        matches!(err, CatalogError::UnexpectedStatus { status: 503, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn fetch_json_reports_rate_limit_with_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flyer.json"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "12"))
        .mount(&server)
        .await;

    let url = format!("{}/flyer.json", server.uri());
    let err = test_client().fetch_json(&url).await.unwrap_err();
    assert!(
        matches!(
            err,
            CatalogError::RateLimited {
                retry_after_secs: Some(12),
                ..
            }
        ),
        "got {err:?}"
    );
}

#[tokio::test]
async fn fetch_json_rate_limit_without_header_has_no_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flyer.json"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let url = format!("{}/flyer.json", server.uri());
    let err = test_client().fetch_json(&url).await.unwrap_err();
    assert!(
        matches!(
            err,
            CatalogError::RateLimited {
                retry_after_secs: None,
                ..
            }
        ),
        "got {err:?}"
    );
}

#[tokio::test]
async fn fetch_json_waits_for_retry_after_then_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flyer.json"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/flyer.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/flyer.json", server.uri());
    let started = std::time::Instant::now();
    test_client_with_retries(1)
        .fetch_json(&url)
        .await
        .expect("second attempt succeeds");
    assert!(started.elapsed() >= std::time::Duration::from_secs(1));
}

#[tokio::test]
async fn fetch_json_retries_after_rate_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flyer.json"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/flyer.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "Rice"}])))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/flyer.json", server.uri());
    let value = test_client_with_retries(2)
        .fetch_json(&url)
        .await
        .expect("second attempt succeeds");
    assert_eq!(value, json!([{"name": "Rice"}]));
}

#[tokio::test]
async fn fetch_json_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flyer.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>sale!</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/flyer.json", server.uri());
    let err = test_client_with_retries(3).fetch_json(&url).await.unwrap_err();
    assert!(matches!(err, CatalogError::Deserialize { .. }), "got {err:?}");
}
