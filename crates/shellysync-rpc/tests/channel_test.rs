#![allow(clippy::unwrap_used)]
// Integration tests for the HTTP RPC channel using wiremock.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shellysync_rpc::{DEFAULT_RPC_TIMEOUT, Error, HttpConnector, RpcConnector, RpcSession};

// ── Helpers ─────────────────────────────────────────────────────────

/// Address of a mock server, stripped of the scheme the connector adds back.
fn address(server: &MockServer) -> String {
    server
        .uri()
        .strip_prefix("http://")
        .unwrap()
        .to_string()
}

async fn connect(server: &MockServer) -> shellysync_rpc::HttpSession {
    HttpConnector
        .connect(&address(server), DEFAULT_RPC_TIMEOUT)
        .await
        .unwrap()
}

// ── Open failures ───────────────────────────────────────────────────

#[tokio::test]
async fn connect_rejects_empty_address() {
    let result = HttpConnector.connect("  ", DEFAULT_RPC_TIMEOUT).await;
    assert!(matches!(result, Err(Error::EmptyAddress)));
}

#[tokio::test]
async fn connect_rejects_malformed_address() {
    let result = HttpConnector
        .connect("not a host name", DEFAULT_RPC_TIMEOUT)
        .await;
    assert!(
        matches!(result, Err(Error::InvalidUrl(_))),
        "expected InvalidUrl, got: {result:?}"
    );
}

// ── Envelope handling ───────────────────────────────────────────────

#[tokio::test]
async fn call_unwraps_result_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rpc"))
        .and(body_partial_json(json!({
            "src": "shellysync",
            "method": "Sys.GetConfig"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "src": "shellyplus1-a8032ab12345",
            "result": { "device": { "name": "garage" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = connect(&server).await;
    let result = session.call("Sys.GetConfig", None).await.unwrap();
    assert_eq!(result["device"]["name"], json!("garage"));
    session.disconnect().await.unwrap();
}

#[tokio::test]
async fn call_sends_params_and_increments_frame_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rpc"))
        .and(body_partial_json(json!({
            "id": 1,
            "method": "Input.GetConfig",
            "params": { "id": 2 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": {} })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rpc"))
        .and(body_partial_json(json!({ "id": 2, "method": "Sys.GetConfig" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = connect(&server).await;
    session
        .call("Input.GetConfig", Some(json!({ "id": 2 })))
        .await
        .unwrap();
    session.call("Sys.GetConfig", None).await.unwrap();
}

#[tokio::test]
async fn call_maps_rpc_error_frame() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rpc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "error": { "code": -105, "message": "Argument 'id' out of range" }
        })))
        .mount(&server)
        .await;

    let mut session = connect(&server).await;
    let result = session
        .call("Switch.GetConfig", Some(json!({ "id": 9 })))
        .await;

    match result {
        Err(Error::Rpc { code, message }) => {
            assert_eq!(code, -105);
            assert!(message.contains("out of range"));
        }
        other => panic!("expected Rpc error, got: {other:?}"),
    }
}

#[tokio::test]
async fn call_maps_http_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rpc"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let mut session = connect(&server).await;
    let result = session.call("Sys.GetConfig", None).await;

    match result {
        Err(Error::Http { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn call_maps_undecodable_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rpc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let mut session = connect(&server).await;
    let result = session.call("Sys.GetConfig", None).await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn call_times_out_within_channel_bound() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rpc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "result": {} }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut session = HttpConnector
        .connect(&address(&server), Duration::from_secs(1))
        .await
        .unwrap();
    let result = session.call("Sys.GetConfig", None).await;

    match result {
        Err(Error::Timeout { timeout_secs }) => assert_eq!(timeout_secs, 1),
        other => panic!("expected Timeout error, got: {other:?}"),
    }
}

#[test]
fn transient_classification() {
    assert!(Error::Timeout { timeout_secs: 5 }.is_transient());
    assert!(
        Error::Http {
            status: 503,
            body: String::new()
        }
        .is_transient()
    );
    assert!(
        !Error::Rpc {
            code: -103,
            message: String::new()
        }
        .is_transient()
    );
    assert!(!Error::EmptyAddress.is_transient());
}
