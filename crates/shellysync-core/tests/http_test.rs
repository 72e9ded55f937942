#![allow(clippy::unwrap_used)]
// End-to-end reconciliation over the real HTTP connector against a mock
// device, asserting the complete wire frames.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shellysync_core::{Field, InputConfig, InputType, Reconciler};

fn address(server: &MockServer) -> String {
    server.uri().strip_prefix("http://").unwrap().to_string()
}

#[tokio::test]
async fn write_posts_full_rpc_frame() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rpc"))
        .and(body_partial_json(json!({
            "src": "shellysync",
            "method": "Input.SetConfig",
            "params": {
                "config": { "id": 0, "type": "switch", "invert": true, "enable": true }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "result": { "restart_required": false }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut record = InputConfig::new(address(&server), 0);
    record.input_type = Field::Value(InputType::Switch);
    record.invert = Field::Value(true);

    let (written, diags) = Reconciler::new().write(&record).await;
    assert!(diags.is_empty(), "unexpected diagnostics: {diags:?}");
    assert_eq!(written, record);
}

#[tokio::test]
async fn read_round_trips_device_configuration() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rpc"))
        .and(body_partial_json(json!({
            "method": "Input.GetConfig",
            "params": { "id": 1 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "result": { "id": 1, "name": "door", "type": "button", "invert": false }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (read_back, diags) = Reconciler::new()
        .read(&InputConfig::new(address(&server), 1))
        .await;

    assert!(diags.is_empty(), "unexpected diagnostics: {diags:?}");
    assert_eq!(read_back.name, Field::Value("door".to_string()));
    assert_eq!(read_back.input_type, Field::Value(InputType::Button));
    assert_eq!(read_back.invert, Field::Value(false));
}
