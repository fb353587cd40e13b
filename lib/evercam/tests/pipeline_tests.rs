//! Integration tests for the request pipeline using wiremock.

use std::time::Duration;

use evercam::{Api, Params, Verb};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path, query_param},
};

const API_ID: &str = "123456";
const API_KEY: &str = "1a2b3c4d5e6a7b8c9d0e";

fn api_for(server: &MockServer) -> Api {
    Api::builder()
        .api_id(API_ID)
        .api_key(API_KEY)
        .base_url(server.uri())
        .expect("base url")
        .build()
        .expect("client")
}

#[tokio::test]
async fn get_sends_credentials_in_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/test.json"))
        .and(query_param("api_id", API_ID))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"source": "evercam"}"#))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let payload = api.test().await.expect("payload").expect("some");

    assert_eq!(payload, serde_json::json!({"source": "evercam"}));
}

#[tokio::test]
async fn paths_get_json_extension_appended() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cameras/front-door.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"cameras": []}"#))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let payload = api
        .fetch_json("/cameras/front-door", Verb::Get, Params::new())
        .await
        .expect("payload");

    assert!(payload.is_some());
}

#[tokio::test]
async fn post_sends_credentials_in_form_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/users.json"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("api_id=123456"))
        .and(body_string_contains("username=alice"))
        .respond_with(
            ResponseTemplate::new(201).set_body_string(r#"{"users": [{"username": "alice"}]}"#),
        )
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let params = Params::new().with("username", "alice");
    let payload = api
        .fetch_json("/users", Verb::Post, params)
        .await
        .expect("payload");

    assert!(payload.is_some());
}

#[tokio::test]
async fn delete_sends_credentials_in_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/cameras/old.json"))
        .and(query_param("api_id", API_ID))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let payload = api
        .fetch_json("/cameras/old", Verb::Delete, Params::new())
        .await
        .expect("payload");

    assert_eq!(payload, Some(serde_json::json!({})));
}

#[tokio::test]
async fn empty_success_body_yields_no_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/test.json"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let payload = api.test().await.expect("no payload");

    assert!(payload.is_none());
}

#[tokio::test]
async fn error_status_with_message_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/test.json"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"message": "Its Broken"}"#),
        )
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let err = api.test().await.expect_err("should fail");

    assert!(err.is_api());
    assert_eq!(
        err.to_string(),
        "Evercam API call returned an error. Message: Its Broken"
    );
}

#[tokio::test]
async fn error_status_without_message_reports_code_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/test.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("worker crashed"))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let err = api.test().await.expect_err("should fail");

    assert_eq!(
        err.to_string(),
        "Evercam API call returned a 500 code. Response body was 'worker crashed'."
    );
}

#[tokio::test]
async fn success_status_with_embedded_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/test.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"message": "camera is offline"}"#),
        )
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let err = api.test().await.expect_err("should fail");

    assert!(err.is_api());
    assert_eq!(
        err.to_string(),
        "Evercam API call returned an error. Message: camera is offline"
    );
}

#[tokio::test]
async fn unparseable_success_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/test.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>surprise</html>"))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let err = api.test().await.expect_err("should fail");

    assert!(err.is_invalid_response());
    assert_eq!(
        err.to_string(),
        "API call failed to return any data or contained data that could not be parsed."
    );
}

#[tokio::test]
async fn raw_fetch_returns_body_verbatim() {
    let mock_server = MockServer::start().await;

    let jpeg: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

    Mock::given(method("GET"))
        .and(path("/v1/cameras/front-door/live/snapshot.jpg"))
        .and(query_param("api_id", API_ID))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(jpeg))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let image = api
        .fetch_raw(
            "/cameras/front-door/live/snapshot.jpg",
            Verb::Get,
            Params::new(),
        )
        .await
        .expect("image");

    assert_eq!(image.as_ref(), jpeg);
}

#[tokio::test]
async fn redirects_are_followed_transparently() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/old.json"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/v1/new.json"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/new.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"moved": true}"#))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let payload = api
        .fetch_json("/old", Verb::Get, Params::new())
        .await
        .expect("payload");

    assert_eq!(payload, Some(serde_json::json!({"moved": true})));
}

#[tokio::test]
async fn timeout_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/test.json"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let api = Api::builder()
        .api_id(API_ID)
        .api_key(API_KEY)
        .base_url(mock_server.uri())
        .expect("base url")
        .timeout(Duration::from_millis(100))
        .build()
        .expect("client");

    let err = api.test().await.expect_err("should time out");
    assert!(err.is_timeout(), "expected timeout, got: {err}");
}

#[tokio::test]
async fn connection_failure_is_surfaced() {
    let api = Api::builder()
        .api_id(API_ID)
        .api_key(API_KEY)
        .base_url("http://127.0.0.1:1")
        .expect("base url")
        .build()
        .expect("client");

    let err = api.test().await.expect_err("should fail to connect");
    assert!(err.is_connection(), "expected connection error, got: {err}");
}

#[tokio::test]
async fn construction_without_credentials_never_touches_network() {
    let err = Api::builder()
        .api_key(API_KEY)
        .build()
        .expect_err("should fail");
    assert!(err.is_configuration());
    assert_eq!(err.to_string(), "No API id specified.");

    let err = Api::builder()
        .api_id(API_ID)
        .build()
        .expect_err("should fail");
    assert!(err.is_configuration());
    assert_eq!(err.to_string(), "No API key specified.");
}
