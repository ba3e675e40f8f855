use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode},
};
use prompt_relay::{
    config::InferenceConfig,
    inference::{GenerationParameters, HuggingFaceClient, InferenceClient},
    server::{AppState, router},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`
use wiremock::MockServer;

pub const MODEL_PATH: &str = "/models/test-model";

pub const LOADING_MESSAGE: &str = "AI model is loading, please wait 20 seconds and try again";

/// Captured response: status, headers and raw body
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

/// Router backed by the given client and default generation parameters
pub fn create_test_app(client: Arc<dyn InferenceClient>) -> Router {
    router(AppState::new(client, GenerationParameters::default()))
}

/// Inference config pointing at a wiremock server
pub fn inference_config_for(mock_server: &MockServer) -> InferenceConfig {
    InferenceConfig {
        endpoint: format!("{}{}", mock_server.uri(), MODEL_PATH),
        ..InferenceConfig::default()
    }
}

pub fn hf_client_for(mock_server: &MockServer) -> HuggingFaceClient {
    HuggingFaceClient::new(inference_config_for(mock_server)).expect("failed to create client")
}

/// Router wired to a real Hugging Face client aimed at the mock upstream
pub fn create_relay_app(mock_server: &MockServer) -> Router {
    create_test_app(Arc::new(hf_client_for(mock_server)))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            builder = builder.header("content-type", "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn post_json(app: Router, body: &Value) -> TestResponse {
    send(app, Method::POST, "/", Some(&body.to_string())).await
}

/// Asserts the four CORS headers are present with their fixed values
pub fn assert_cors_headers(headers: &HeaderMap) {
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET,OPTIONS,PATCH,DELETE,POST,PUT"
    );
    assert_eq!(
        headers["access-control-allow-headers"],
        "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version"
    );
}
