use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    http::{header, HeaderMap, Method, StatusCode, Uri},
    Json, Router,
};
use serde_json::{json, Value};

use crate::auth::MockTokenGenerator;

/// Mock generator whose token spells out the credentials it was called with
pub fn setup_mock_generator() -> MockTokenGenerator {
    let mut generator = MockTokenGenerator::new();
    generator
        .expect_generate()
        .returning(|api_key, api_secret| Ok(format!("token:{}:{}", api_key, api_secret)));
    generator
}

/// Mock generator issuing `token-0`, `token-1`, ... for the KEY/SECRET pair only
pub fn setup_counting_generator(expected_calls: usize) -> MockTokenGenerator {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut generator = MockTokenGenerator::new();
    generator
        .expect_generate()
        .withf(|api_key, api_secret| api_key == "KEY" && api_secret == "SECRET")
        .times(expected_calls)
        .returning(move |_, _| {
            Ok(format!("token-{}", calls.fetch_add(1, Ordering::SeqCst)))
        });
    generator
}

// Echoes back everything the API would use to authenticate and route a call
async fn echo(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let status = if uri.path().ends_with("/missing") {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    let body: Value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&body).unwrap_or(Value::String(body))
    };

    (
        status,
        Json(json!({
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query(),
            "authorization": header_value(header::AUTHORIZATION),
            "content_type": header_value(header::CONTENT_TYPE),
            "body": body,
        })),
    )
}

/// Start a local stand-in for the Zoom API and return its address
pub async fn spawn_mock_api() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API listener");
    let addr = listener.local_addr().expect("Mock API has no local address");

    let app = Router::new().fallback(echo);
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Mock API server failed");
    });

    addr
}
