#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use api::AppState;
use axum::body::Body;
use axum::http::{Request, Response, header};
use axum::Router;
use cases::{CaseLookup, ReferenceData, UpstreamClient};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Router backed by mock data only.
pub fn offline_app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(CaseLookup::offline(ReferenceData::mock().unwrap())));
    (api::app(state.clone()), state)
}

/// Router whose upstream points at `base_url`.
pub fn app_with_upstream(base_url: &str) -> (Router, Arc<AppState>) {
    let client = UpstreamClient::new(base_url, Duration::from_secs(2)).unwrap();
    let state = Arc::new(AppState::new(CaseLookup::new(ReferenceData::mock().unwrap(), client)));
    (api::app(state.clone()), state)
}

/// Nothing listens on the discard port locally, so every call is refused.
pub const UNREACHABLE_UPSTREAM: &str = "http://127.0.0.1:9";

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn data_source(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("x-data-source")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
