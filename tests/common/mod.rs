// tests/common/mod.rs
// Shared helpers: router construction and a throwaway in-process upstream server.
#![allow(dead_code)]

use axum::{body, body::Body, http::Request, Router};
use serde_json::Value as Json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt as _;

use video_grabber::extract::FixtureExtractor;
use video_grabber::{router, AppState};

pub const BODY_LIMIT: usize = 1024 * 1024; // 1MB, safe for tests

/// Router backed by canned extraction results; no static dir.
pub fn fixture_router(ex: FixtureExtractor) -> Router {
    router(AppState::new(Arc::new(ex), reqwest::Client::new()))
}

/// Serve `app` on 127.0.0.1:<random>; the task lives until the test runtime ends.
pub async fn spawn_upstream(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind upstream");
    let addr = listener.local_addr().expect("upstream addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

pub async fn post_json(app: &Router, uri: &str, payload: &str) -> (u16, Json) {
    post_with_type(app, uri, payload, Some("application/json")).await
}

/// POST `payload` with the given Content-Type (or none at all).
pub async fn post_with_type(
    app: &Router,
    uri: &str,
    payload: &str,
    content_type: Option<&str>,
) -> (u16, Json) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let req = builder
        .body(Body::from(payload.to_string()))
        .expect("build POST");
    let resp = app.clone().oneshot(req).await.expect("oneshot POST");
    let status = resp.status().as_u16();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    let v: Json = serde_json::from_slice(&bytes).expect("json body");
    (status, v)
}
