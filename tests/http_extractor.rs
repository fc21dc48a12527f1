// tests/http_extractor.rs
//
// HttpExtractor against a stub backend: endpoint naming, query forwarding, and
// failure modes that must surface as errors.

mod common;

use axum::{
    extract::Query,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;

use common::spawn_upstream;
use video_grabber::extract::{extract_for, Extractor, HttpExtractor};
use video_grabber::Platform;

async fn echo(endpoint: &'static str, q: HashMap<String, String>) -> Json<Value> {
    Json(json!({ "endpoint": endpoint, "url": q.get("url").cloned().unwrap_or_default() }))
}

fn backend() -> Router {
    Router::new()
        .route("/twitter", get(|Query(q): Query<HashMap<String, String>>| echo("twitter", q)))
        .route("/igdl", get(|Query(q): Query<HashMap<String, String>>| echo("igdl", q)))
        .route("/threads", get(|Query(q): Query<HashMap<String, String>>| echo("threads", q)))
}

#[tokio::test]
async fn calls_platform_endpoint_with_url_query() {
    let addr = spawn_upstream(backend()).await;
    let ex = HttpExtractor::new(format!("http://{addr}/"), reqwest::Client::new());

    let post = "https://twitter.com/a/status/1?s=20&t=x";
    let v = ex.twitter(post).await.unwrap();
    assert_eq!(v, json!({ "endpoint": "twitter", "url": post }));

    let v = extract_for(&ex, Platform::Instagram, "https://instagram.com/p/1")
        .await
        .unwrap();
    assert_eq!(v["endpoint"], "igdl");

    let v = extract_for(&ex, Platform::Threads, "https://threads.net/@a/post/1")
        .await
        .unwrap();
    assert_eq!(v["endpoint"], "threads");
}

#[tokio::test]
async fn non_success_and_non_json_are_errors() {
    let app = Router::new()
        .route("/twitter", get(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }))
        .route("/igdl", get(|| async { "<html>changed</html>" }));
    let addr = spawn_upstream(app).await;
    let ex = HttpExtractor::new(format!("http://{addr}"), reqwest::Client::new());

    let err = ex.twitter("https://twitter.com/a/status/1").await.unwrap_err();
    assert!(err.to_string().contains("429"), "{err}");
    assert!(ex.instagram("https://instagram.com/p/1").await.is_err());
    // Route not mounted → 404
    assert!(ex.threads("https://threads.net/@a/post/1").await.is_err());
}
