// src/api.rs
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use reqwest::Client;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::analyzer::analyze_url;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::extract::{DynExtractor, HttpExtractor};
use crate::proxy::{proxy_download, DownloadQuery};
use crate::types::{AnalyzeRequest, ApiResponse, VideoRecord};

/// Immutable per-process state; nothing here is mutated by requests.
#[derive(Clone)]
pub struct AppState {
    pub extractor: DynExtractor,
    pub http: Client,
    pub static_dir: Option<String>,
}

impl AppState {
    pub fn new(extractor: DynExtractor, http: Client) -> Self {
        Self {
            extractor,
            http,
            static_dir: None,
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<String>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Production wiring: HTTP extractor and proxy share one client.
    pub fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        let http = crate::extract::http::build_client(cfg)?;
        let extractor = HttpExtractor::new(cfg.extractor_base_url.clone(), http.clone());
        Ok(Self::new(Arc::new(extractor), http).with_static_dir(cfg.static_dir.clone()))
    }
}

pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/analyze", post(analyze))
        .route("/api/download", get(download));

    if let Some(dir) = state.static_dir.clone() {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(CorsLayer::very_permissive()).with_state(state)
}

async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<VideoRecord>>, ApiError> {
    // Decoded by hand so the Content-Type header does not matter.
    let req: AnalyzeRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidInput)?;
    let url = req.url_str().ok_or(ApiError::InvalidInput)?;
    let record = analyze_url(state.extractor.as_ref(), url).await?;
    Ok(Json(ApiResponse::ok(record)))
}

async fn download(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(pairs) = query.map_err(|_| ApiError::InvalidInput)?;
    let q = DownloadQuery::from_pairs(pairs);
    proxy_download(&state.http, &q).await
}
