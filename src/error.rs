// src/error.rs
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::types::ApiResponse;

/// Every failure the HTTP surface can report. Rendered as `{ success: false, error }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Please provide a valid URL")]
    InvalidInput,
    #[error("Unsupported link; only Twitter, Instagram and Threads are supported")]
    UnsupportedPlatform,
    #[error("Could not find a video; check that the link is valid and public")]
    NoRecordFound,
    /// Detail stays in the logs; the client only sees the generic message.
    #[error("Extraction failed; the network may be down or the link is invalid")]
    ExtractionFailure(#[source] anyhow::Error),
    #[error("Missing {0} parameter")]
    MissingParameter(&'static str),
    #[error("Failed to fetch video: {0}")]
    UpstreamFetchError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput
            | ApiError::UnsupportedPlatform
            | ApiError::NoRecordFound
            | ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::ExtractionFailure(_) | ApiError::UpstreamFetchError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ApiResponse::err(self.to_string()))).into_response()
    }
}
