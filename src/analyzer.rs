// src/analyzer.rs
//! Analyze pipeline: normalize → route → one extraction call → map to a record.

use metrics::counter;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::dispatch;
use crate::error::ApiError;
use crate::extract::{extract_for, Extractor};
use crate::normalize::map_result;
use crate::types::VideoRecord;

pub async fn analyze_url(extractor: &dyn Extractor, raw_url: &str) -> Result<VideoRecord, ApiError> {
    let Some((url, platform)) = dispatch::resolve(raw_url) else {
        counter!("grabber_analyze_total", "platform" => "none", "outcome" => "unsupported")
            .increment(1);
        return Err(ApiError::UnsupportedPlatform);
    };
    let tag = platform.as_str();
    info!(platform = tag, %url, backend = extractor.name(), "analyzing");

    let t0 = Instant::now();
    let raw = match extract_for(extractor, platform, &url).await {
        Ok(v) => v,
        Err(e) => {
            error!(platform = tag, error = ?e, "extraction call failed");
            counter!("grabber_analyze_total", "platform" => tag, "outcome" => "extract_error")
                .increment(1);
            return Err(ApiError::ExtractionFailure(e));
        }
    };
    let ms = t0.elapsed().as_millis() as u64;

    match map_result(platform, &raw) {
        Some(record) => {
            info!(platform = tag, ms, "record resolved");
            counter!("grabber_analyze_total", "platform" => tag, "outcome" => "ok").increment(1);
            Ok(record)
        }
        None => {
            warn!(platform = tag, ms, "extraction returned no usable video");
            counter!("grabber_analyze_total", "platform" => tag, "outcome" => "no_record")
                .increment(1);
            Err(ApiError::NoRecordFound)
        }
    }
}
