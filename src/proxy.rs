// src/proxy.rs
//! Download proxy: re-streams a remote media file with a forced "save as" filename.

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::Response;
use metrics::counter;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ApiError;

pub const DEFAULT_FILENAME: &str = "video.mp4";
pub const DEFAULT_CONTENT_TYPE: &str = "video/mp4";

#[derive(Debug, Default, Deserialize)]
pub struct DownloadQuery {
    pub url: Option<String>,
    pub filename: Option<String>,
}

impl DownloadQuery {
    /// First occurrence of each key wins; repeated keys are not an error.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut q = Self::default();
        for (k, v) in pairs {
            match k.as_str() {
                "url" if q.url.is_none() => q.url = Some(v),
                "filename" if q.filename.is_none() => q.filename = Some(v),
                _ => {}
            }
        }
        q
    }

    pub fn filename_or_default(&self) -> &str {
        self.filename
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_FILENAME)
    }
}

/// `attachment; filename="<name>"`. Quotes, backslashes and control characters
/// would break the quoted parameter, so they become `_`.
pub fn content_disposition(filename: &str) -> HeaderValue {
    let safe: String = filename
        .chars()
        .map(|c| if c == '"' || c == '\\' || c.is_control() { '_' } else { c })
        .collect();
    let value = format!("attachment; filename=\"{safe}\"");
    // Non-ASCII is allowed as opaque bytes; the mapping above removed everything else
    // `from_bytes` rejects.
    HeaderValue::from_bytes(value.as_bytes())
        .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"video.mp4\""))
}

/// Fetch `q.url` once and relay its body without buffering.
pub async fn proxy_download(client: &Client, q: &DownloadQuery) -> Result<Response, ApiError> {
    let url = q
        .url
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingParameter("URL"))?;
    let filename = q.filename_or_default();

    let upstream = client.get(url).send().await.map_err(|e| {
        warn!(error = %e, "download upstream request failed");
        counter!("grabber_download_total", "outcome" => "upstream_error").increment(1);
        ApiError::UpstreamFetchError(
            e.status()
                .map(status_text)
                .unwrap_or_else(|| "request failed".to_string()),
        )
    })?;

    let status = upstream.status();
    if !status.is_success() {
        warn!(%status, "download upstream returned non-success status");
        counter!("grabber_download_total", "outcome" => "upstream_error").increment(1);
        return Err(ApiError::UpstreamFetchError(status_text(status)));
    }

    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    info!(%filename, "streaming download");
    counter!("grabber_download_total", "outcome" => "ok").increment(1);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_DISPOSITION, content_disposition(filename))
        .body(Body::from_stream(upstream.bytes_stream()))
        .map_err(|e| ApiError::UpstreamFetchError(e.to_string()))
}

/// Reason phrase for a status, e.g. "Not Found"; falls back to the numeric code.
fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_defaults() {
        let q = DownloadQuery::default();
        assert_eq!(q.filename_or_default(), "video.mp4");
        let q = DownloadQuery {
            url: None,
            filename: Some(String::new()),
        };
        assert_eq!(q.filename_or_default(), "video.mp4");
        let q = DownloadQuery {
            url: None,
            filename: Some("twitter_video.mp4".into()),
        };
        assert_eq!(q.filename_or_default(), "twitter_video.mp4");
    }

    #[test]
    fn repeated_keys_take_first_value() {
        let q = DownloadQuery::from_pairs(vec![
            ("url".to_string(), "https://a.example/v.mp4".to_string()),
            ("filename".to_string(), "one.mp4".to_string()),
            ("url".to_string(), "https://b.example/v.mp4".to_string()),
            ("filename".to_string(), "two.mp4".to_string()),
            ("other".to_string(), "x".to_string()),
        ]);
        assert_eq!(q.url.as_deref(), Some("https://a.example/v.mp4"));
        assert_eq!(q.filename_or_default(), "one.mp4");
    }

    #[test]
    fn disposition_is_exact_for_plain_names() {
        assert_eq!(
            content_disposition("instagram_video.mp4"),
            "attachment; filename=\"instagram_video.mp4\""
        );
    }

    #[test]
    fn disposition_escapes_breaking_chars() {
        assert_eq!(
            content_disposition("a\"b\\c\r\n.mp4"),
            "attachment; filename=\"a_b_c__.mp4\""
        );
        // Non-ASCII survives as raw bytes
        let v = content_disposition("视频.mp4");
        assert_eq!(v.as_bytes(), "attachment; filename=\"视频.mp4\"".as_bytes());
    }

    #[tokio::test]
    async fn missing_url_is_rejected_before_any_fetch() {
        let client = Client::new();
        let err = proxy_download(&client, &DownloadQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter(_)));
        assert_eq!(err.to_string(), "Missing URL parameter");
    }
}
