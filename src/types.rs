// src/types.rs
//! Wire types shared by the analyze endpoint, the probe binary and tests.

use serde::{Deserialize, Serialize};
use url::Url;

/// Platforms the dispatcher knows how to route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    Threads,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Threads => "threads",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform record returned to the UI regardless of source platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub title: String,
    /// May be empty when the backend had no preview image.
    pub thumbnail: String,
    pub download_url: String,
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl VideoRecord {
    /// Builds a record only when `download_url` parses as an absolute URL.
    pub fn new(
        platform: Platform,
        title: impl Into<String>,
        thumbnail: impl Into<String>,
        download_url: &str,
        author: Option<&str>,
    ) -> Option<Self> {
        let parsed = Url::parse(download_url).ok()?;
        if parsed.cannot_be_a_base() {
            return None;
        }
        Some(Self {
            title: title.into(),
            thumbnail: thumbnail.into(),
            download_url: download_url.to_string(),
            platform,
            author: author.map(str::to_string),
        })
    }
}

/// Body of `POST /api/analyze`. Kept loose so a missing or non-string `url`
/// surfaces as our own error instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<serde_json::Value>,
}

impl AnalyzeRequest {
    /// The submitted URL if it is a non-empty string.
    pub fn url_str(&self) -> Option<&str> {
        self.url
            .as_ref()
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// `{ success, data }` or `{ success, error }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_requires_absolute_url() {
        assert!(VideoRecord::new(Platform::Threads, "t", "", "video.mp4", None).is_none());
        assert!(VideoRecord::new(Platform::Threads, "t", "", "", None).is_none());
        assert!(VideoRecord::new(Platform::Threads, "t", "", "mailto:a@b.c", None).is_none());
        let rec = VideoRecord::new(
            Platform::Threads,
            "t",
            "",
            "https://cdn.example.com/v.mp4",
            Some("Threads User"),
        )
        .expect("absolute url");
        assert_eq!(rec.download_url, "https://cdn.example.com/v.mp4");
    }

    #[test]
    fn record_serializes_camel_case_and_lowercase_platform() {
        let rec = VideoRecord::new(
            Platform::Instagram,
            "Instagram Video",
            "https://cdn.example.com/t.jpg",
            "https://cdn.example.com/v.mp4",
            None,
        )
        .unwrap();
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["downloadUrl"], "https://cdn.example.com/v.mp4");
        assert_eq!(v["platform"], "instagram");
        assert!(v.get("author").is_none());
    }

    #[test]
    fn analyze_request_rejects_non_strings() {
        let r: AnalyzeRequest = serde_json::from_value(json!({ "url": 42 })).unwrap();
        assert_eq!(r.url_str(), None);
        let r: AnalyzeRequest = serde_json::from_value(json!({ "url": "" })).unwrap();
        assert_eq!(r.url_str(), None);
        let r: AnalyzeRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(r.url_str(), None);
        let r: AnalyzeRequest =
            serde_json::from_value(json!({ "url": "https://x.com/a" })).unwrap();
        assert_eq!(r.url_str(), Some("https://x.com/a"));
    }

    #[test]
    fn error_envelope_omits_data() {
        let v = serde_json::to_value(ApiResponse::err("nope")).unwrap();
        assert_eq!(v, json!({ "success": false, "error": "nope" }));
    }
}
