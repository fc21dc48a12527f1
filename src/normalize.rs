// src/normalize.rs
//! Maps raw extraction results into [`VideoRecord`]s.
//!
//! The backend's JSON shapes are not ours and drift without notice, so every field is
//! probed defensively. One function per platform keeps shape changes local.

use serde_json::Value;

use crate::types::{Platform, VideoRecord};

pub const TWITTER_TITLE: &str = "Twitter Video";
pub const TWITTER_AUTHOR: &str = "Twitter User";
/// Twitter results carry no preview image; the UI falls back to this icon.
pub const TWITTER_THUMBNAIL: &str = "https://abs.twimg.com/icons/apple-touch-icon-192x192.png";

pub const INSTAGRAM_TITLE: &str = "Instagram Video";
pub const INSTAGRAM_AUTHOR: &str = "Instagram User";

pub const THREADS_TITLE: &str = "Threads Video";
pub const THREADS_AUTHOR: &str = "Threads User";

/// Map a result for the given platform.
pub fn map_result(platform: Platform, raw: &Value) -> Option<VideoRecord> {
    match platform {
        Platform::Twitter => map_twitter(raw),
        Platform::Instagram => map_instagram(raw),
        Platform::Threads => map_threads(raw),
    }
}

/// Non-empty string at `key`, if any.
fn str_field<'a>(v: &'a Value, key: &str) -> Option<&'a str> {
    v.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Resolve the media URL out of a Twitter result's `url` field.
///
/// Arrays are searched for an `hd` variant first, then `sd`, and only then does the
/// first element get a chance (bare string, or its `url`/`hd`/`sd` field).
pub fn select_twitter_url(raw: &Value) -> Option<String> {
    match raw.get("url")? {
        Value::String(s) => Some(s.clone()).filter(|s| !s.is_empty()),
        Value::Array(items) => {
            if let Some(hd) = items.iter().find_map(|it| str_field(it, "hd")) {
                return Some(hd.to_string());
            }
            if let Some(sd) = items.iter().find_map(|it| str_field(it, "sd")) {
                return Some(sd.to_string());
            }
            let first = items.first()?;
            let picked = match first {
                Value::String(s) => Some(s.as_str()),
                other => str_field(other, "url")
                    .or_else(|| str_field(other, "hd"))
                    .or_else(|| str_field(other, "sd")),
            };
            picked.filter(|s| !s.is_empty()).map(str::to_string)
        }
        _ => None,
    }
}

pub fn map_twitter(raw: &Value) -> Option<VideoRecord> {
    let url = select_twitter_url(raw)?;
    let title = str_field(raw, "title").unwrap_or(TWITTER_TITLE);
    VideoRecord::new(
        Platform::Twitter,
        title,
        TWITTER_THUMBNAIL,
        &url,
        Some(TWITTER_AUTHOR),
    )
}

pub fn map_instagram(raw: &Value) -> Option<VideoRecord> {
    let first = raw.get("result")?.as_array()?.first()?;
    let url = str_field(first, "url")?;
    let thumbnail = str_field(first, "thumbnail").unwrap_or_default();
    VideoRecord::new(
        Platform::Instagram,
        INSTAGRAM_TITLE,
        thumbnail,
        url,
        Some(INSTAGRAM_AUTHOR),
    )
}

pub fn map_threads(raw: &Value) -> Option<VideoRecord> {
    let result = raw.get("result")?;
    let video = str_field(result, "video")?;
    let image = str_field(result, "image").unwrap_or_default();
    VideoRecord::new(
        Platform::Threads,
        THREADS_TITLE,
        image,
        video,
        Some(THREADS_AUTHOR),
    )
}
