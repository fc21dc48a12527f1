//! Runs one extraction against the configured backend and prints both the raw
//! result and the normalized record. Handy when the backend changes shape.
//!
//! Usage: `cargo run --bin probe -- <post url>`

use anyhow::{anyhow, Result};
use video_grabber::dispatch;
use video_grabber::extract::{extract_for, HttpExtractor};
use video_grabber::normalize::map_result;
use video_grabber::{init_tracing, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let raw_url = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: probe <post url>"))?;
    let (url, platform) =
        dispatch::resolve(&raw_url).ok_or_else(|| anyhow!("unsupported link: {raw_url}"))?;

    let cfg = AppConfig::load_default()?;
    let extractor = HttpExtractor::from_config(&cfg)?;
    println!("platform: {platform}\nurl: {url}\nbackend: {}", extractor.base_url());

    let raw = extract_for(&extractor, platform, &url).await?;
    println!("raw:\n{}", serde_json::to_string_pretty(&raw)?);

    match map_result(platform, &raw) {
        Some(rec) => println!("record:\n{}", serde_json::to_string_pretty(&rec)?),
        None => println!("record: none (no usable video in result)"),
    }
    Ok(())
}
