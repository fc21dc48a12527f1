// src/extract/mod.rs
//! Extraction backend abstraction.
//!
//! The backend does the actual scraping; we only see the loosely-typed JSON it returns.

pub mod fixture;
pub mod http;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::types::Platform;

pub use fixture::FixtureExtractor;
pub use self::http::HttpExtractor;

/// One entry point per platform. Any `Err` is treated as an extraction failure.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn twitter(&self, url: &str) -> Result<Value>;
    async fn instagram(&self, url: &str) -> Result<Value>;
    async fn threads(&self, url: &str) -> Result<Value>;
    fn name(&self) -> &'static str;
}

pub type DynExtractor = Arc<dyn Extractor>;

/// Run the entry point that belongs to `platform`.
pub async fn extract_for(extractor: &dyn Extractor, platform: Platform, url: &str) -> Result<Value> {
    match platform {
        Platform::Twitter => extractor.twitter(url).await,
        Platform::Instagram => extractor.instagram(url).await,
        Platform::Threads => extractor.threads(url).await,
    }
}
