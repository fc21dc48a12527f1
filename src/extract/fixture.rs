// src/extract/fixture.rs
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

use super::Extractor;
use crate::types::Platform;

/// Returns canned per-platform results; used by tests and offline demos.
/// Platforms without a canned value fail like an unreachable backend would.
#[derive(Debug, Clone, Default)]
pub struct FixtureExtractor {
    results: HashMap<Platform, Value>,
}

impl FixtureExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, platform: Platform, result: Value) -> Self {
        self.results.insert(platform, result);
        self
    }

    fn lookup(&self, platform: Platform) -> Result<Value> {
        self.results
            .get(&platform)
            .cloned()
            .ok_or_else(|| anyhow!("no fixture for {platform}"))
    }
}

#[async_trait]
impl Extractor for FixtureExtractor {
    async fn twitter(&self, _url: &str) -> Result<Value> {
        self.lookup(Platform::Twitter)
    }

    async fn instagram(&self, _url: &str) -> Result<Value> {
        self.lookup(Platform::Instagram)
    }

    async fn threads(&self, _url: &str) -> Result<Value> {
        self.lookup(Platform::Threads)
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}
