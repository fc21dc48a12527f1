// src/extract/http.rs
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use metrics::histogram;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

use super::Extractor;
use crate::config::AppConfig;
use crate::types::Platform;

const TWITTER_ENDPOINT: &str = "twitter";
const INSTAGRAM_ENDPOINT: &str = "igdl";
const THREADS_ENDPOINT: &str = "threads";

/// Talks to a scraping backend exposing `GET {base}/{endpoint}?url=<post url>`.
#[derive(Clone)]
pub struct HttpExtractor {
    client: Client,
    base_url: String,
}

impl HttpExtractor {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self> {
        Ok(Self::new(cfg.extractor_base_url.clone(), build_client(cfg)?))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call(&self, platform: Platform, endpoint: &'static str, post_url: &str) -> Result<Value> {
        let t0 = Instant::now();
        let target = format!("{}/{}", self.base_url, endpoint);

        let resp = self
            .client
            .get(&target)
            .query(&[("url", post_url)])
            .send()
            .await
            .with_context(|| format!("extractor request to {endpoint} failed"))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("extractor {endpoint} returned HTTP {status}"));
        }

        let body: Value = resp
            .json()
            .await
            .with_context(|| format!("extractor {endpoint} returned non-JSON body"))?;

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        record_extract_ms(platform, ms);
        debug!(endpoint, ms, "extractor call finished");

        Ok(body)
    }
}

/// Backend round trip, labelled by platform tag rather than endpoint name.
pub(crate) fn record_extract_ms(platform: Platform, ms: f64) {
    histogram!("grabber_extract_ms", "platform" => platform.as_str()).record(ms);
}

/// Shared reqwest client for the extractor and the download proxy.
pub fn build_client(cfg: &AppConfig) -> Result<Client> {
    Client::builder()
        .user_agent(cfg.user_agent.clone())
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .build()
        .context("building reqwest client")
}

#[async_trait]
impl Extractor for HttpExtractor {
    async fn twitter(&self, url: &str) -> Result<Value> {
        self.call(Platform::Twitter, TWITTER_ENDPOINT, url).await
    }

    async fn instagram(&self, url: &str) -> Result<Value> {
        self.call(Platform::Instagram, INSTAGRAM_ENDPOINT, url).await
    }

    async fn threads(&self, url: &str) -> Result<Value> {
        self.call(Platform::Threads, THREADS_ENDPOINT, url).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
