// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "GRABBER_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/grabber.toml";

pub const ENV_EXTRACTOR_URL: &str = "GRABBER_EXTRACTOR_URL";
pub const ENV_USER_AGENT: &str = "GRABBER_USER_AGENT";
pub const ENV_STATIC_DIR: &str = "GRABBER_STATIC_DIR";

fn default_extractor_base_url() -> String {
    "https://backend1.tioo.eu.org".to_string()
}
fn default_user_agent() -> String {
    concat!("video-grabber/", env!("CARGO_PKG_VERSION")).to_string()
}
fn default_connect_timeout_secs() -> u64 {
    10
}
fn default_static_dir() -> String {
    "static".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root of the extraction backend; endpoints are appended as path segments.
    #[serde(default = "default_extractor_base_url")]
    pub extractor_base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Connect timeout only. Slow bodies are never cut off.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Directory with the single-page UI.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            extractor_base_url: default_extractor_base_url(),
            user_agent: default_user_agent(),
            connect_timeout_secs: default_connect_timeout_secs(),
            static_dir: default_static_dir(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(cfg)
    }

    /// Resolve config using env var + fallbacks, then apply env overrides:
    /// 1) $GRABBER_CONFIG_PATH (must exist)
    /// 2) config/grabber.toml
    /// 3) built-in defaults
    pub fn load_default() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
            }
            Self::load_from_file(&pb)?
        } else {
            let fallback = PathBuf::from(DEFAULT_CONFIG_PATH);
            if fallback.exists() {
                Self::load_from_file(&fallback)?
            } else {
                Self::default()
            }
        };
        cfg.apply_env();
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply_env(&mut self) {
        if let Some(v) = non_empty_env(ENV_EXTRACTOR_URL) {
            self.extractor_base_url = v;
        }
        if let Some(v) = non_empty_env(ENV_USER_AGENT) {
            self.user_agent = v;
        }
        if let Some(v) = non_empty_env(ENV_STATIC_DIR) {
            self.static_dir = v;
        }
    }

    fn validate(&mut self) -> Result<()> {
        let trimmed = self.extractor_base_url.trim().trim_end_matches('/');
        url::Url::parse(trimmed)
            .with_context(|| format!("invalid extractor_base_url: {}", self.extractor_base_url))?;
        self.extractor_base_url = trimmed.to_string();
        Ok(())
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
