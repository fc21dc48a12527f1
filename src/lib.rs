// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod analyzer;
pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod metrics;
pub mod normalize;
pub mod proxy;
pub mod types;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::config::AppConfig;
pub use crate::error::ApiError;
pub use crate::types::{ApiResponse, Platform, VideoRecord};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact fmt logs filtered by `RUST_LOG` (default `video_grabber=info,warn`).
/// Uses `try_init` so a subscriber installed by the host runtime keeps precedence.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("video_grabber=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

/// Build the full application router from config (without `/metrics`).
pub fn app(cfg: &AppConfig) -> anyhow::Result<axum::Router> {
    let state = AppState::from_config(cfg)?;
    Ok(router(state))
}
