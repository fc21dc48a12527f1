//! Video grabber — binary entrypoint.
//! Boots the Axum HTTP server on Shuttle, wiring config, routes and metrics.

use shuttle_axum::ShuttleAxum;
use tracing::{info, warn};

use video_grabber::metrics::Metrics;
use video_grabber::{app, init_tracing, AppConfig};

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = AppConfig::load_default()?;
    info!(
        extractor = %cfg.extractor_base_url,
        static_dir = %cfg.static_dir,
        "config loaded"
    );

    let mut router = app(&cfg)?;

    match Metrics::init() {
        Ok(m) => router = router.merge(m.router()),
        Err(e) => warn!(error = ?e, "metrics disabled"),
    }

    Ok(router.into())
}
