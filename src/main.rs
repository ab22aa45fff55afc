//! Incident Response Console server.
//!
//! Entry point: load configuration, initialise tracing, and serve the page.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use incident_console::config::AppConfig;
use incident_console::server::start_server;
use incident_console::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before anything reads the environment
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    telemetry::init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    info!(
        name: "config.loaded",
        address = %config.server.bind_address(),
        analysis_base_url = %config.analysis.base_url,
        max_upload_bytes = config.upload.max_bytes,
        timeout_disabled = config.server.timeout_disabled,
        "Configuration loaded"
    );

    start_server(Arc::new(config)).await
}
