//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::{info, warn};

/// Ensure the poster directory exists, creating it when missing.
pub async fn ensure_static_dir(static_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(static_dir).await.is_err() {
        warn!(%static_dir, "static directory not found; creating it");
    }
    tokio::fs::create_dir_all(static_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {static_dir}: {e}"))?;
    info!(%static_dir, "static directory ready");
    Ok(())
}
