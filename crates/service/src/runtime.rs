//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Ensure the poster directory exists before serving.
pub async fn ensure_env(static_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_static_dir(static_dir).await
}
