use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, DatabaseConfig, StorageConfig};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::{runtime, storage::PosterStore};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect, optionally migrate, and wire repositories and services.
pub async fn build_state(database: &DatabaseConfig, storage: &StorageConfig) -> anyhow::Result<ServerState> {
    let db = models::db::connect_with_config(database).await?;
    if database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!("migrations applied");
    }
    Ok(ServerState::new(db, PosterStore::from_config(storage)))
}

/// Router with the default CORS policy.
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl_c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    runtime::ensure_env(&cfg.storage.static_dir)
        .await
        .map_err(|e| StartupError::Runtime(format!("static dir {}: {}", cfg.storage.static_dir, e)))?;

    let state = build_state(&cfg.database, &cfg.storage).await?;
    let app = build_app(state);

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}: {}", cfg.server.bind_addr(), e)))?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, static_dir = %cfg.storage.static_dir, "starting server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}
