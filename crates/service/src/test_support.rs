#![cfg(test)]
use migration::MigratorTrait;
use models::db::connect_with_config;
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// Migrated SQLite database in a fresh temp directory. Keep the `TempDir`
/// alive for as long as the connection is used.
pub async fn get_db() -> Result<(DatabaseConnection, TempDir), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("service.db").display()),
        max_connections: 1,
        min_connections: 1,
        idle_timeout_secs: 0,
        max_lifetime_secs: 0,
        ..Default::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok((db, dir))
}
