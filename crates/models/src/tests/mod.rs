/// Schema and constraint tests on a throwaway SQLite database
pub mod crud_tests;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// Fresh migrated database in its own temp directory; keep the `TempDir` alive.
pub async fn setup_test_db() -> anyhow::Result<(DatabaseConnection, TempDir)> {
    let dir = tempfile::tempdir()?;
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("models.db").display()),
        max_connections: 1,
        min_connections: 1,
        idle_timeout_secs: 0,
        max_lifetime_secs: 0,
        ..Default::default()
    };
    let db = crate::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok((db, dir))
}
