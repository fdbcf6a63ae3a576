#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::connect_with_config;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn test_db_config() -> configs::DatabaseConfig {
    let mut cfg = configs::load_default().map(|c| c.database).unwrap_or_default();
    cfg.normalize_from_env();
    cfg.min_connections = cfg.min_connections.clamp(1, 2);
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.acquire_timeout_secs = 10;
    cfg
}

/// Fresh connection to a migrated database, or `None` when database tests
/// are disabled (`SKIP_DB_TESTS`) or no URL is configured.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let cfg = test_db_config();
    if cfg.url.trim().is_empty() {
        return Ok(None);
    }

    MIGRATED
        .get_or_try_init(|| async {
            let db = connect_with_config(&cfg).await?;
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    Ok(Some(connect_with_config(&cfg).await?))
}
