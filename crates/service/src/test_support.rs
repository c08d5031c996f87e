#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

/// Connection to a private in-memory database.
pub async fn get_raw_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    connect_with_config(&cfg).await
}

/// Same as [`get_raw_db`] with the schema applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = get_raw_db().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
