use std::time::Duration;

use sea_orm::sqlx::sqlite::SqlitePoolOptions;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, SqlxSqliteConnector, Statement,
};
use tracing::info;

/// Pool settings used to open the process-wide connection handle.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from(&configs::DatabaseConfig::default())
    }
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections,
            min_connections: c.min_connections,
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs),
            idle_timeout: Duration::from_secs(c.idle_timeout_secs),
            max_lifetime: Duration::from_secs(c.max_lifetime_secs),
            sqlx_logging: c.sqlx_logging,
        }
    }
}

impl DatabaseConfig {
    /// In-memory SQLite caps the pool at one connection so every caller sees the same database.
    fn is_sqlite_memory(&self) -> bool {
        self.url.starts_with("sqlite:") && self.url.contains(":memory:")
    }
}

pub async fn connect_with_config(config: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    if config.is_sqlite_memory() {
        return connect_sqlite_memory(config).await;
    }

    let mut opts = ConnectOptions::new(config.url.clone());
    opts.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opts).await?;
    info!(backend = ?db.get_database_backend(), max_connections = config.max_connections, "database connected");
    Ok(db)
}

/// 内存库只活在唯一的连接里：连接被回收，表和数据也就没了。
/// 所以这里固定一个连接，并关掉 idle/lifetime 回收（sqlx 默认也会回收）。
async fn connect_sqlite_memory(config: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(&config.url)
        .await?;
    let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
    info!(backend = ?db.get_database_backend(), max_connections = 1, "database connected (in-memory)");
    Ok(db)
}

/// Round-trip a trivial query to make sure the pool is usable.
pub async fn test_connection(db: &DatabaseConnection) -> anyhow::Result<()> {
    let backend = db.get_database_backend();
    let row = db
        .query_one(Statement::from_string(backend, "SELECT 1 AS ok"))
        .await?
        .ok_or_else(|| anyhow::anyhow!("health query returned no rows"))?;
    let ok: i32 = row.try_get("", "ok")?;
    if ok != 1 {
        return Err(anyhow::anyhow!("unexpected health query result: {ok}"));
    }
    Ok(())
}

/// Which statements reset the items table on a given backend.
pub(crate) fn reset_statements(backend: DbBackend, table: &str) -> Vec<String> {
    match backend {
        DbBackend::Postgres => vec![format!("TRUNCATE TABLE {table} RESTART IDENTITY CASCADE")],
        DbBackend::MySql => vec![format!("TRUNCATE TABLE {table}")],
        DbBackend::Sqlite => vec![
            format!("DELETE FROM {table}"),
            format!("DELETE FROM sqlite_sequence WHERE name = '{table}'"),
        ],
    }
}
