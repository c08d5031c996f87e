//! One-shot startup routine for the `items` table.

use migration::{MigratorTrait, SchemaManager};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{error, info, warn};

use models::item;

use crate::errors::ServiceError;

/// Result of the best-effort startup clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// All rows removed and the id sequence restarted.
    Cleared,
    /// Table does not exist yet; nothing to clear.
    NoTable,
    /// Clear failed and was rolled back; existing rows may remain.
    Failed(String),
}

/// Truncate `items` and restart its id sequence inside one transaction.
/// Never fails: errors are logged and the transaction rolled back.
pub async fn reset_items(db: &DatabaseConnection) -> ResetOutcome {
    info!("Clearing database");
    match SchemaManager::new(db).has_table(item::TABLE_NAME).await {
        Ok(true) => {}
        Ok(false) => {
            info!(table = item::TABLE_NAME, "table missing, nothing to clear");
            return ResetOutcome::NoTable;
        }
        Err(e) => {
            error!(error = %e, "Error clearing database");
            return ResetOutcome::Failed(e.to_string());
        }
    }

    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(e) => {
            error!(error = %e, "Error clearing database");
            return ResetOutcome::Failed(e.to_string());
        }
    };

    let res = match item::truncate_and_reset(&txn).await {
        Ok(()) => txn.commit().await.map_err(|e| e.to_string()),
        Err(e) => {
            if let Err(rb) = txn.rollback().await {
                warn!(error = %rb, "rollback after failed clear also failed");
            }
            Err(e.to_string())
        }
    };

    match res {
        Ok(()) => {
            info!(table = item::TABLE_NAME, "database cleared");
            ResetOutcome::Cleared
        }
        Err(e) => {
            error!(error = %e, "Error clearing database");
            ResetOutcome::Failed(e)
        }
    }
}

/// Startup sequence: optional clear, then make sure the schema exists.
pub async fn prepare_schema(db: &DatabaseConnection, reset_on_start: bool) -> Result<Option<ResetOutcome>, ServiceError> {
    let outcome = if reset_on_start {
        Some(reset_items(db).await)
    } else {
        info!("reset_on_start disabled; keeping existing rows");
        None
    };
    migration::Migrator::up(db, None).await?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{repo::seaorm::SeaOrmItemRepository, ItemInput, ItemRepository};
    use crate::test_support::{get_db, get_raw_db};
    use sea_orm::ConnectionTrait;

    #[tokio::test]
    async fn first_boot_has_nothing_to_clear() -> Result<(), anyhow::Error> {
        let db = get_raw_db().await?;
        let outcome = prepare_schema(&db, true).await?;
        assert_eq!(outcome, Some(ResetOutcome::NoTable));
        assert!(SchemaManager::new(&db).has_table(item::TABLE_NAME).await?);
        Ok(())
    }

    #[tokio::test]
    async fn restart_clears_rows_and_sequence() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmItemRepository::new(db.clone());
        for i in 0..3 {
            repo.create(&ItemInput::new(format!("n{i}"), "d")).await?;
        }

        let outcome = prepare_schema(&db, true).await?;
        assert_eq!(outcome, Some(ResetOutcome::Cleared));
        assert!(repo.get(1).await?.is_none());

        let next = repo.create(&ItemInput::new("fresh", "start")).await?;
        assert_eq!(next.id, 1);
        Ok(())
    }

    #[tokio::test]
    async fn disabled_reset_keeps_rows() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmItemRepository::new(db.clone());
        let kept = repo.create(&ItemInput::new("keep", "me")).await?;

        assert_eq!(prepare_schema(&db, false).await?, None);
        assert_eq!(repo.get(kept.id).await?, Some(kept));
        Ok(())
    }

    #[tokio::test]
    async fn failed_clear_rolls_back_and_startup_continues() -> Result<(), anyhow::Error> {
        // 没有 AUTOINCREMENT 的表不会生成 sqlite_sequence，重置序列那一步必然失败。
        let db = get_raw_db().await?;
        db.execute_unprepared(
            "CREATE TABLE items (id INTEGER PRIMARY KEY, name TEXT NOT NULL, description TEXT NOT NULL)",
        )
        .await?;
        let row = item::create(&db, "a", "b").await?;

        let outcome = prepare_schema(&db, true).await?;
        assert!(matches!(outcome, Some(ResetOutcome::Failed(_))), "unexpected outcome: {outcome:?}");
        assert_eq!(item::find(&db, row.id).await?, Some(row));
        Ok(())
    }
}
