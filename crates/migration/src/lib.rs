//! Migrator for the `items` schema.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_items;
mod m20240101_000002_add_item_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_items::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000002_add_item_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;

    #[tokio::test]
    async fn up_is_idempotent_and_down_drops_table() -> Result<(), DbErr> {
        let db = Database::connect("sqlite::memory:").await?;
        Migrator::up(&db, None).await?;
        Migrator::up(&db, None).await?;

        let manager = SchemaManager::new(&db);
        assert!(manager.has_table("items").await?);

        Migrator::down(&db, None).await?;
        assert!(!manager.has_table("items").await?);
        Ok(())
    }
}
