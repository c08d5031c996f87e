use sea_orm::{DatabaseConnection, TransactionTrait};

use models::item;

use crate::errors::ServiceError;
use crate::item::domain::{Item, ItemInput};
use crate::item::repository::ItemRepository;

/// SeaORM-backed repository. Writes go through `TransactionTrait::transaction`,
/// which commits when the closure returns `Ok` and rolls back otherwise.
#[derive(Clone)]
pub struct SeaOrmItemRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmItemRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ItemRepository for SeaOrmItemRepository {
    async fn create(&self, input: &ItemInput) -> Result<Item, ServiceError> {
        let input = input.clone();
        let created = self
            .db
            .transaction::<_, item::Model, ServiceError>(|txn| {
                Box::pin(async move { Ok(item::create(txn, &input.name, &input.description).await?) })
            })
            .await?;
        Ok(created.into())
    }

    async fn get(&self, id: i32) -> Result<Option<Item>, ServiceError> {
        Ok(item::find(&self.db, id).await?.map(Item::from))
    }

    async fn update(&self, id: i32, input: &ItemInput) -> Result<Option<Item>, ServiceError> {
        let input = input.clone();
        let updated = self
            .db
            .transaction::<_, Option<item::Model>, ServiceError>(|txn| {
                Box::pin(async move {
                    let Some(row) = item::find(txn, id).await? else { return Ok(None) };
                    Ok(Some(item::overwrite(txn, row, &input.name, &input.description).await?))
                })
            })
            .await?;
        Ok(updated.map(Item::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let removed = self
            .db
            .transaction::<_, bool, ServiceError>(|txn| {
                Box::pin(async move {
                    if item::find(txn, id).await?.is_none() {
                        return Ok(false);
                    }
                    Ok(item::delete(txn, id).await?)
                })
            })
            .await?;
        Ok(removed)
    }
}
