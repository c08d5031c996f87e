use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_items::Items;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Items: lookup indexes on name and description
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_items_name")
                    .table(Items::Table)
                    .col(Items::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_items_description")
                    .table(Items::Table)
                    .col(Items::Description)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_items_description").table(Items::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_items_name").table(Items::Table).to_owned())
            .await
    }
}
