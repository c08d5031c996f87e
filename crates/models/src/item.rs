//! Persistence mapping for the `items` table.
//!
//! Functions take any [`ConnectionTrait`] so callers decide the transaction scope.
use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{db, errors::ModelError};

pub const TABLE_NAME: &str = "items";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text", indexed)]
    pub name: String,
    #[sea_orm(column_type = "Text", indexed)]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a row; the id comes from the database.
pub async fn create<C>(db: &C, name: &str, description: &str) -> Result<Model, ModelError>
where
    C: ConnectionTrait,
{
    let am = ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C>(db: &C, id: i32) -> Result<Option<Model>, ModelError>
where
    C: ConnectionTrait,
{
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Overwrite name and description of an already loaded row. `id` is left untouched.
pub async fn overwrite<C>(db: &C, row: Model, name: &str, description: &str) -> Result<Model, ModelError>
where
    C: ConnectionTrait,
{
    let mut am: ActiveModel = row.into();
    am.name = Set(name.to_string());
    am.description = Set(description.to_string());
    Ok(am.update(db).await?)
}

/// Returns `true` when a row was removed.
pub async fn delete<C>(db: &C, id: i32) -> Result<bool, ModelError>
where
    C: ConnectionTrait,
{
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

/// Remove every row and restart the id sequence at 1.
pub async fn truncate_and_reset<C>(db: &C) -> Result<(), ModelError>
where
    C: ConnectionTrait,
{
    for sql in db::reset_statements(db.get_database_backend(), TABLE_NAME) {
        db.execute_unprepared(&sql).await?;
    }
    Ok(())
}
