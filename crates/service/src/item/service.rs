use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{Item, ItemInput};
use super::repository::ItemRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "Item";

/// Item business service independent of web framework.
/// Turns missing rows into [`ServiceError::NotFound`] and logs every operation.
pub struct ItemService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> Clone for ItemService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: ItemRepository + ?Sized> ItemService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create an item; the id is assigned by the store.
    ///
    /// # Examples
    /// ```
    /// use service::item::{ItemInput, ItemService, repository::mock::InMemoryItemRepository};
    /// use std::sync::Arc;
    /// let svc = ItemService::new(Arc::new(InMemoryItemRepository::default()));
    /// let item = tokio_test::block_on(svc.create(ItemInput::new("Widget", "A small widget"))).unwrap();
    /// assert_eq!(item.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: ItemInput) -> Result<Item, ServiceError> {
        info!("Creating item");
        let item = self.repo.create(&input).await?;
        info!(item_id = item.id, "Item created");
        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn read(&self, id: i32) -> Result<Item, ServiceError> {
        info!("Reading item");
        match self.repo.get(id).await? {
            Some(item) => {
                info!(item_id = item.id, "Item read");
                Ok(item)
            }
            None => Err(not_found(id)),
        }
    }

    /// Overwrite name and description. The id never changes.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: ItemInput) -> Result<Item, ServiceError> {
        info!("Updating item");
        match self.repo.update(id, &input).await? {
            Some(item) => {
                info!(item_id = item.id, "Item updated");
                Ok(item)
            }
            None => Err(not_found(id)),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        info!("Deleting item");
        if !self.repo.delete(id).await? {
            return Err(not_found(id));
        }
        info!(item_id = id, "Item deleted");
        Ok(())
    }
}

fn not_found(id: i32) -> ServiceError {
    warn!(item_id = id, "Item not found");
    ServiceError::not_found(ENTITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::repository::mock::InMemoryItemRepository;

    fn service() -> ItemService<InMemoryItemRepository> {
        ItemService::new(Arc::new(InMemoryItemRepository::default()))
    }

    #[tokio::test]
    async fn widget_lifecycle() {
        let svc = service();

        let created = svc.create(ItemInput::new("Widget", "A small widget")).await.unwrap();
        assert_eq!(created, Item { id: 1, name: "Widget".into(), description: "A small widget".into() });
        assert_eq!(svc.read(1).await.unwrap(), created);

        let updated = svc.update(1, ItemInput::new("Widget2", "Updated")).await.unwrap();
        assert_eq!(updated, Item { id: 1, name: "Widget2".into(), description: "Updated".into() });
        assert_eq!(svc.read(1).await.unwrap(), updated);

        svc.delete(1).await.unwrap();
        let err = svc.read(1).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Item not found");
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let svc = service();
        assert!(svc.read(7).await.unwrap_err().is_not_found());
        assert!(svc.update(7, ItemInput::new("a", "b")).await.unwrap_err().is_not_found());
        assert!(svc.delete(7).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn ids_increase_and_are_not_reused() {
        let svc = service();
        let mut last = 0;
        for i in 0..5 {
            let item = svc.create(ItemInput::new(format!("n{i}"), "d")).await.unwrap();
            assert!(item.id > last);
            last = item.id;
        }
        svc.delete(last).await.unwrap();
        let next = svc.create(ItemInput::new("after", "delete")).await.unwrap();
        assert!(next.id > last);
    }

    #[tokio::test]
    async fn deleted_item_cannot_be_updated_or_deleted_again() {
        let svc = service();
        let item = svc.create(ItemInput::new("x", "y")).await.unwrap();
        svc.delete(item.id).await.unwrap();
        assert!(svc.update(item.id, ItemInput::new("x2", "y2")).await.unwrap_err().is_not_found());
        assert!(svc.delete(item.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn works_behind_trait_object() {
        let repo: Arc<dyn ItemRepository> = Arc::new(InMemoryItemRepository::default());
        let svc: ItemService<dyn ItemRepository> = ItemService::new(repo);
        let item = svc.create(ItemInput::new("dyn", "object")).await.unwrap();
        assert_eq!(svc.read(item.id).await.unwrap().name, "dyn");
    }
}
