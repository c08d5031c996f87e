use async_trait::async_trait;

use super::domain::{Item, ItemInput};
use crate::errors::ServiceError;

/// Repository abstraction for item persistence.
///
/// Every write runs in its own unit of work: committed on success,
/// rolled back on any failure.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create(&self, input: &ItemInput) -> Result<Item, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Item>, ServiceError>;
    /// `Ok(None)` when no row has `id`.
    async fn update(&self, id: i32, input: &ItemInput) -> Result<Option<Item>, ServiceError>;
    /// `Ok(false)` when no row has `id`.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct State {
        rows: BTreeMap<i32, Item>,
        last_id: i32,
    }

    /// Ids start at 1 and are never reused until [`InMemoryItemRepository::reset`].
    #[derive(Default)]
    pub struct InMemoryItemRepository {
        state: Mutex<State>,
    }

    impl InMemoryItemRepository {
        fn lock(&self) -> MutexGuard<'_, State> {
            self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }

        /// Drop all rows and restart the id sequence.
        pub fn reset(&self) {
            *self.lock() = State::default();
        }

        pub fn len(&self) -> usize {
            self.lock().rows.len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl ItemRepository for InMemoryItemRepository {
        async fn create(&self, input: &ItemInput) -> Result<Item, ServiceError> {
            let mut state = self.lock();
            state.last_id += 1;
            let item = Item { id: state.last_id, name: input.name.clone(), description: input.description.clone() };
            state.rows.insert(item.id, item.clone());
            Ok(item)
        }

        async fn get(&self, id: i32) -> Result<Option<Item>, ServiceError> {
            Ok(self.lock().rows.get(&id).cloned())
        }

        async fn update(&self, id: i32, input: &ItemInput) -> Result<Option<Item>, ServiceError> {
            let mut state = self.lock();
            Ok(state.rows.get_mut(&id).map(|row| {
                row.name = input.name.clone();
                row.description = input.description.clone();
                row.clone()
            }))
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.lock().rows.remove(&id).is_some())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::InMemoryItemRepository;
    use super::*;

    #[tokio::test]
    async fn in_memory_reset_restarts_ids() {
        let repo = InMemoryItemRepository::default();
        assert!(repo.is_empty());
        repo.create(&ItemInput::new("a", "b")).await.unwrap();
        repo.create(&ItemInput::new("c", "d")).await.unwrap();
        assert_eq!(repo.len(), 2);

        repo.reset();
        assert!(repo.is_empty());
        assert_eq!(repo.create(&ItemInput::new("e", "f")).await.unwrap().id, 1);
    }
}
