//! Service layer providing the item CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses the entity mapping in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod item;
#[cfg(test)]
pub mod test_support;
