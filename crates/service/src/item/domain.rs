use serde::{Deserialize, Serialize};

/// Create/update payload. Both fields are required strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInput {
    pub name: String,
    pub description: String,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into() }
    }
}

/// Domain item (business view). `id` is always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<models::item::Model> for Item {
    fn from(m: models::item::Model) -> Self {
        Self { id: m.id, name: m.name, description: m.description }
    }
}
