//! Item module: three-layer architecture (domain, repository, service),
//! plus the startup maintenance routine for the `items` table.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;
pub mod maintenance;

pub use domain::{Item, ItemInput};
pub use repository::ItemRepository;
pub use service::ItemService;
