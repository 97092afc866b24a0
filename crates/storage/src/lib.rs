pub mod repository;
pub mod seed;

pub use repository::{
    CatalogRepository, InMemoryRepository, PlannerRepository, Storage, StorageError,
};
