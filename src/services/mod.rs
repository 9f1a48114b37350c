// Service exports
pub mod cache;
pub mod catalog;
pub mod memory;
pub mod postgres;

pub use cache::{CacheManager, CacheKey, CacheError, CacheStats};
pub use catalog::{CatalogStore, StoreError};
pub use memory::{MemoryCatalog, CatalogSeed};
pub use postgres::PostgresClient;
