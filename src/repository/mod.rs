//! Persistence seams for the three collections.
//!
//! Each trait has a MongoDB implementation used in production and an
//! in-memory one for local runs and tests.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::StoreResult;
use crate::models::import::ImportRecord;
use crate::models::product::{ExportRecord, Product, ProductChanges};

pub use memory::{MemoryExportRepository, MemoryImportRepository, MemoryProductRepository};
pub use mongo::{MongoExportRepository, MongoImportRepository, MongoProductRepository};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Newest first; `None` returns every product.
    async fn list(&self, limit: Option<i64>) -> StoreResult<Vec<Product>>;

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Product>>;

    async fn insert(&self, product: &Product) -> StoreResult<()>;

    /// Returns the number of documents actually modified (0 or 1).
    async fn update_fields(&self, id: ObjectId, changes: &ProductChanges) -> StoreResult<u64>;

    async fn delete(&self, id: ObjectId) -> StoreResult<u64>;

    /// Decrements `availableQuantity` only if at least `quantity` is left.
    /// Returns `false` when the guard did not match.
    async fn take_stock(&self, id: ObjectId, quantity: i64) -> StoreResult<bool>;

    async fn restore_stock(&self, id: ObjectId, quantity: i64) -> StoreResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExportRepository: Send + Sync {
    async fn insert(&self, record: &ExportRecord) -> StoreResult<()>;

    async fn list_by_user(&self, email: &str) -> StoreResult<Vec<ExportRecord>>;

    async fn update_fields(&self, id: ObjectId, changes: &ProductChanges) -> StoreResult<u64>;

    async fn delete(&self, id: ObjectId) -> StoreResult<u64>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImportRepository: Send + Sync {
    async fn insert(&self, record: &ImportRecord) -> StoreResult<()>;

    async fn list_by_user(&self, email: &str) -> StoreResult<Vec<ImportRecord>>;

    async fn delete(&self, id: ObjectId) -> StoreResult<u64>;
}
