//! MongoDB implementations of the repository traits

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::FindOptions,
    Collection, Database,
};
use tracing::instrument;

use super::{ExportRepository, ImportRepository, ProductRepository};
use crate::database::{EXPORTS_COLLECTION, IMPORTS_COLLECTION, PRODUCTS_COLLECTION};
use crate::error::StoreResult;
use crate::models::import::ImportRecord;
use crate::models::product::{ExportRecord, Product, ProductChanges};

pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Product>(PRODUCTS_COLLECTION),
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn list(&self, limit: Option<i64>) -> StoreResult<Vec<Product>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .limit(limit)
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let products: Vec<Product> = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Product>> {
        let product = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(product)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn insert(&self, product: &Product) -> StoreResult<()> {
        self.collection.insert_one(product).await?;
        Ok(())
    }

    #[instrument(skip(self, changes))]
    async fn update_fields(&self, id: ObjectId, changes: &ProductChanges) -> StoreResult<u64> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": changes.to_set_document() })
            .await?;
        Ok(result.modified_count)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> StoreResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    #[instrument(skip(self))]
    async fn take_stock(&self, id: ObjectId, quantity: i64) -> StoreResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id, "availableQuantity": { "$gte": quantity } },
                doc! { "$inc": { "availableQuantity": -quantity } },
            )
            .await?;
        Ok(result.modified_count > 0)
    }

    #[instrument(skip(self))]
    async fn restore_stock(&self, id: ObjectId, quantity: i64) -> StoreResult<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$inc": { "availableQuantity": quantity } },
            )
            .await?;
        Ok(())
    }
}

pub struct MongoExportRepository {
    collection: Collection<ExportRecord>,
}

impl MongoExportRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<ExportRecord>(EXPORTS_COLLECTION),
        }
    }
}

#[async_trait]
impl ExportRepository for MongoExportRepository {
    #[instrument(skip(self, record), fields(export_id = %record.id))]
    async fn insert(&self, record: &ExportRecord) -> StoreResult<()> {
        self.collection.insert_one(record).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, email: &str) -> StoreResult<Vec<ExportRecord>> {
        let cursor = self.collection.find(doc! { "userEmail": email }).await?;
        let records: Vec<ExportRecord> = cursor.try_collect().await?;
        Ok(records)
    }

    #[instrument(skip(self, changes))]
    async fn update_fields(&self, id: ObjectId, changes: &ProductChanges) -> StoreResult<u64> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": changes.to_set_document() })
            .await?;
        Ok(result.modified_count)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> StoreResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }
}

pub struct MongoImportRepository {
    collection: Collection<ImportRecord>,
}

impl MongoImportRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<ImportRecord>(IMPORTS_COLLECTION),
        }
    }
}

#[async_trait]
impl ImportRepository for MongoImportRepository {
    #[instrument(skip(self, record), fields(import_id = %record.id, product_id = %record.product_id))]
    async fn insert(&self, record: &ImportRecord) -> StoreResult<()> {
        self.collection.insert_one(record).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, email: &str) -> StoreResult<Vec<ImportRecord>> {
        let cursor = self.collection.find(doc! { "userEmail": email }).await?;
        let records: Vec<ImportRecord> = cursor.try_collect().await?;
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> StoreResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }
}
