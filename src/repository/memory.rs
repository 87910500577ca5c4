//! In-memory repositories, used with `STORE_BACKEND=memory` and in tests.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::Mutex;

use super::{ExportRepository, ImportRepository, ProductRepository};
use crate::error::StoreResult;
use crate::models::import::ImportRecord;
use crate::models::product::{ExportRecord, Product, ProductChanges};

#[derive(Default)]
pub struct MemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn list(&self, limit: Option<i64>) -> StoreResult<Vec<Product>> {
        let mut products = self.products.lock().await.clone();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = limit.and_then(|l| usize::try_from(l).ok()) {
            products.truncate(limit);
        }
        Ok(products)
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Product>> {
        let products = self.products.lock().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, product: &Product) -> StoreResult<()> {
        self.products.lock().await.push(product.clone());
        Ok(())
    }

    async fn update_fields(&self, id: ObjectId, changes: &ProductChanges) -> StoreResult<u64> {
        let mut products = self.products.lock().await;
        let modified = products
            .iter_mut()
            .find(|p| p.id == id)
            .map(|p| changes.apply(p))
            .unwrap_or(false);
        Ok(u64::from(modified))
    }

    async fn delete(&self, id: ObjectId) -> StoreResult<u64> {
        let mut products = self.products.lock().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok((before - products.len()) as u64)
    }

    async fn take_stock(&self, id: ObjectId, quantity: i64) -> StoreResult<bool> {
        let mut products = self.products.lock().await;
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) if product.available_quantity >= quantity => {
                product.available_quantity -= quantity;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn restore_stock(&self, id: ObjectId, quantity: i64) -> StoreResult<()> {
        let mut products = self.products.lock().await;
        if let Some(product) = products.iter_mut().find(|p| p.id == id) {
            product.available_quantity += quantity;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryExportRepository {
    records: Mutex<Vec<ExportRecord>>,
}

#[async_trait]
impl ExportRepository for MemoryExportRepository {
    async fn insert(&self, record: &ExportRecord) -> StoreResult<()> {
        self.records.lock().await.push(record.clone());
        Ok(())
    }

    async fn list_by_user(&self, email: &str) -> StoreResult<Vec<ExportRecord>> {
        let records = self.records.lock().await;
        Ok(records
            .iter()
            .filter(|r| r.user_email.as_deref() == Some(email))
            .cloned()
            .collect())
    }

    async fn update_fields(&self, id: ObjectId, changes: &ProductChanges) -> StoreResult<u64> {
        let mut records = self.records.lock().await;
        let modified = records
            .iter_mut()
            .find(|r| r.id == id)
            .map(|r| changes.apply(r))
            .unwrap_or(false);
        Ok(u64::from(modified))
    }

    async fn delete(&self, id: ObjectId) -> StoreResult<u64> {
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok((before - records.len()) as u64)
    }
}

#[derive(Default)]
pub struct MemoryImportRepository {
    records: Mutex<Vec<ImportRecord>>,
}

#[async_trait]
impl ImportRepository for MemoryImportRepository {
    async fn insert(&self, record: &ImportRecord) -> StoreResult<()> {
        self.records.lock().await.push(record.clone());
        Ok(())
    }

    async fn list_by_user(&self, email: &str) -> StoreResult<Vec<ImportRecord>> {
        let records = self.records.lock().await;
        Ok(records
            .iter()
            .filter(|r| r.user_email == email)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: ObjectId) -> StoreResult<u64> {
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok((before - records.len()) as u64)
    }
}
