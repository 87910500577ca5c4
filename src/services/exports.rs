// src/services/exports.rs
use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, DateTime};
use tracing::{info, instrument, warn};

use super::{normalize_email, parse_object_id};
use crate::dtos::export::CreateExportRequest;
use crate::error::AppError;
use crate::models::product::{ExportRecord, Product, ProductChanges};
use crate::repository::{ExportRepository, ProductRepository};

/// Export rows and their mirrored products share one `_id`.
#[derive(Clone)]
pub struct ExportService {
    exports: Arc<dyn ExportRepository>,
    products: Arc<dyn ProductRepository>,
}

impl ExportService {
    pub fn new(exports: Arc<dyn ExportRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { exports, products }
    }

    /// Writes the export row, then the mirrored product. Returns the shared id.
    #[instrument(skip(self, req), fields(name = ?req.name))]
    pub async fn create_export(&self, req: CreateExportRequest) -> Result<ObjectId, AppError> {
        let name = required(req.name)?;
        let image = required(req.image)?;

        if req.available_quantity.is_some_and(|q| q < 0) {
            return Err(AppError::validation("availableQuantity cannot be negative"));
        }

        let record: ExportRecord = Product {
            id: ObjectId::new(),
            name,
            image,
            price: req.price,
            rating: req.rating,
            origin_country: req.origin_country,
            category: req.category,
            available_quantity: req.available_quantity.unwrap_or(0),
            created_at: Some(
                req.created_at
                    .map(DateTime::from_chrono)
                    .unwrap_or_else(DateTime::now),
            ),
            user_email: req.user_email,
        };

        self.exports.insert(&record).await?;
        self.products.insert(&record).await?;

        info!(export_id = %record.id, "Product exported");
        Ok(record.id)
    }

    #[instrument(skip(self))]
    pub async fn list_exports_by_user(
        &self,
        email: Option<&str>,
    ) -> Result<Vec<ExportRecord>, AppError> {
        match normalize_email(email) {
            Some(email) => Ok(self.exports.list_by_user(email).await?),
            None => Ok(Vec::new()),
        }
    }

    /// Merges `changes` into the product and the export row. Not found only
    /// when neither document changed.
    #[instrument(skip(self, changes))]
    pub async fn update_export(&self, id: &str, changes: ProductChanges) -> Result<(), AppError> {
        let id = parse_object_id(id)?;

        if changes.available_quantity.is_some_and(|q| q < 0) {
            return Err(AppError::validation("availableQuantity cannot be negative"));
        }
        if changes.is_empty() {
            return Err(AppError::not_found("Product not found or no change"));
        }

        let products_modified = self.products.update_fields(id, &changes).await?;
        let exports_modified = self.exports.update_fields(id, &changes).await?;

        if products_modified + exports_modified == 0 {
            return Err(AppError::not_found("Product not found or no change"));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_export(&self, id: &str) -> Result<(), AppError> {
        let id = parse_object_id(id)?;

        let exports_deleted = self.exports.delete(id).await?;
        let products_deleted = self.products.delete(id).await?;
        if products_deleted == 0 {
            warn!(%id, "No mirrored product row to delete");
        }

        if exports_deleted == 0 {
            return Err(AppError::not_found("Product not found"));
        }
        Ok(())
    }
}

fn required(value: Option<String>) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::validation("Missing fields"))
}
