// src/services/imports.rs
use std::sync::Arc;

use tracing::{error, info, instrument};

use super::{normalize_email, parse_object_id};
use crate::dtos::import::CreateImportRequest;
use crate::error::AppError;
use crate::models::import::ImportRecord;
use crate::repository::{ImportRepository, ProductRepository};

#[derive(Clone)]
pub struct ImportService {
    imports: Arc<dyn ImportRepository>,
    products: Arc<dyn ProductRepository>,
}

impl ImportService {
    pub fn new(imports: Arc<dyn ImportRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { imports, products }
    }

    /// Takes `quantity` units of a product for a user.
    ///
    /// Stock is taken with a guarded decrement before the ledger row is
    /// written, so concurrent imports can never drive `availableQuantity`
    /// below zero. A failed ledger insert gives the stock back.
    #[instrument(skip(self, req), fields(quantity = ?req.quantity))]
    pub async fn create_import(
        &self,
        product_id: &str,
        req: CreateImportRequest,
    ) -> Result<ImportRecord, AppError> {
        let id = parse_object_id(product_id)?;

        let product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        let quantity = req
            .quantity
            .filter(|q| *q > 0 && *q <= product.available_quantity)
            .ok_or_else(|| AppError::validation("Invalid quantity"))?;

        let user_email = normalize_email(req.user_email.as_deref())
            .map(str::to_string)
            .ok_or_else(|| AppError::validation("Missing userEmail"))?;

        if !self.products.take_stock(id, quantity).await? {
            return Err(AppError::validation("Invalid quantity"));
        }

        let record = ImportRecord::snapshot(&product, quantity, user_email);
        if let Err(err) = self.imports.insert(&record).await {
            if let Err(restore_err) = self.products.restore_stock(id, quantity).await {
                error!(%id, quantity, error = %restore_err, "Failed to restore stock after import insert failure");
            }
            return Err(err.into());
        }

        info!(import_id = %record.id, %id, quantity, "Product imported");
        Ok(record)
    }

    #[instrument(skip(self))]
    pub async fn list_imports_by_user(
        &self,
        email: Option<&str>,
    ) -> Result<Vec<ImportRecord>, AppError> {
        match normalize_email(email) {
            Some(email) => Ok(self.imports.list_by_user(email).await?),
            None => Ok(Vec::new()),
        }
    }

    /// Removes the ledger row only; the product's stock is not given back.
    #[instrument(skip(self))]
    pub async fn delete_import(&self, id: &str) -> Result<(), AppError> {
        let id = parse_object_id(id)?;

        if self.imports.delete(id).await? == 0 {
            return Err(AppError::not_found("Product not found"));
        }
        Ok(())
    }
}
