// src/services/catalog.rs
use std::sync::Arc;

use tracing::instrument;

use super::parse_object_id;
use crate::error::AppError;
use crate::models::product::Product;
use crate::repository::ProductRepository;

#[derive(Clone)]
pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Newest first. `None` (or a non-positive limit) returns everything.
    #[instrument(skip(self))]
    pub async fn list_products(&self, limit: Option<i64>) -> Result<Vec<Product>, AppError> {
        let limit = limit.filter(|l| *l > 0);
        Ok(self.products.list(limit).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> Result<Product, AppError> {
        let id = parse_object_id(id)?;
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))
    }
}
