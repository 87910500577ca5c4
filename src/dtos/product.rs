// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::models::product::Product;

#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    /// Kept as text: anything that is not a positive integer means "no limit".
    pub limit: Option<String>,
}

impl ListProductsQuery {
    pub fn limit(&self) -> Option<i64> {
        self.limit
            .as_deref()
            .and_then(|l| l.trim().parse::<i64>().ok())
            .filter(|l| *l > 0)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub origin_country: Option<String>,
    pub category: Option<String>,
    pub available_quantity: i64,
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_hex(),
            name: product.name,
            image: product.image,
            price: product.price,
            rating: product.rating,
            origin_country: product.origin_country,
            category: product.category,
            available_quantity: product.available_quantity,
            created_at: product.created_at.map(|dt| dt.to_chrono().to_rfc3339()),
            user_email: product.user_email,
        }
    }
}
