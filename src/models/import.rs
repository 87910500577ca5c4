// src/models/import.rs
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use super::lenient;
use super::product::Product;

/// One stock intake by a user, stored in the `imports` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub imported_quantity: i64,
    pub user_email: String,
    pub imported_at: DateTime,
}

impl ImportRecord {
    /// Snapshots the product's display fields at import time.
    pub fn snapshot(product: &Product, quantity: i64, user_email: String) -> Self {
        Self {
            id: ObjectId::new(),
            product_id: product.id.to_hex(),
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price,
            rating: product.rating,
            origin_country: product.origin_country.clone(),
            category: product.category.clone(),
            imported_quantity: quantity,
            user_email,
            imported_at: DateTime::now(),
        }
    }
}
