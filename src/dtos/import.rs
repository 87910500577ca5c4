// src/dtos/import.rs
use serde::{Deserialize, Serialize};

use crate::models::import::ImportRecord;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateImportRequest {
    pub quantity: Option<i64>,
    pub user_email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub origin_country: Option<String>,
    pub category: Option<String>,
    pub imported_quantity: i64,
    pub user_email: String,
    pub imported_at: String,
}

impl From<ImportRecord> for ImportResponse {
    fn from(record: ImportRecord) -> Self {
        Self {
            id: record.id.to_hex(),
            product_id: record.product_id,
            name: record.name,
            image: record.image,
            price: record.price,
            rating: record.rating,
            origin_country: record.origin_country,
            category: record.category,
            imported_quantity: record.imported_quantity,
            user_email: record.user_email,
            imported_at: record.imported_at.to_chrono().to_rfc3339(),
        }
    }
}
