// src/dtos/export.rs
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::product::ProductChanges;

/// Body of `POST /exports`. Only `name` and `image` are required; the rest is
/// carried onto both the export row and the mirrored product.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExportRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub origin_country: Option<String>,
    pub category: Option<String>,
    pub available_quantity: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub user_email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExportRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub origin_country: Option<String>,
    pub category: Option<String>,
    pub available_quantity: Option<i64>,
}

impl From<UpdateExportRequest> for ProductChanges {
    fn from(req: UpdateExportRequest) -> Self {
        Self {
            name: req.name,
            image: req.image,
            price: req.price,
            rating: req.rating,
            origin_country: req.origin_country,
            category: req.category,
            available_quantity: req.available_quantity,
        }
    }
}
