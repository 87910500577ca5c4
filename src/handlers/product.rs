// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::instrument;

use crate::dtos::product::{ListProductsQuery, ProductResponse};
use crate::error::AppError;
use crate::state::AppState;

// GET /products?limit=N - Newest products first
#[instrument(skip(catalog))]
pub async fn get_products(
    State(AppState { catalog, .. }): State<AppState>,
    Query(params): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = catalog.list_products(params.limit()).await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

// GET /products/:id - Get single product
#[instrument(skip(catalog))]
pub async fn get_product(
    Path(id): Path<String>,
    State(AppState { catalog, .. }): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = catalog.get_product(&id).await?;
    Ok(Json(ProductResponse::from(product)))
}
