// src/handlers/import.rs
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use tracing::instrument;

use crate::dtos::import::{CreateImportRequest, ImportResponse};
use crate::dtos::{EmailQuery, MessageResponse};
use crate::error::AppError;
use crate::state::AppState;

// POST /imports/:id - Take stock of a product for a user
#[instrument(skip(imports, payload))]
pub async fn create_import(
    Path(id): Path<String>,
    State(AppState { imports, .. }): State<AppState>,
    payload: Result<Json<CreateImportRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload?;
    imports.create_import(&id, payload).await?;
    Ok(Json(MessageResponse::ok("Imported successfully")))
}

// GET /imports?email= - Imports recorded for a user
#[instrument(skip(imports))]
pub async fn list_imports(
    State(AppState { imports, .. }): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<Vec<ImportResponse>>, AppError> {
    let records = imports.list_imports_by_user(params.email.as_deref()).await?;
    Ok(Json(records.into_iter().map(ImportResponse::from).collect()))
}

// DELETE /imports/:id - Remove a ledger row (stock is not restored)
#[instrument(skip(imports))]
pub async fn delete_import(
    Path(id): Path<String>,
    State(AppState { imports, .. }): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    imports.delete_import(&id).await?;
    Ok(Json(MessageResponse::ok("Product deleted successfully")))
}
