// src/handlers/export.rs
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use crate::dtos::export::{CreateExportRequest, UpdateExportRequest};
use crate::dtos::product::ProductResponse;
use crate::dtos::{EmailQuery, MessageResponse};
use crate::error::AppError;
use crate::state::AppState;

// ==================== Create Export ====================

#[instrument(skip(exports, payload))]
pub async fn create_export(
    State(AppState { exports, .. }): State<AppState>,
    payload: Result<Json<CreateExportRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(payload) = payload?;
    let id = exports.create_export(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            success: true,
            message: "Product exported successfully".to_string(),
            inserted_id: Some(id.to_hex()),
        }),
    ))
}

// ==================== List Exports ====================

#[instrument(skip(exports))]
pub async fn list_exports(
    State(AppState { exports, .. }): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let records = exports.list_exports_by_user(params.email.as_deref()).await?;
    Ok(Json(records.into_iter().map(ProductResponse::from).collect()))
}

// ==================== Update Export ====================

#[instrument(skip(exports, payload))]
pub async fn update_export(
    Path(id): Path<String>,
    State(AppState { exports, .. }): State<AppState>,
    payload: Result<Json<UpdateExportRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload?;
    exports.update_export(&id, payload.into()).await?;
    Ok(Json(MessageResponse::ok("Product updated successfully")))
}

// ==================== Delete Export ====================

#[instrument(skip(exports))]
pub async fn delete_export(
    Path(id): Path<String>,
    State(AppState { exports, .. }): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    exports.delete_export(&id).await?;
    Ok(Json(MessageResponse::ok("Product deleted successfully")))
}
