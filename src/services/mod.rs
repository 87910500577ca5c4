//! Business rules for the catalog and the two ledgers.

pub mod catalog;
pub mod exports;
pub mod imports;

pub use catalog::CatalogService;
pub use exports::ExportService;
pub use imports::ImportService;

use mongodb::bson::oid::ObjectId;

use crate::error::AppError;

pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id.trim()).map_err(|_| AppError::validation("Invalid id"))
}

/// Missing or blank emails match nothing, so the store is not queried.
pub(crate) fn normalize_email(email: Option<&str>) -> Option<&str> {
    email.map(str::trim).filter(|e| !e.is_empty())
}
