// src/state.rs
use std::sync::Arc;

use mongodb::Database;

use crate::repository::{
    ExportRepository, ImportRepository, MemoryExportRepository, MemoryImportRepository,
    MemoryProductRepository, MongoExportRepository, MongoImportRepository, MongoProductRepository,
    ProductRepository,
};
use crate::services::{CatalogService, ExportService, ImportService};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub exports: ExportService,
    pub imports: ImportService,
}

impl AppState {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        exports: Arc<dyn ExportRepository>,
        imports: Arc<dyn ImportRepository>,
    ) -> Self {
        Self {
            catalog: CatalogService::new(products.clone()),
            exports: ExportService::new(exports, products.clone()),
            imports: ImportService::new(imports, products),
        }
    }

    pub fn mongo(db: &Database) -> Self {
        Self::new(
            Arc::new(MongoProductRepository::new(db)),
            Arc::new(MongoExportRepository::new(db)),
            Arc::new(MongoImportRepository::new(db)),
        )
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryProductRepository::default()),
            Arc::new(MemoryExportRepository::default()),
            Arc::new(MemoryImportRepository::default()),
        )
    }
}
