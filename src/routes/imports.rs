use axum::{
    routing::{delete, get},
    Router,
};
use crate::handlers::import::{create_import, delete_import, list_imports};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/imports", get(list_imports))
        .route("/imports/{id}", delete(delete_import).post(create_import))
}
