use axum::{
    routing::{get, put},
    Router,
};
use crate::handlers::export::{create_export, delete_export, list_exports, update_export};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/exports", get(list_exports).post(create_export))
        .route("/exports/{id}", put(update_export).delete(delete_export))
}
