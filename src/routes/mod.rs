pub mod exports;
pub mod imports;
pub mod products;

use axum::Router;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(exports::routes())
        .merge(imports::routes())
}
