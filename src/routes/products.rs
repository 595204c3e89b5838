//! Product resource router, mounted under `/products`.

use crate::handlers::products::{create, delete as delete_handler, list, read, update};
use crate::middleware::ensure_db_connection;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(read).put(update).delete(delete_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), ensure_db_connection))
        .with_state(state)
}
