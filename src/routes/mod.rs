//! Route assembly.

mod common;
mod products;
mod students;

pub use common::common_routes;
pub use products::product_routes;
pub use students::student_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Full application: common routes at the root, resources under `/students` and `/products`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .nest("/students", student_routes(state.clone()))
        .nest("/products", product_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
