//! Pre-dispatch gate shared by the resource routers.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Reject with 500 when there is no pool handle at all. Only presence is checked: a
/// handle whose connection attempt failed still passes and fails inside the handler.
pub async fn ensure_db_connection(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.pool.is_none() {
        return AppError::Unavailable.into_response();
    }
    next.run(request).await
}
