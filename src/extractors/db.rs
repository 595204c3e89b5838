//! Await the shared pool before a handler runs.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::PgPool;

/// Resolved pool for the current request. Rejects with `AppError::Unavailable` when the
/// handle is absent or its connection attempt failed.
#[derive(Clone, Debug)]
pub struct Db(pub PgPool);

#[async_trait]
impl FromRequestParts<AppState> for Db {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let handle = state.pool.as_ref().ok_or(AppError::Unavailable)?;
        handle.pool().await.map(Db).ok_or(AppError::Unavailable)
    }
}
