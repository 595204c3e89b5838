//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Generic message returned whenever the pool handle is absent or failed to connect.
pub const DB_UNAVAILABLE: &str = "Database connection failed";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key} '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Pool handle missing, or the single connection attempt failed.
    #[error("Database connection failed")]
    Unavailable,
    /// Raw driver error; its text goes back to the client unchanged.
    #[error("{0}")]
    Db(#[from] sqlx::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unavailable | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Unavailable => "database_unavailable",
            AppError::Db(_) => "database_error",
            AppError::BadRequest(_) => "bad_request",
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.code(), "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
