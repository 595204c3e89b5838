//! Confirmation envelope for write operations.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

pub fn message(status: StatusCode, text: &str) -> (StatusCode, Json<MessageBody>) {
    (
        status,
        Json(MessageBody {
            message: text.to_string(),
        }),
    )
}

/// 201 with a confirmation message. The new record's id is not echoed.
pub fn created(text: &str) -> (StatusCode, Json<MessageBody>) {
    message(StatusCode::CREATED, text)
}

pub fn ok(text: &str) -> (StatusCode, Json<MessageBody>) {
    message(StatusCode::OK, text)
}
