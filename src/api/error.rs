//! HTTP-facing failures.
//!
//! Each variant carries a fixed status code and a short client message.
//! Underlying causes are logged by the handlers and never sent to clients.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::model::ErrorResponse;

/// Failure of a song request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid input format")]
    InvalidInput,

    #[error("Invalid pagination parameters")]
    InvalidPagination,

    #[error("Song not found")]
    NotFound,

    #[error("External service error")]
    Upstream,

    #[error("Database error")]
    Database,

    #[error("Failed to save song")]
    SaveFailed,

    #[error("Deletion failed")]
    DeleteFailed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput | Self::InvalidPagination => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Upstream => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database | Self::SaveFailed | Self::DeleteFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
