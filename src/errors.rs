use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::booking::BookingError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("{0}")]
    Validation(String),

    #[error("unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Booking(BookingError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Booking(BookingError::Conflict) => StatusCode::CONFLICT,
            AppError::Booking(BookingError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
