//! API error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use retail_core::ReportError;
use retail_shared::AppError;
use serde_json::json;
use tracing::error;

/// An error that renders as `{ "error": <code>, "message": <text> }`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// 404 with the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self(AppError::NotFound(message.into()))
    }

    /// 400 with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self(AppError::Validation(message.into()))
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl From<ReportError> for ApiError {
    fn from(e: ReportError) -> Self {
        match e {
            ReportError::EmptyInput(what) => {
                Self::not_found(format!("No data available to compute {what}"))
            }
            ReportError::Source(message) => Self(AppError::Database(message)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if self.0.is_client_error() {
            self.0.message().to_string()
        } else {
            error!(error = %self.0, "Request failed");
            "An error occurred".to_string()
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code().to_lowercase(),
                "message": message
            })),
        )
            .into_response()
    }
}
