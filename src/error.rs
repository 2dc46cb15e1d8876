use axum::extract::multipart::MultipartError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum ShopError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("missing `file` field in multipart form")]
    MissingUpload,

    #[error("uploaded file has no filename")]
    MissingFilename,
}

impl IntoResponse for ShopError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            ShopError::Database(_) | ShopError::Io(_) => {
                error!(error = %self, "request failed");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }
            ShopError::Multipart(err) => {
                let status = err.status();
                let body = ApiErrorBody {
                    code: "INVALID_MULTIPART".to_string(),
                    message: err.body_text(),
                };
                (status, body)
            }
            ShopError::MissingUpload | ShopError::MissingFilename => {
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                let body = ApiErrorBody {
                    code: "VALIDATION_ERROR".to_string(),
                    message: self.to_string(),
                };
                (status, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
