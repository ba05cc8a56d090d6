use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use crate::application::ports::DerivationError;
use crate::application::services::PipelineError;

/// Wrap task data in the uniform success envelope.
pub fn success(data: Value, message: &str) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "data": data,
            "message": message,
        })),
    )
        .into_response()
}

/// A terminal failure with its HTTP status and stable string code. This is
/// the single place failure kinds become statuses; no partial results ever
/// accompany one.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "An unexpected error occurred",
        )
    }

    /// Provider or reply-parse failure, reported with the task's own code.
    pub fn derivation(task_code: &str, error: DerivationError) -> Self {
        tracing::error!(error = %error, task = task_code, "derivation failed");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            task_code,
            error.to_string(),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({
                "status": "error",
                "error": self.code,
                "message": self.message,
            })),
        )
            .into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(error: PipelineError) -> Self {
        use crate::application::ports::BlobStoreError;

        match error {
            PipelineError::InvalidReference(e) => {
                tracing::warn!(error = %e, "rejected file path");
                Self::bad_request("invalid_file_path", "Invalid file path format")
            }
            PipelineError::Storage(BlobStoreError::NotFound(path)) => Self::new(
                StatusCode::NOT_FOUND,
                "file_not_found",
                format!("Blob not found: {path}"),
            ),
            PipelineError::Storage(BlobStoreError::Transport(detail)) => {
                tracing::error!(error = %detail, "blob fetch failed");
                Self::internal()
            }
            PipelineError::Extraction(e) => Self::bad_request("processing_error", e.to_string()),
            PipelineError::EmptyDocument => Self::bad_request(
                "processing_error",
                "Document contains no text content",
            ),
            PipelineError::Internal(detail) => {
                tracing::error!(error = %detail, "pipeline failure");
                Self::internal()
            }
        }
    }
}
