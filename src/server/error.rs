use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::extract::ExtractionError;
use crate::protocol::ErrorResponse;

/// Failure of an upload request, rendered as `{"error": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Invalid file data")]
    InvalidBody(#[source] base64::DecodeError),

    #[error("{}", .0.body_text())]
    Body(#[from] BytesRejection),

    #[error("{}", .0.body_text())]
    MultipartRejected(#[from] MultipartRejection),

    #[error("{}", .0.body_text())]
    Multipart(#[from] MultipartError),

    #[error("Error processing PDF")]
    Extraction(#[from] ExtractionError),

    #[error("Error processing PDF")]
    Task(#[from] tokio::task::JoinError),

    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFile | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Body(e) => e.status(),
            ApiError::MultipartRejected(e) => e.status(),
            ApiError::Multipart(e) => e.status(),
            ApiError::Extraction(_) | ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Extraction(e) => tracing::error!("extraction failed: {e}"),
            ApiError::Task(e) => tracing::error!("extraction task failed: {e}"),
            ApiError::InvalidBody(e) => tracing::warn!("rejecting upload body: {e}"),
            other => tracing::warn!(%status, "rejecting upload: {other}"),
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
