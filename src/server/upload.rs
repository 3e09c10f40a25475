//! Upload handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, rejection::BytesRejection, Multipart, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::{info, warn};
use uuid::Uuid;

use crate::parser::parse_with;
use crate::protocol::{UploadResponse, UPLOAD_FIELD};

use super::error::ApiError;
use super::server::ServerState;

/// `POST /upload`: multipart form with the document in the `mcqPdf` field.
#[tracing::instrument(name = "upload", skip_all, fields(request_id = %Uuid::new_v4()))]
pub(super) async fn upload_multipart(
    State(state): State<ServerState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        info!(%file_name, bytes = bytes.len(), "received document");
        return extract_and_parse(&state, bytes).await.map(Json);
    }

    Err(ApiError::MissingFile)
}

/// `POST /upload/base64`: the document as a base64 request body.
#[tracing::instrument(name = "upload_base64", skip_all, fields(request_id = %Uuid::new_v4()))]
pub(super) async fn upload_base64(
    State(state): State<ServerState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let body = body?;
    let bytes = decode_base64_body(&body).map_err(ApiError::InvalidBody)?;
    info!(bytes = bytes.len(), "received document");
    extract_and_parse(&state, Bytes::from(bytes)).await.map(Json)
}

pub(super) async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Decodes a base64 body, accepting an optional `data:...;base64,` prefix.
pub fn decode_base64_body(body: &[u8]) -> Result<Vec<u8>, base64::DecodeError> {
    let body = body.trim_ascii();
    let payload = match body.iter().position(|&b| b == b',') {
        Some(comma) if body.starts_with(b"data:") => &body[comma + 1..],
        _ => body,
    };
    STANDARD.decode(payload)
}

async fn extract_and_parse(state: &ServerState, bytes: Bytes) -> Result<UploadResponse, ApiError> {
    let extractor = Arc::clone(&state.extractor);
    let text = tokio::task::spawn_blocking(move || extractor.extract(&bytes)).await??;

    let questions = parse_with(&text, &state.grammar);
    for (index, question) in questions.iter().enumerate() {
        if question.correct_count() > 1 {
            warn!(index, "question has several correct options, the first one counts");
        }
    }
    info!(questions = questions.len(), "parsed upload");

    Ok(UploadResponse { questions })
}
