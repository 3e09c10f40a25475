//! Router and listener.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::extract::{PdfExtractor, TextExtractor};
use crate::parser::Grammar;
use crate::protocol::{UPLOAD_BASE64_PATH, UPLOAD_PATH};

use super::upload::{method_not_allowed, upload_base64, upload_multipart};

/// State shared by the upload handlers.
#[derive(Clone)]
pub struct ServerState {
    pub(super) extractor: Arc<dyn TextExtractor>,
    pub(super) grammar: Grammar,
}

impl ServerState {
    /// State backed by the PDF extractor.
    pub fn new(grammar: Grammar) -> Self {
        Self::with_extractor(PdfExtractor, grammar)
    }

    pub fn with_extractor(extractor: impl TextExtractor + 'static, grammar: Grammar) -> Self {
        Self {
            extractor: Arc::new(extractor),
            grammar,
        }
    }
}

/// Build the upload routes.
pub fn router(state: ServerState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route(
            UPLOAD_PATH,
            post(upload_multipart).fallback(method_not_allowed),
        )
        .route(
            UPLOAD_BASE64_PATH,
            post(upload_base64).fallback(method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

/// Serve uploads until Ctrl-C.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let app = router(ServerState::new(config.grammar), config.max_upload_bytes);

    let listener = TcpListener::bind(config.address).await?;
    info!(
        address = %listener.local_addr()?,
        grammar = ?config.grammar,
        max_upload_bytes = config.max_upload_bytes,
        "upload server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
