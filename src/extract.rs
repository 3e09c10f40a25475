//! Document text extraction.
//!
//! Extraction is the only fallible step before parsing. Failures are final:
//! no partial text is returned and the parser is never run on them.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::{debug, warn};

/// Error raised when a buffer cannot be turned into text.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document is empty")]
    Empty,

    #[error("document could not be read: {0}")]
    Unreadable(String),

    #[error("document is malformed: {0}")]
    Malformed(String),
}

/// Converts a binary document into plain text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// PDF extractor backed by `pdf-extract`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::Empty);
        }

        // pdf-extract panics on some malformed inputs instead of erroring.
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }))
        .map_err(|payload| ExtractionError::Malformed(panic_message(payload.as_ref())))?;

        let text = result.map_err(|e| ExtractionError::Unreadable(e.to_string()))?;
        debug!(bytes = bytes.len(), chars = text.chars().count(), "extracted PDF text");
        Ok(text)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "PDF library panicked".to_string());
    warn!(%message, "PDF extraction panicked");
    message
}
