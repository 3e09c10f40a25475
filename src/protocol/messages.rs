//! Response bodies for the upload endpoints.
//!
//! Success is `{"questions": [...]}`, failure is `{"error": "..."}` with a
//! non-2xx status.

use serde::{Deserialize, Serialize};

use crate::models::Question;

/// Multipart field carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "mcqPdf";

/// Path of the multipart upload endpoint.
pub const UPLOAD_PATH: &str = "/upload";

/// Path of the raw base64 upload endpoint.
pub const UPLOAD_BASE64_PATH: &str = "/upload/base64";

/// Default server address.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:3000";

/// Default upload size limit (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Parsed questions returned on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub questions: Vec<Question>,
}

/// Error body returned with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
