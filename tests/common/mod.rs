#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use mcq_quiz::{ExtractionError, TextExtractor};

/// Treats the uploaded bytes as already-extracted UTF-8 text.
pub struct Utf8Extractor;

impl TextExtractor for Utf8Extractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        String::from_utf8(bytes.to_vec()).map_err(|e| ExtractionError::Unreadable(e.to_string()))
    }
}

/// Rejects every document.
pub struct FailingExtractor;

impl TextExtractor for FailingExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<String, ExtractionError> {
        Err(ExtractionError::Malformed("trailer not found".to_string()))
    }
}

pub const SAMPLE: &str = "Answer key below\nQ: 2+2?\nA) 3\n*B) 4\nC) 5\nQ: Capital of France?\n*A) Paris\nB) Rome\n";

/// A temp file removed on drop, so failing tests do not leak it.
pub struct TempFile(PathBuf);

impl TempFile {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

/// Writes `content` to a unique temp file with the given extension.
pub fn temp_file(extension: &str, content: &[u8]) -> TempFile {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "mcq_quiz_test_{}_{}.{}",
        std::process::id(),
        id,
        extension
    ));
    std::fs::write(&path, content).expect("failed to write temp file");
    TempFile(path)
}
