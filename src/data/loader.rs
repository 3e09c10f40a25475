use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::extract::{ExtractionError, PdfExtractor, TextExtractor};
use crate::models::Question;
use crate::parser::{parse_with, Grammar};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text from {}: {source}", path.display())]
    Extraction {
        path: PathBuf,
        #[source]
        source: ExtractionError,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain at least one question", path.display())]
    Empty { path: PathBuf },
}

/// JSON pools are either a bare list or an upload response body.
#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionsFile {
    List(Vec<Question>),
    Response { questions: Vec<Question> },
}

/// Loads a question pool, choosing the reader from the file extension:
/// `.pdf` is extracted then parsed, `.json` is deserialized, anything else
/// is parsed as plain text.
pub fn load_questions<P: AsRef<Path>>(path: P, grammar: Grammar) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let questions = match extension(path).as_deref() {
        Some("json") => {
            let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let file: QuestionsFile =
                serde_json::from_str(&content).map_err(|source| LoadError::Json {
                    path: path.to_path_buf(),
                    source,
                })?;
            match file {
                QuestionsFile::List(questions) | QuestionsFile::Response { questions } => questions,
            }
        }
        _ => parse_with(&read_document_text(path)?, &grammar),
    };

    if questions.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), questions = questions.len(), "loaded question pool");
    Ok(questions)
}

/// Reads the plain text of a document: `.pdf` files go through
/// [`PdfExtractor`], anything else is read as UTF-8.
pub fn read_document_text<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    let path = path.as_ref();
    let read_error = |source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    if extension(path).as_deref() == Some("pdf") {
        let bytes = fs::read(path).map_err(read_error)?;
        PdfExtractor
            .extract(&bytes)
            .map_err(|source| LoadError::Extraction {
                path: path.to_path_buf(),
                source,
            })
    } else {
        fs::read_to_string(path).map_err(read_error)
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}
