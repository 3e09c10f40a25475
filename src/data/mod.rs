mod loader;

pub use loader::{load_questions, read_document_text, LoadError};
