//! HTTP upload service.
//!
//! Receives a document, extracts its text and answers with the parsed
//! questions as JSON.

mod error;
mod server;
mod upload;

pub use error::ApiError;
pub use server::{router, run, ServerState};
pub use upload::decode_base64_body;
