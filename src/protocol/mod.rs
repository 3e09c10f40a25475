//! JSON bodies exchanged with the upload endpoints.

mod messages;

pub use messages::*;
