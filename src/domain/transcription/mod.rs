//! Transcription value objects

pub mod request;
pub mod response_format;
pub mod transcript;

pub use request::{TranscriptionRequest, DEFAULT_MODEL};
pub use response_format::ResponseFormat;
pub use transcript::Transcript;
