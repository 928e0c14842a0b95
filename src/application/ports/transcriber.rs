//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::{Transcript, TranscriptionRequest};

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Authentication failed: the API key is missing, invalid or expired")]
    AuthenticationFailed,

    #[error("Transcription request failed: {0}")]
    RequestFailed(String),

    #[error("Transcription service error (status {status}): {message}")]
    RemoteService { status: u16, message: String },
}

/// Port for the remote speech-to-text service
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Submit one file for transcription and return the payload verbatim.
    ///
    /// An empty payload is success, not an error.
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<Transcript, TranscriptionError>;
}
