//! OpenAI Speech-to-Text transcriber adapter

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::transcription::{Transcript, TranscriptionRequest};

/// OpenAI API base URL
const API_BASE_URL: &str = "https://api.openai.com/v1";

// Error envelope returned by the OpenAI API

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// OpenAI API transcriber.
///
/// Issues a single multipart POST to `/audio/transcriptions` with bearer auth
/// and returns the response body verbatim in the requested format.
pub struct OpenAiTranscriber {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiTranscriber {
    /// Create a new transcriber with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a transcriber against a custom endpoint (compatible gateways, tests)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the transcriptions endpoint URL
    fn api_url(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url)
    }

    /// Build the multipart form for one request
    fn build_form(
        request: &TranscriptionRequest,
        audio_data: Vec<u8>,
    ) -> Result<reqwest::multipart::Form, TranscriptionError> {
        let file_part = reqwest::multipart::Part::bytes(audio_data)
            .file_name(request.upload_file_name())
            .mime_str(request.mime_type())
            .map_err(|e| TranscriptionError::RequestFailed(format!("invalid upload part: {e}")))?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", request.model().to_string())
            .text("response_format", request.format().as_str().to_string());

        if let Some(language) = request.language() {
            form = form.text("language", language.to_string());
        }

        Ok(form)
    }

    /// Pull the human-readable message out of an error body
    fn error_message(body: &str) -> String {
        serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| {
                if body.is_empty() {
                    "no error detail returned".to_string()
                } else {
                    body.to_string()
                }
            })
    }
}

#[async_trait]
impl Transcriber for OpenAiTranscriber {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<Transcript, TranscriptionError> {
        let audio_data = tokio::fs::read(request.upload_path())
            .await
            .map_err(|e| TranscriptionError::RequestFailed(format!("failed to read audio file: {e}")))?;

        let form = Self::build_form(request, audio_data)?;

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    TranscriptionError::RequestFailed(
                        "failed to connect to the OpenAI API, check your internet connection"
                            .to_string(),
                    )
                } else if e.is_timeout() {
                    TranscriptionError::RequestFailed(
                        "request to the OpenAI API timed out".to_string(),
                    )
                } else {
                    TranscriptionError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(TranscriptionError::AuthenticationFailed);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::RemoteService {
                status: status.as_u16(),
                message: Self::error_message(&body),
            });
        }

        // The body already is the requested serialization (text, json, srt,
        // vtt or verbose_json); pass it through untouched.
        let payload = response
            .text()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(format!("failed to read response: {e}")))?;

        Ok(Transcript::new(payload))
    }
}
