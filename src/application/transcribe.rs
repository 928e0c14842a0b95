//! Transcribe file use case

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::media::{
    check_upload_size, classify, ConvertedAudio, InputError, SizeGuardError, SubmitPlan,
};
use crate::domain::transcription::{ResponseFormat, Transcript, TranscriptionRequest};

use super::ports::{ConversionError, Converter, Transcriber, TranscriptionError};

/// MIME type of the converter's mp3 output
const CONVERTED_MIME_TYPE: &str = "audio/mpeg";

/// Errors from the transcribe pipeline.
///
/// Every variant is terminal: the pipeline aborts at the failing stage and no
/// later stage runs.
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    #[error("{0}")]
    InvalidInput(#[from] InputError),

    #[error("{0}")]
    Conversion(#[from] ConversionError),

    #[error("{0}")]
    FileTooLarge(#[from] SizeGuardError),

    #[error("{0}")]
    Transcription(#[from] TranscriptionError),
}

/// Input parameters for the transcribe use case
#[derive(Debug, Clone)]
pub struct TranscribeInput {
    /// Path to the audio/video file to transcribe
    pub input: PathBuf,
    /// Transcription model identifier
    pub model: String,
    /// ISO-639-1 language hint; `None` for auto-detect
    pub language: Option<String>,
    /// Requested transcript serialization
    pub format: ResponseFormat,
}

/// Callbacks for stage status updates
#[derive(Default)]
pub struct TranscribeCallbacks {
    /// Called when conversion to mp3 starts
    pub on_converting_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when conversion ends
    pub on_converting_end: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when the network call starts
    pub on_transcribing_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when the network call ends
    pub on_transcribing_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// One-shot file transcription pipeline.
///
/// Linear stages, no retries: classify the input, convert unsupported formats
/// to mp3, enforce the upload ceiling, then issue exactly one transcription
/// request. The intermediate mp3 (if any) lives for the duration of
/// [`execute`](Self::execute) and is removed when it returns.
pub struct TranscribeFileUseCase<C, T>
where
    C: Converter,
    T: Transcriber,
{
    converter: C,
    transcriber: T,
}

impl<C, T> TranscribeFileUseCase<C, T>
where
    C: Converter,
    T: Transcriber,
{
    /// Create a new use case instance
    pub fn new(converter: C, transcriber: T) -> Self {
        Self {
            converter,
            transcriber,
        }
    }

    /// Execute the transcription pipeline
    pub async fn execute(
        &self,
        input: TranscribeInput,
        callbacks: TranscribeCallbacks,
    ) -> Result<Transcript, PipelineError> {
        // Classify the input format
        let plan = classify(&input.input)?;

        // Convert when the API does not accept the container directly. The
        // handle keeps the temp file alive until the upload is done.
        let (converted, upload_path, mime_type): (Option<ConvertedAudio>, _, _) = match plan {
            SubmitPlan::DirectSubmit(format) => (None, input.input.clone(), format.mime_type()),
            SubmitPlan::NeedsConversion => {
                if let Some(ref cb) = callbacks.on_converting_start {
                    cb();
                }
                let converted = self.converter.convert_to_mp3(&input.input).await?;
                if let Some(ref cb) = callbacks.on_converting_end {
                    cb();
                }
                let path = converted.path().to_path_buf();
                (Some(converted), path, CONVERTED_MIME_TYPE)
            }
        };

        // Enforce the upload ceiling before touching the network
        check_upload_size(&upload_path)?;

        let request = TranscriptionRequest::new(
            upload_path,
            mime_type,
            input.model,
            input.language,
            input.format,
        );

        if let Some(ref cb) = callbacks.on_transcribing_start {
            cb();
        }
        let transcript = self.transcriber.transcribe(&request).await?;
        if let Some(ref cb) = callbacks.on_transcribing_end {
            cb();
        }

        drop(converted);
        Ok(transcript)
    }
}
