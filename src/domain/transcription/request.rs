//! Transcription request value object

use std::path::{Path, PathBuf};

use super::ResponseFormat;

/// Default model when none is selected on the command line
pub const DEFAULT_MODEL: &str = "whisper-1";

/// A single transcription request, built once per invocation.
///
/// `upload_path` points at the file actually submitted: the original input for
/// direct-submit formats, or the converted mp3 otherwise.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    upload_path: PathBuf,
    mime_type: &'static str,
    model: String,
    language: Option<String>,
    format: ResponseFormat,
}

impl TranscriptionRequest {
    pub fn new(
        upload_path: PathBuf,
        mime_type: &'static str,
        model: impl Into<String>,
        language: Option<String>,
        format: ResponseFormat,
    ) -> Self {
        Self {
            upload_path,
            mime_type,
            model: model.into(),
            language,
            format,
        }
    }

    pub fn upload_path(&self) -> &Path {
        &self.upload_path
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// ISO-639-1 language hint; `None` lets the service auto-detect
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    /// File name used for the multipart upload part
    pub fn upload_file_name(&self) -> String {
        self.upload_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_exposes_parameters() {
        let request = TranscriptionRequest::new(
            PathBuf::from("/tmp/audio.mp3"),
            "audio/mpeg",
            DEFAULT_MODEL,
            Some("en".to_string()),
            ResponseFormat::Srt,
        );

        assert_eq!(request.upload_path(), Path::new("/tmp/audio.mp3"));
        assert_eq!(request.mime_type(), "audio/mpeg");
        assert_eq!(request.model(), "whisper-1");
        assert_eq!(request.language(), Some("en"));
        assert_eq!(request.format(), ResponseFormat::Srt);
        assert_eq!(request.upload_file_name(), "audio.mp3");
    }

    #[test]
    fn language_defaults_to_auto_detect() {
        let request = TranscriptionRequest::new(
            PathBuf::from("a.wav"),
            "audio/wav",
            "gpt-4o-transcribe",
            None,
            ResponseFormat::Text,
        );
        assert!(request.language().is_none());
    }
}
