//! Audio conversion port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::media::ConvertedAudio;

/// Conversion errors
#[derive(Debug, Clone, Error)]
pub enum ConversionError {
    #[error(
        "ffmpeg is not installed or not found in PATH.\n\
         Install it with: brew install ffmpeg (macOS) / apt install ffmpeg (Linux)"
    )]
    ConverterNotFound,

    #[error("Conversion failed: {detail}")]
    Failed { detail: String },

    #[error("Conversion produced no output for {path}")]
    EmptyOutput { path: String },
}

/// Port for re-encoding unsupported input files to mp3
#[async_trait]
pub trait Converter: Send + Sync {
    /// Convert an audio/video file to a single-track mp3 at a temporary path.
    ///
    /// The returned handle owns the intermediate file and removes it on drop.
    async fn convert_to_mp3(&self, input: &Path) -> Result<ConvertedAudio, ConversionError>;
}
