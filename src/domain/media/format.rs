//! Format classification for input media files

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// Error when the input path does not point to a usable file
#[derive(Debug, Clone, Error)]
#[error("Input file not found: {path}")]
pub struct InputError {
    pub path: String,
}

/// Container/codec formats the transcription API accepts without conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectFormat {
    Flac,
    Mp3,
    Mp4,
    Mpeg,
    Mpga,
    M4a,
    Ogg,
    Wav,
    Webm,
}

impl DirectFormat {
    /// Match a file extension (case-insensitive) against the accepted set
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "flac" => Some(Self::Flac),
            "mp3" => Some(Self::Mp3),
            "mp4" => Some(Self::Mp4),
            "mpeg" => Some(Self::Mpeg),
            "mpga" => Some(Self::Mpga),
            "m4a" => Some(Self::M4a),
            "ogg" => Some(Self::Ogg),
            "wav" => Some(Self::Wav),
            "webm" => Some(Self::Webm),
            _ => None,
        }
    }

    /// Get the MIME type string used for the upload part
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Flac => "audio/flac",
            Self::Mp3 | Self::Mpeg | Self::Mpga => "audio/mpeg",
            Self::Mp4 => "audio/mp4",
            Self::M4a => "audio/m4a",
            Self::Ogg => "audio/ogg",
            Self::Wav => "audio/wav",
            Self::Webm => "audio/webm",
        }
    }

    /// Get the canonical file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Flac => "flac",
            Self::Mp3 => "mp3",
            Self::Mp4 => "mp4",
            Self::Mpeg => "mpeg",
            Self::Mpga => "mpga",
            Self::M4a => "m4a",
            Self::Ogg => "ogg",
            Self::Wav => "wav",
            Self::Webm => "webm",
        }
    }
}

impl fmt::Display for DirectFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Decision for a classified input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPlan {
    /// Format accepted by the API as-is
    DirectSubmit(DirectFormat),
    /// Unsupported container/codec, re-encode to mp3 first
    NeedsConversion,
}

/// Classify an input file by its extension.
///
/// Files already in an API-supported format are submitted directly; video
/// containers and unknown formats are routed through mp3 conversion. The path
/// must exist and be a regular file.
pub fn classify(path: &Path) -> Result<SubmitPlan, InputError> {
    if !path.is_file() {
        return Err(InputError {
            path: path.display().to_string(),
        });
    }

    let plan = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(DirectFormat::from_extension)
        .map(SubmitPlan::DirectSubmit)
        .unwrap_or(SubmitPlan::NeedsConversion);

    Ok(plan)
}
