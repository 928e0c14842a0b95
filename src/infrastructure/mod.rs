//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with FFmpeg and the OpenAI API.

pub mod conversion;
pub mod transcription;

// Re-export adapters
pub use conversion::FfmpegConverter;
pub use transcription::OpenAiTranscriber;
