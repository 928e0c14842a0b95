//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod media;
pub mod transcription;

// Re-export common types
pub use media::{
    check_upload_size, classify, ConvertedAudio, DirectFormat, InputError, SizeGuardError,
    SubmitPlan, MAX_UPLOAD_BYTES,
};
pub use transcription::{ResponseFormat, Transcript, TranscriptionRequest, DEFAULT_MODEL};
