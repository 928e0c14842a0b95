//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod converter;
pub mod transcriber;

// Re-export common types
pub use converter::{ConversionError, Converter};
pub use transcriber::{Transcriber, TranscriptionError};
