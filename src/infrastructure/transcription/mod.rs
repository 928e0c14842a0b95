//! Transcription adapters

pub mod openai;

pub use openai::OpenAiTranscriber;
