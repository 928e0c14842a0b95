//! speech2text - transcribe audio and video files via the OpenAI API
//!
//! This crate converts an audio or video file into a text transcript: inputs
//! the API does not accept directly are re-encoded to mp3 with FFmpeg, a
//! 25 MiB upload ceiling is enforced locally, and the transcript is routed to
//! a file or stdout in the requested format.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (format classification, size limits, requests)
//! - **Application**: The pipeline use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (FFmpeg, OpenAI API)
//! - **CLI**: Command-line interface, argument parsing, and output routing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
