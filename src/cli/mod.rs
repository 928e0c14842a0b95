//! CLI layer - Command-line interface
//!
//! Contains argument parsing, credential loading, transcript output
//! routing, and the main application runner.

pub mod app;
pub mod args;
pub mod output;
pub mod presenter;

// Re-export commonly used types
pub use app::{get_api_key, run, API_KEY_ENV, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, FormatArg};
pub use output::{write_transcript, OutputError};
pub use presenter::Presenter;
