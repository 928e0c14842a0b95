//! Transcript output routing

use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::domain::transcription::Transcript;

/// Error when the transcript cannot be written to its destination
#[derive(Debug, Clone, Error)]
#[error("Failed to write transcript to {destination}: {detail}")]
pub struct OutputError {
    pub destination: String,
    pub detail: String,
}

/// Route a transcript to a file or stdout.
///
/// A file destination receives the payload bytes exactly, truncating any
/// existing file. Stdout gets the payload followed by a newline.
pub fn write_transcript(transcript: &Transcript, output: Option<&Path>) -> Result<(), OutputError> {
    match output {
        Some(path) => std::fs::write(path, transcript.payload()).map_err(|e| OutputError {
            destination: path.display().to_string(),
            detail: e.to_string(),
        }),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_to_stream(transcript, &mut handle)
        }
    }
}

/// Write the payload plus one trailing newline to a stream destination
fn write_to_stream(transcript: &Transcript, sink: &mut impl Write) -> Result<(), OutputError> {
    writeln!(sink, "{}", transcript.payload()).map_err(|e| OutputError {
        destination: "stdout".to_string(),
        detail: e.to_string(),
    })
}
