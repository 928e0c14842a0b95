//! Converted audio value object

use std::path::{Path, PathBuf};

/// Intermediate mp3 produced by the converter.
///
/// Owns the temporary file for the duration of the run; the file is removed
/// when this value is dropped, on success and failure paths alike.
#[derive(Debug)]
pub struct ConvertedAudio {
    source: PathBuf,
    path: PathBuf,
}

impl ConvertedAudio {
    /// Take ownership of a converter output file
    pub fn new(source: PathBuf, path: PathBuf) -> Self {
        Self { source, path }
    }

    /// Path of the original input the conversion was run against
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Path of the converted mp3
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ConvertedAudio {
    fn drop(&mut self) {
        // Best-effort cleanup
        let _ = std::fs::remove_file(&self.path);
    }
}
