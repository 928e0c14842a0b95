//! Upload size ceiling enforcement

use std::path::Path;

use thiserror::Error;

/// Maximum upload size accepted by the transcription API (25 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

/// Size guard errors
#[derive(Debug, Clone, Error)]
pub enum SizeGuardError {
    #[error(
        "File too large: {path} is {size_bytes} bytes, the API limit is {limit_bytes} bytes (25 MiB)"
    )]
    TooLarge {
        path: String,
        size_bytes: u64,
        limit_bytes: u64,
    },

    #[error("Failed to read size of {path}: {detail}")]
    Unreadable { path: String, detail: String },
}

/// Check a file against the upload ceiling before any network call.
///
/// A file of exactly [`MAX_UPLOAD_BYTES`] passes; anything larger is rejected.
/// Returns the measured size on success.
pub fn check_upload_size(path: &Path) -> Result<u64, SizeGuardError> {
    let size_bytes = std::fs::metadata(path)
        .map_err(|e| SizeGuardError::Unreadable {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?
        .len();

    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(SizeGuardError::TooLarge {
            path: path.display().to_string(),
            size_bytes,
            limit_bytes: MAX_UPLOAD_BYTES,
        });
    }

    Ok(size_bytes)
}
