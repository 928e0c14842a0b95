//! FFmpeg-based mp3 converter adapter

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::{timeout, Duration};

use crate::application::ports::{ConversionError, Converter};
use crate::domain::media::ConvertedAudio;

/// Upper bound on a single conversion run
const CONVERSION_TIMEOUT: Duration = Duration::from_secs(300);

/// FFmpeg converter for audio/video inputs the API does not accept directly
pub struct FfmpegConverter {
    binary: PathBuf,
}

impl FfmpegConverter {
    /// Create a converter using `ffmpeg` from PATH
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("ffmpeg"),
        }
    }

    /// Create a converter using an explicit ffmpeg binary
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Pick a process-unique temp path for the converted mp3
    fn temp_output_path() -> PathBuf {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        std::env::temp_dir().join(format!(
            "speech2text-{}-{}.mp3",
            std::process::id(),
            timestamp
        ))
    }

    /// Build FFmpeg args for single-track mp3 extraction
    fn build_ffmpeg_args(input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-i".to_string(),
            input.to_string_lossy().to_string(),
            "-vn".to_string(), // drop video streams
            "-acodec".to_string(),
            "libmp3lame".to_string(),
            "-q:a".to_string(),
            "2".to_string(), // high quality VBR
            "-y".to_string(), // overwrite output
            output.to_string_lossy().to_string(),
        ]
    }
}

impl Default for FfmpegConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Converter for FfmpegConverter {
    async fn convert_to_mp3(&self, input: &Path) -> Result<ConvertedAudio, ConversionError> {
        let output_path = Self::temp_output_path();
        let args = Self::build_ffmpeg_args(input, &output_path);

        let child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ConversionError::ConverterNotFound
                } else {
                    ConversionError::Failed {
                        detail: format!("failed to start ffmpeg: {e}"),
                    }
                }
            })?;

        let output = match timeout(CONVERSION_TIMEOUT, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| ConversionError::Failed {
                detail: format!("ffmpeg did not run to completion: {e}"),
            })?,
            Err(_) => {
                let _ = std::fs::remove_file(&output_path);
                return Err(ConversionError::Failed {
                    detail: format!(
                        "ffmpeg timed out after {} seconds",
                        CONVERSION_TIMEOUT.as_secs()
                    ),
                });
            }
        };

        if !output.status.success() {
            // Clean up any partial output before surfacing the diagnostics
            let _ = std::fs::remove_file(&output_path);
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConversionError::Failed {
                detail: format!(
                    "ffmpeg exited with {}: {}",
                    output.status,
                    stderr.lines().last().unwrap_or("unknown error")
                ),
            });
        }

        let converted = ConvertedAudio::new(input.to_path_buf(), output_path);

        let non_empty = std::fs::metadata(converted.path())
            .map(|m| m.len() > 0)
            .unwrap_or(false);
        if !non_empty {
            return Err(ConversionError::EmptyOutput {
                path: input.display().to_string(),
            });
        }

        Ok(converted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ffmpeg_args_extract_single_audio_track() {
        let args = FfmpegConverter::build_ffmpeg_args(
            Path::new("/media/clip.mov"),
            Path::new("/tmp/out.mp3"),
        );

        assert_eq!(args[0], "-i");
        assert_eq!(args[1], "/media/clip.mov");
        assert!(args.contains(&"-vn".to_string()));
        assert!(args.contains(&"libmp3lame".to_string()));
        assert!(args.contains(&"-y".to_string()));
        assert_eq!(args.last().unwrap(), "/tmp/out.mp3");
    }

    #[test]
    fn temp_output_paths_are_mp3() {
        let path = FfmpegConverter::temp_output_path();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("mp3"));
    }

    #[tokio::test]
    async fn missing_binary_maps_to_converter_not_found() {
        let converter = FfmpegConverter::with_binary("/nonexistent/ffmpeg-binary");
        let err = converter
            .convert_to_mp3(Path::new("clip.mov"))
            .await
            .unwrap_err();

        assert!(matches!(err, ConversionError::ConverterNotFound));
    }

    #[tokio::test]
    async fn failing_converter_surfaces_diagnostics() {
        // `false` exits 1 without producing output, standing in for a broken run
        let converter = FfmpegConverter::with_binary("false");
        let err = converter
            .convert_to_mp3(Path::new("clip.mov"))
            .await
            .unwrap_err();

        match err {
            ConversionError::Failed { detail } => {
                assert!(detail.contains("exited with"), "got: {detail}")
            }
            other => panic!("Expected Failed, got {other:?}"),
        }
    }
}
