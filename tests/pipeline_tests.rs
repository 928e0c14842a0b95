//! End-to-end pipeline tests with fake adapters

use std::path::Path;

use async_trait::async_trait;

use speech2text::application::ports::{
    ConversionError, Converter, Transcriber, TranscriptionError,
};
use speech2text::application::{TranscribeCallbacks, TranscribeFileUseCase, TranscribeInput};
use speech2text::cli::write_transcript;
use speech2text::domain::media::{
    check_upload_size, classify, ConvertedAudio, SubmitPlan, MAX_UPLOAD_BYTES,
};
use speech2text::domain::transcription::{ResponseFormat, Transcript, TranscriptionRequest};

struct FakeConverter;

#[async_trait]
impl Converter for FakeConverter {
    async fn convert_to_mp3(&self, input: &Path) -> Result<ConvertedAudio, ConversionError> {
        let out = input.with_extension("converted.mp3");
        std::fs::copy(input, &out).map_err(|e| ConversionError::Failed {
            detail: e.to_string(),
        })?;
        Ok(ConvertedAudio::new(input.to_path_buf(), out))
    }
}

/// Deterministic transcriber: payload derived from the request parameters
struct FakeTranscriber;

#[async_trait]
impl Transcriber for FakeTranscriber {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<Transcript, TranscriptionError> {
        Ok(Transcript::new(format!(
            "model={} format={}",
            request.model(),
            request.format()
        )))
    }
}

fn input_for(path: &Path) -> TranscribeInput {
    TranscribeInput {
        input: path.to_path_buf(),
        model: "whisper-1".to_string(),
        language: None,
        format: ResponseFormat::Text,
    }
}

#[test]
fn every_accepted_extension_is_direct_submit() {
    let dir = tempfile::tempdir().unwrap();
    for ext in [
        "flac", "mp3", "mp4", "mpeg", "mpga", "m4a", "ogg", "wav", "webm", "FLAC", "Mp3", "WEBM",
    ] {
        let path = dir.path().join(format!("input.{ext}"));
        std::fs::write(&path, b"data").unwrap();
        assert!(
            matches!(classify(&path).unwrap(), SubmitPlan::DirectSubmit(_)),
            ".{ext} should be submitted directly"
        );
    }
}

#[test]
fn other_extensions_need_conversion() {
    let dir = tempfile::tempdir().unwrap();
    for ext in ["aac", "mov", "mkv", "avi", "wma", "opus"] {
        let path = dir.path().join(format!("input.{ext}"));
        std::fs::write(&path, b"data").unwrap();
        assert_eq!(
            classify(&path).unwrap(),
            SubmitPlan::NeedsConversion,
            ".{ext} should be converted"
        );
    }
}

#[test]
fn size_ceiling_boundary() {
    let dir = tempfile::tempdir().unwrap();

    let at_limit = dir.path().join("at.mp3");
    std::fs::File::create(&at_limit)
        .unwrap()
        .set_len(MAX_UPLOAD_BYTES)
        .unwrap();
    assert!(check_upload_size(&at_limit).is_ok());

    let over_limit = dir.path().join("over.mp3");
    std::fs::File::create(&over_limit)
        .unwrap()
        .set_len(MAX_UPLOAD_BYTES + 1)
        .unwrap();
    assert!(check_upload_size(&over_limit).is_err());
}

#[tokio::test]
async fn pipeline_output_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let audio = dir.path().join("talk.wav");
    std::fs::write(&audio, b"riff data").unwrap();

    let first = TranscribeFileUseCase::new(FakeConverter, FakeTranscriber)
        .execute(input_for(&audio), TranscribeCallbacks::default())
        .await
        .unwrap();
    let second = TranscribeFileUseCase::new(FakeConverter, FakeTranscriber)
        .execute(input_for(&audio), TranscribeCallbacks::default())
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn pipeline_and_router_write_exact_payload_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let video = dir.path().join("clip.mov");
    std::fs::write(&video, b"moov data").unwrap();
    let dest = dir.path().join("transcript.txt");

    let use_case = TranscribeFileUseCase::new(FakeConverter, FakeTranscriber);
    let transcript = use_case
        .execute(input_for(&video), TranscribeCallbacks::default())
        .await
        .unwrap();

    write_transcript(&transcript, Some(&dest)).unwrap();

    let written = std::fs::read_to_string(&dest).unwrap();
    assert_eq!(written, "model=whisper-1 format=text");
}
