//! Main app runner for one-shot transcription

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use crate::application::{TranscribeCallbacks, TranscribeFileUseCase, TranscribeInput};
use crate::infrastructure::{FfmpegConverter, OpenAiTranscriber};

use super::args::Cli;
use super::output::write_transcript;
use super::presenter::Presenter;

/// Environment variable supplying the API credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Run the transcription pipeline for one parsed invocation
pub async fn run(cli: Cli) -> ExitCode {
    let presenter = Arc::new(Presenter::new());

    // The credential is read once, before any file I/O or network call
    let api_key = match get_api_key() {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Create adapters
    let converter = FfmpegConverter::new();
    let transcriber = OpenAiTranscriber::new(api_key);

    // Create use case
    let use_case = TranscribeFileUseCase::new(converter, transcriber);

    let input = TranscribeInput {
        input: cli.input_file,
        model: cli.model,
        language: cli.language,
        format: cli.format.into(),
    };

    // Stage callbacks drive the spinner; it is stopped before any stderr line
    let callbacks = TranscribeCallbacks {
        on_converting_start: Some(Box::new({
            let presenter = Arc::clone(&presenter);
            move || presenter.start_spinner("Converting to mp3...")
        })),
        on_converting_end: Some(Box::new({
            let presenter = Arc::clone(&presenter);
            move || {
                presenter.stop_spinner();
                presenter.success("Conversion complete");
            }
        })),
        on_transcribing_start: Some(Box::new({
            let presenter = Arc::clone(&presenter);
            move || presenter.start_spinner("Transcribing...")
        })),
        on_transcribing_end: Some(Box::new({
            let presenter = Arc::clone(&presenter);
            move || {
                presenter.stop_spinner();
                presenter.success("Transcription complete");
            }
        })),
    };

    // Execute
    let transcript = match use_case.execute(input, callbacks).await {
        Ok(transcript) => transcript,
        Err(e) => {
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Route the transcript to its destination
    match write_transcript(&transcript, cli.output.as_deref()) {
        Ok(()) => {
            if let Some(path) = cli.output {
                presenter.success(&format!("Transcript written to {}", path.display()));
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Get the API key from the environment
pub fn get_api_key() -> Result<String, String> {
    match env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(format!(
            "Authentication failed: {API_KEY_ENV} environment variable is not set.\n\
             Set it with: export {API_KEY_ENV}='your-api-key'"
        )),
    }
}
