//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::domain::transcription::{ResponseFormat, DEFAULT_MODEL};

/// speech2text - transcribe audio and video files via the OpenAI API
#[derive(Parser, Debug)]
#[command(name = "speech2text")]
#[command(version)]
#[command(about = "Transcribe audio/video files to text using OpenAI Speech-to-Text API")]
#[command(long_about = None)]
pub struct Cli {
    /// Path to the audio or video file to transcribe
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// OpenAI model to use
    #[arg(short = 'm', long, value_name = "NAME", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Language of the input audio in ISO-639-1 format (e.g. en, ja)
    #[arg(short = 'l', long, value_name = "CODE")]
    pub language: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_name = "FMT", value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Response format argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
    Srt,
    Vtt,
    #[value(name = "verbose_json")]
    VerboseJson,
}

impl From<FormatArg> for ResponseFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ResponseFormat::Text,
            FormatArg::Json => ResponseFormat::Json,
            FormatArg::Srt => ResponseFormat::Srt,
            FormatArg::Vtt => ResponseFormat::Vtt,
            FormatArg::VerboseJson => ResponseFormat::VerboseJson,
        }
    }
}

impl From<ResponseFormat> for FormatArg {
    fn from(format: ResponseFormat) -> Self {
        match format {
            ResponseFormat::Text => FormatArg::Text,
            ResponseFormat::Json => FormatArg::Json,
            ResponseFormat::Srt => FormatArg::Srt,
            ResponseFormat::Vtt => FormatArg::Vtt,
            ResponseFormat::VerboseJson => FormatArg::VerboseJson,
        }
    }
}
