//! Conversion adapters

pub mod ffmpeg;

pub use ffmpeg::FfmpegConverter;
