//! tubenotes - YouTube videos in, AI-generated PDF notes out
//!
//! The pipeline runs in four gated stages: resolve the video id from a URL,
//! fetch an English caption track, generate a summary with an LLM, and render
//! the summary as a PDF document.

pub mod cli;
pub mod config;
pub mod llm;
pub mod pipeline;
pub mod render;
pub mod transcript;
pub mod video;

use thiserror::Error;

/// Main error type for tubenotes
#[derive(Error, Debug)]
pub enum TubeNotesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("Could not fetch transcript for this video.")]
    TranscriptUnavailable,

    #[error("Summary generation failed: {0}")]
    Generation(String),

    #[error("PDF generation failed: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TubeNotesError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "tubenotes";
