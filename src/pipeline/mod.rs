//! Pipeline orchestration
//!
//! Runs Resolve → Fetch → Generate in order, each stage gated on the previous
//! one, and renders the resulting summary on demand. The per-run state lives
//! in a [`SummaryContext`] returned to the caller; nothing is held globally.

use tracing::info;

use crate::llm::{prompts, GenerationRequest, TextGenerator};
use crate::llm::prompts::WordLimit;
use crate::render::{markup, PdfBackend};
use crate::transcript::{fetch_english, CaptionCatalog};
use crate::video::{self, VideoId};
use crate::{Result, TubeNotesError};

/// One summarization request.
pub struct SummaryRequest<'a> {
    /// The pasted video link.
    pub url: &'a str,
    /// Word budget for the summary.
    pub word_limit: WordLimit,
    /// Free-text instruction replacing the built-in template, if given.
    pub instruction: Option<&'a str>,
}

/// State produced by one pipeline run. Overwritten wholesale on the next run,
/// never appended to; the summary is always a complete Markdown document.
#[derive(Debug)]
pub struct SummaryContext {
    pub video_id: VideoId,
    pub transcript: String,
    pub summary: String,
}

/// Result of a pipeline run that got past URL resolution.
#[derive(Debug)]
pub enum Outcome {
    Summarized(SummaryContext),
    /// All caption attempts were exhausted or the service rejected the video.
    /// This is an informational outcome, not an error.
    TranscriptUnavailable { video_id: VideoId },
}

/// Run Resolve → Fetch → Generate.
pub async fn run(
    request: SummaryRequest<'_>,
    catalog: &dyn CaptionCatalog,
    generator: &dyn TextGenerator,
) -> Result<Outcome> {
    let video_id = video::resolve(request.url)?;
    info!("Resolved video {video_id}");

    let Some(transcript) = fetch_english(catalog, &video_id).await else {
        return Ok(Outcome::TranscriptUnavailable { video_id });
    };
    info!("Fetched transcript ({} chars)", transcript.len());

    let instruction = prompts::resolve_instruction(request.instruction, request.word_limit);
    let summary = generator
        .generate(GenerationRequest {
            instruction: &instruction,
            transcript: &transcript,
        })
        .await
        .map_err(|e| TubeNotesError::Generation(format!("{e:#}")))?;

    Ok(Outcome::Summarized(SummaryContext {
        video_id,
        transcript,
        summary,
    }))
}

/// Render the current summary as a PDF. Derived fresh on every call; an empty
/// summary refuses before any backend is invoked.
pub fn render_document(summary: &str, backend: &dyn PdfBackend) -> Result<Vec<u8>> {
    if summary.trim().is_empty() {
        return Err(TubeNotesError::Render(
            "there is no summary to render".to_string(),
        ));
    }

    let html = markup::render_html(summary);
    backend
        .render(&html)
        .map_err(|e| TubeNotesError::Render(format!("{e:#}")))
}
