//! Best-effort English transcript selection.

use tracing::{debug, warn};

use crate::transcript::tracks::{CaptionCatalog, CaptionSnippet};
use crate::video::VideoId;

const TARGET_LANGUAGE: &str = "en";

/// Fetch the best available English transcript for a video.
///
/// Attempts, in strict priority order:
/// 1. a manually authored English track,
/// 2. an auto-generated English track,
/// 3. the first track in another language the service can machine translate,
///    translated into English.
///
/// Each attempt is independent; a missing track or a failed fetch is recorded
/// and the next attempt runs. `None` is the normal "no transcript" outcome,
/// including when the service rejects the video outright.
pub async fn fetch_english(catalog: &dyn CaptionCatalog, video: &VideoId) -> Option<String> {
    let tracks = match catalog.list_tracks(video).await {
        Ok(tracks) => tracks,
        Err(error) => {
            warn!("Captions listing failed for {video}: {error:#}");
            return None;
        }
    };

    if let Some(track) = tracks.manual(TARGET_LANGUAGE) {
        match catalog.fetch_track(track).await {
            Ok(snippets) => return Some(join_snippets(&snippets)),
            Err(error) => debug!("Manual English track failed for {video}: {error:#}"),
        }
    }

    if let Some(track) = tracks.generated(TARGET_LANGUAGE) {
        match catalog.fetch_track(track).await {
            Ok(snippets) => return Some(join_snippets(&snippets)),
            Err(error) => debug!("Generated English track failed for {video}: {error:#}"),
        }
    }

    if let Some(track) = tracks.first_translatable_other(TARGET_LANGUAGE) {
        match catalog.fetch_translated(track, TARGET_LANGUAGE).await {
            Ok(snippets) => return Some(join_snippets(&snippets)),
            Err(error) => debug!(
                "Translating {} track failed for {video}: {error:#}",
                track.language_code
            ),
        }
    }

    debug!("No usable transcript for {video}");
    None
}

/// Reconstruct transcript text from caption lines: fragments in original
/// order, joined with single spaces. No punctuation repair across lines.
fn join_snippets(snippets: &[CaptionSnippet]) -> String {
    snippets
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
