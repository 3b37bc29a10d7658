//! Video identification
//!
//! Extracts the 11-character video id from the YouTube URL shapes we accept.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Result, TubeNotesError};

/// The accepted URL shapes. The match is anchored at the start of the input,
/// so a string with leading noise before a valid link is rejected.
static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/|youtube\.com/shorts/|youtube\.com/playlist\?list=)([^&=%?]{11})",
    )
    .expect("video URL pattern compiles")
});

/// An 11-character YouTube video id. Immutable once derived from a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Poster frame URL for this video.
    pub fn thumbnail_url(&self) -> String {
        format!("http://img.youtube.com/vi/{}/0.jpg", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video id from a pasted link.
///
/// Recognizes the canonical watch URL, the youtu.be short link, embed, `/v/`,
/// shorts and playlist-item forms. Anything else is an invalid URL and the
/// pipeline must not proceed to the captions service.
pub fn resolve(input: &str) -> Result<VideoId> {
    let trimmed = input.trim();

    match VIDEO_URL.captures(trimmed) {
        Some(captures) => Ok(VideoId(captures[1].to_string())),
        None => Err(TubeNotesError::InvalidUrl(trimmed.to_string())),
    }
}
