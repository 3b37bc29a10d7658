//! Caption track model and the catalog seam to the captions service.

use anyhow::Result;
use async_trait::async_trait;

use crate::video::VideoId;

/// Origin of a caption track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    /// Manually authored by the uploader.
    Manual,
    /// Auto-generated speech recognition.
    Generated,
}

/// One caption stream for a video.
#[derive(Debug, Clone)]
pub struct CaptionTrack {
    pub language: String,
    pub language_code: String,
    pub kind: TrackKind,
    pub is_translatable: bool,
    /// Service URL the caption text is fetched from.
    pub base_url: String,
}

impl CaptionTrack {
    pub fn is_generated(&self) -> bool {
        self.kind == TrackKind::Generated
    }
}

/// One timed caption line.
#[derive(Debug, Clone)]
pub struct CaptionSnippet {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// All caption tracks listed for one video, in the order the service returned
/// them.
#[derive(Debug, Clone, Default)]
pub struct TrackList {
    tracks: Vec<CaptionTrack>,
}

impl TrackList {
    pub fn new(tracks: Vec<CaptionTrack>) -> Self {
        Self { tracks }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CaptionTrack> {
        self.tracks.iter()
    }

    /// Manually authored track in the given language, if listed.
    pub fn manual(&self, language_code: &str) -> Option<&CaptionTrack> {
        self.tracks
            .iter()
            .find(|t| t.kind == TrackKind::Manual && t.language_code == language_code)
    }

    /// Auto-generated track in the given language, if listed.
    pub fn generated(&self, language_code: &str) -> Option<&CaptionTrack> {
        self.tracks
            .iter()
            .find(|t| t.kind == TrackKind::Generated && t.language_code == language_code)
    }

    /// First track not in the given language that the service can machine
    /// translate.
    pub fn first_translatable_other(&self, language_code: &str) -> Option<&CaptionTrack> {
        self.tracks
            .iter()
            .find(|t| t.language_code != language_code && t.is_translatable)
    }
}

/// Narrow seam to the remote captions service. The fallback logic only ever
/// talks to this trait, so it can be exercised against a fixed track set.
#[async_trait]
pub trait CaptionCatalog: Send + Sync {
    /// List the caption tracks the service advertises for a video.
    async fn list_tracks(&self, video: &VideoId) -> Result<TrackList>;

    /// Fetch a track's caption lines in original chronological order.
    async fn fetch_track(&self, track: &CaptionTrack) -> Result<Vec<CaptionSnippet>>;

    /// Fetch a track machine-translated into the target language.
    async fn fetch_translated(
        &self,
        track: &CaptionTrack,
        target_language: &str,
    ) -> Result<Vec<CaptionSnippet>>;
}
