//! Transcript retrieval
//!
//! Lists a video's caption tracks, fetches caption text, and picks the best
//! available English transcript in a fixed priority order.

mod fetcher;
mod innertube;
mod tracks;

pub use fetcher::fetch_english;
pub use innertube::InnerTubeCatalog;
pub use tracks::{CaptionCatalog, CaptionSnippet, CaptionTrack, TrackKind, TrackList};
