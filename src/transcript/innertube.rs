//! Captions service client.
//!
//! Talks to YouTube the same way the browser player does: scrape the watch
//! page for the InnerTube API key, ask the player endpoint for the caption
//! track listing, then fetch the caption XML per track.

use std::sync::LazyLock;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;

use crate::transcript::tracks::{
    CaptionCatalog, CaptionSnippet, CaptionTrack, TrackKind, TrackList,
};
use crate::video::VideoId;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const PLAYER_URL: &str = "https://www.youtube.com/youtubei/v1/player?key=";

static API_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""INNERTUBE_API_KEY":\s*"([a-zA-Z0-9_-]+)""#).expect("api key pattern compiles")
});

static CUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<text([^>]*)>(.*?)</text>").expect("cue pattern compiles")
});

static CUE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"start="([0-9.]+)""#).expect("start pattern compiles"));

static CUE_DUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"dur="([0-9.]+)""#).expect("dur pattern compiles"));

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern compiles"));

pub struct InnerTubeCatalog {
    http: Client,
}

impl InnerTubeCatalog {
    pub fn new() -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("en-US"),
        );

        Ok(Self {
            http: Client::builder()
                .cookie_store(true)
                .default_headers(headers)
                .build()
                .context("Failed to build captions HTTP client")?,
        })
    }

    async fn watch_page(&self, video: &VideoId) -> Result<String> {
        let response = self
            .http
            .get(format!("{WATCH_URL}{video}"))
            .send()
            .await
            .context("Failed to fetch watch page")?
            .error_for_status()
            .context("Watch page returned an error status")?;

        response.text().await.context("Failed to read watch page")
    }

    async fn player_response(&self, video: &VideoId, api_key: &str) -> Result<serde_json::Value> {
        let body = serde_json::json!({
            "context": {
                "client": {
                    "clientName": "ANDROID",
                    "clientVersion": "20.10.38"
                }
            },
            "videoId": video.as_str()
        });

        let response = self
            .http
            .post(format!("{PLAYER_URL}{api_key}"))
            .json(&body)
            .send()
            .await
            .context("Failed to call player endpoint")?
            .error_for_status()
            .context("Player endpoint returned an error status")?;

        response
            .json()
            .await
            .context("Failed to parse player response")
    }

    async fn fetch_caption_xml(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("Failed to fetch captions")?
            .error_for_status()
            .context("Captions URL returned an error status")?;

        response.text().await.context("Failed to read captions")
    }
}

#[async_trait]
impl CaptionCatalog for InnerTubeCatalog {
    async fn list_tracks(&self, video: &VideoId) -> Result<TrackList> {
        let html = self.watch_page(video).await?;
        let api_key = API_KEY
            .captures(&html)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| anyhow!("No InnerTube API key in watch page for {video}"))?;

        let player = self.player_response(video, &api_key).await?;
        assert_playable(video, &player)?;

        Ok(parse_track_list(&player))
    }

    async fn fetch_track(&self, track: &CaptionTrack) -> Result<Vec<CaptionSnippet>> {
        let xml = self.fetch_caption_xml(&track.base_url).await?;
        Ok(parse_caption_xml(&xml))
    }

    async fn fetch_translated(
        &self,
        track: &CaptionTrack,
        target_language: &str,
    ) -> Result<Vec<CaptionSnippet>> {
        let url = format!("{}&tlang={}", track.base_url, target_language);
        let xml = self.fetch_caption_xml(&url).await?;
        Ok(parse_caption_xml(&xml))
    }
}

/// Reject videos the player refuses to serve (removed, private, bot-walled).
fn assert_playable(video: &VideoId, player: &serde_json::Value) -> Result<()> {
    let status = player
        .pointer("/playabilityStatus/status")
        .and_then(|s| s.as_str())
        .unwrap_or("OK");

    if status == "OK" {
        return Ok(());
    }

    let reason = player
        .pointer("/playabilityStatus/reason")
        .and_then(|r| r.as_str())
        .unwrap_or("no reason given");

    Err(anyhow!("Video {video} is not playable ({status}): {reason}"))
}

fn parse_track_list(player: &serde_json::Value) -> TrackList {
    let tracks = player
        .pointer("/captions/playerCaptionsTracklistRenderer/captionTracks")
        .and_then(|t| t.as_array())
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| {
                    let language_code = entry.get("languageCode")?.as_str()?.to_string();
                    let base_url = entry
                        .get("baseUrl")?
                        .as_str()?
                        .replace("&fmt=srv3", "");

                    let language = entry
                        .pointer("/name/runs/0/text")
                        .and_then(|t| t.as_str())
                        .unwrap_or(&language_code)
                        .to_string();

                    let kind = match entry.get("kind").and_then(|k| k.as_str()) {
                        Some("asr") => TrackKind::Generated,
                        _ => TrackKind::Manual,
                    };

                    let is_translatable = entry
                        .get("isTranslatable")
                        .and_then(|t| t.as_bool())
                        .unwrap_or(false);

                    Some(CaptionTrack {
                        language,
                        language_code,
                        kind,
                        is_translatable,
                        base_url,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    TrackList::new(tracks)
}

/// Parse the caption XML into timed snippets. The service double-encodes
/// entities, so decode once, drop any markup inside the cue, and decode again.
fn parse_caption_xml(xml: &str) -> Vec<CaptionSnippet> {
    CUE.captures_iter(xml)
        .filter_map(|cue| {
            let attrs = cue.get(1).map(|m| m.as_str()).unwrap_or("");
            let raw = cue.get(2).map(|m| m.as_str()).unwrap_or("");

            let decoded = html_escape::decode_html_entities(raw);
            let stripped = TAG.replace_all(&decoded, "");
            let text = html_escape::decode_html_entities(stripped.trim()).to_string();
            if text.is_empty() {
                return None;
            }

            let start = CUE_START
                .captures(attrs)
                .and_then(|c| c[1].parse().ok())
                .unwrap_or(0.0);
            let duration = CUE_DUR
                .captures(attrs)
                .and_then(|c| c[1].parse().ok())
                .unwrap_or(0.0);

            Some(CaptionSnippet {
                text,
                start,
                duration,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_caption_xml_in_order() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<transcript>
  <text start="0.0" dur="1.5">Hello</text>
  <text start="1.5" dur="2.0">world</text>
</transcript>"#;

        let snippets = parse_caption_xml(xml);
        assert_eq!(snippets.len(), 2);
        assert_eq!(snippets[0].text, "Hello");
        assert_eq!(snippets[0].start, 0.0);
        assert_eq!(snippets[0].duration, 1.5);
        assert_eq!(snippets[1].text, "world");
    }

    #[test]
    fn decodes_double_encoded_entities() {
        let xml = r#"<text start="0" dur="1">it&amp;#39;s &amp;quot;fine&amp;quot;</text>"#;
        let snippets = parse_caption_xml(xml);
        assert_eq!(snippets[0].text, "it's \"fine\"");
    }

    #[test]
    fn drops_markup_and_empty_cues() {
        let xml = concat!(
            r#"<text start="0" dur="1"><i>styled</i> cue</text>"#,
            r#"<text start="1" dur="1">   </text>"#,
        );
        let snippets = parse_caption_xml(xml);
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].text, "styled cue");
    }

    #[test]
    fn track_list_parses_manual_and_generated() {
        let player = serde_json::json!({
            "captions": {
                "playerCaptionsTracklistRenderer": {
                    "captionTracks": [
                        {
                            "baseUrl": "https://captions.example/en&fmt=srv3",
                            "languageCode": "en",
                            "kind": "asr",
                            "isTranslatable": true,
                            "name": { "runs": [ { "text": "English (auto-generated)" } ] }
                        },
                        {
                            "baseUrl": "https://captions.example/fr",
                            "languageCode": "fr",
                            "isTranslatable": true,
                            "name": { "runs": [ { "text": "French" } ] }
                        }
                    ]
                }
            }
        });

        let list = parse_track_list(&player);
        let generated = list.generated("en").unwrap();
        assert_eq!(generated.base_url, "https://captions.example/en");
        assert!(generated.is_generated());

        let manual = list.manual("fr").unwrap();
        assert_eq!(manual.language, "French");
        assert!(manual.is_translatable);
    }

    #[test]
    fn unplayable_video_is_rejected() {
        let video = crate::video::resolve("https://youtu.be/dQw4w9WgXcQ").unwrap();
        let player = serde_json::json!({
            "playabilityStatus": { "status": "ERROR", "reason": "Video unavailable" }
        });

        let err = assert_playable(&video, &player).unwrap_err();
        assert!(err.to_string().contains("Video unavailable"));
    }
}
