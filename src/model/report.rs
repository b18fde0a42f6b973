//! A typed view of the backend's transfer report.
//!
//! The dispatcher renders the report verbatim and never depends on its shape. [TransferReport] is for callers that
//! want to inspect the result of a transfer, e.g. to summarize how many tracks were matched.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::util::clock_duration::parse_clock_duration;

/// The result of migrating a Spotify playlist into a new YouTube playlist.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransferReport {
    created_playlist_id: Option<String>,
    total_spotify_tracks: u32,
    #[serde(default)]
    matches: Vec<TrackMatch>,
    #[serde(default)]
    unmatched: Vec<UnmatchedTrack>,
}

/// A Spotify track and the YouTube video it was matched with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackMatch {
    spotify_track: String,
    #[serde(default)]
    artist: String,
    video_id: String,
    confidence: Confidence,
    score: f64,
    yt_title: Option<String>,
    yt_duration: Option<String>,
}

/// A Spotify track for which no YouTube video was found.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UnmatchedTrack {
    spotify_track: String,
    #[serde(default)]
    artist: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Low,
}

impl TransferReport {
    /// Interprets an opaque transfer response as a report. Returns `None` if the value doesn't look like one.
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }

    pub fn created_playlist_id(&self) -> Option<&str> {
        self.created_playlist_id.as_deref()
    }

    pub fn total_spotify_tracks(&self) -> u32 {
        self.total_spotify_tracks
    }

    pub fn matches(&self) -> &[TrackMatch] {
        &self.matches
    }

    pub fn unmatched(&self) -> &[UnmatchedTrack] {
        &self.unmatched
    }

    /// Matches the backend was confident about.
    pub fn confident_matches(&self) -> impl Iterator<Item = &TrackMatch> {
        self.matches
            .iter()
            .filter(|track_match| track_match.confidence == Confidence::High)
    }

    /// The share of Spotify tracks that got a match, between 0 and 1. An empty playlist has a match rate of 0.
    pub fn match_rate(&self) -> f64 {
        if self.total_spotify_tracks == 0 {
            0.0
        } else {
            self.matches.len() as f64 / f64::from(self.total_spotify_tracks)
        }
    }
}

impl TrackMatch {
    pub fn spotify_track(&self) -> &str {
        &self.spotify_track
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn yt_title(&self) -> Option<&str> {
        self.yt_title.as_deref()
    }

    /// The matched video's duration, if YouTube reported one in a recognizable format.
    pub fn yt_duration(&self) -> Option<Duration> {
        self.yt_duration.as_deref().and_then(parse_clock_duration)
    }
}

impl UnmatchedTrack {
    pub fn spotify_track(&self) -> &str {
        &self.spotify_track
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }
}
