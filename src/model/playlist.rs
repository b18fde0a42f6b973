//! Everything related to playlists.
//!
//! [PlaylistPage] is what the backend returns for the current user's Spotify playlists. Each [PlaylistSummary] in it
//! becomes one [PlaylistOption] in the UI's playlist selection. [PlaylistTracks] is the track listing of a single
//! playlist.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::util::duration_millis;

/// The current user's playlists as returned by the backend.
///
/// A response without an `items` key is treated as having no playlists. `null` entries are skipped.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaylistPage {
    #[serde(default, deserialize_with = "skip_null_items")]
    items: Vec<PlaylistSummary>,
}

/// A single playlist in a [PlaylistPage].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaylistSummary {
    id: String,
    name: String,
    tracks: TrackCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
struct TrackCount {
    total: u32,
}

/// An entry in the UI's playlist selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaylistOption {
    /// The playlist's Spotify ID.
    pub value: String,
    /// The text displayed to the user, e.g. `Road Trip (12)`.
    pub label: String,
}

/// The tracks of a single Spotify playlist.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaylistTracks {
    #[serde(default)]
    items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct PlaylistItem {
    // removed or unavailable tracks come back as null
    track: Option<Track>,
}

/// A track in a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    name: String,
    #[serde(default)]
    artists: Vec<Artist>,
    #[serde(rename = "duration_ms", with = "duration_millis", default)]
    duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct Artist {
    name: String,
}

// Spotify occasionally returns null for playlists that were deleted or made unavailable
fn skip_null_items<'de, D>(deserializer: D) -> Result<Vec<PlaylistSummary>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Option<PlaylistSummary>>> = Deserialize::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

impl PlaylistPage {
    pub fn items(&self) -> &[PlaylistSummary] {
        &self.items
    }

    pub fn take_items(self) -> Vec<PlaylistSummary> {
        self.items
    }

    /// Returns one selection option per playlist, in the order the backend returned them.
    pub fn options(&self) -> Vec<PlaylistOption> {
        self.items.iter().map(PlaylistOption::from).collect()
    }
}

impl PlaylistSummary {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn track_count(&self) -> u32 {
        self.tracks.total
    }
}

impl From<&PlaylistSummary> for PlaylistOption {
    fn from(playlist: &PlaylistSummary) -> Self {
        Self {
            value: playlist.id.clone(),
            label: format!("{} ({})", playlist.name, playlist.tracks.total),
        }
    }
}

impl PlaylistTracks {
    /// Returns the playlist's tracks, skipping entries whose track is no longer available.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.items.iter().filter_map(|item| item.track.as_ref())
    }
}

impl Track {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn artists(&self) -> impl Iterator<Item = &str> {
        self.artists.iter().map(|artist| artist.name.as_str())
    }

    /// The track's primary artist, or an empty string if the track has none.
    pub fn primary_artist(&self) -> &str {
        self.artists.first().map(|artist| artist.name.as_str()).unwrap_or_default()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_page_to_options() {
        let page: PlaylistPage = serde_json::from_str(
            r#"{
                "items": [
                    {"id": "p1", "name": "Road Trip", "tracks": {"href": "...", "total": 12}, "public": false},
                    {"id": "p2", "name": "Focus", "tracks": {"total": 0}}
                ],
                "limit": 50,
                "next": null
            }"#,
        )
        .unwrap();

        assert_eq!(
            page.options(),
            vec![
                PlaylistOption {
                    value: "p1".to_owned(),
                    label: "Road Trip (12)".to_owned()
                },
                PlaylistOption {
                    value: "p2".to_owned(),
                    label: "Focus (0)".to_owned()
                },
            ]
        );
    }

    #[test]
    fn playlist_page_without_items_is_empty() {
        let page: PlaylistPage = serde_json::from_str(r#"{"error": {"status": 401}}"#).unwrap();

        assert!(page.items().is_empty());
        assert!(page.options().is_empty());
    }

    #[test]
    fn playlist_page_skips_null_items() {
        let page: PlaylistPage = serde_json::from_str(
            r#"{"items": [null, {"id": "p1", "name": "Road Trip", "tracks": {"total": 12}}, null]}"#,
        )
        .unwrap();

        assert_eq!(page.items().len(), 1);
        assert_eq!(page.items()[0].id(), "p1");

        let page: PlaylistPage = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(page.items().is_empty());
    }

    #[test]
    fn playlist_tracks_skip_unavailable() {
        let tracks: PlaylistTracks = serde_json::from_str(
            r#"{
                "items": [
                    {"track": {"name": "Song A", "artists": [{"name": "Artist A"}, {"name": "Artist B"}], "duration_ms": 215000}},
                    {"track": null},
                    {"track": {"name": "Song B", "artists": [], "duration_ms": null}}
                ]
            }"#,
        )
        .unwrap();

        let tracks: Vec<_> = tracks.tracks().collect();
        assert_eq!(tracks.len(), 2);

        assert_eq!(tracks[0].name(), "Song A");
        assert_eq!(tracks[0].primary_artist(), "Artist A");
        assert_eq!(tracks[0].artists().collect::<Vec<_>>(), vec!["Artist A", "Artist B"]);
        assert_eq!(tracks[0].duration(), Duration::from_millis(215000));

        assert_eq!(tracks[1].primary_artist(), "");
        assert_eq!(tracks[1].duration(), Duration::ZERO);
    }
}
