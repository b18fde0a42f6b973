use serde::Deserialize;

/// The result of creating a YouTube Music playlist through the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedPlaylist {
    playlist_id: String,
}

impl CreatedPlaylist {
    pub fn playlist_id(&self) -> &str {
        &self.playlist_id
    }
}
