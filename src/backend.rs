use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::{
    error::Result,
    model::{playlist::PlaylistPage, CredentialsFile},
};

/// The backend calls the [Dispatcher](crate::dispatcher::Dispatcher) makes. [MigratorClient](crate::MigratorClient)
/// implements this against the real backend.
///
/// Implementations must turn any non-2xx response into an error; the dispatcher decides what the user sees.
#[async_trait]
pub trait Backend: Send + Sync {
    /// The URL to open in the user's browser to start the Spotify login.
    fn login_url(&self) -> Url;

    /// Upload the YouTube Music credentials file. The response body is ignored.
    async fn upload_credentials(&self, file: CredentialsFile) -> Result<()>;

    /// Get the logged-in user's Spotify playlists.
    async fn playlists(&self) -> Result<PlaylistPage>;

    /// Start migrating a Spotify playlist to YouTube Music and wait for the backend's report.
    async fn transfer(&self, spotify_playlist_id: &str) -> Result<Value>;
}
