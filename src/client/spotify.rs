use log::trace;
use reqwest::Method;

use super::{private, SPOTIFY_PLAYLIST_ENDPOINT, SPOTIFY_PROFILE_ENDPOINT};
use crate::{
    error::{Error, Result},
    model::{playlist::PlaylistTracks, user::UserProfile},
};

/// Spotify routes of the backend. These only work after the user has logged in through the
/// [login URL](crate::backend::Backend::login_url); otherwise the backend answers 401 and the functions return
/// [UnsuccessfulResponse](crate::Error::UnsuccessfulResponse).
///
/// The playlist listing used by the dispatcher is in [Backend](crate::backend::Backend).
#[async_trait::async_trait]
pub trait SpotifyRoutes: private::SendHttpRequest + Sync {
    /// Get the profile of the Spotify user the backend is logged in as.
    async fn profile(&self) -> Result<UserProfile> {
        let url = self.endpoint_url(SPOTIFY_PROFILE_ENDPOINT)?;
        let response = self.send_http_request(self.build_http_request(Method::GET, url)).await?;

        let profile = private::read_json(response).await?;
        trace!("Profile: {:?}", profile);

        Ok(profile)
    }

    /// Get the tracks of a Spotify playlist. The backend returns at most the first 100 tracks.
    async fn playlist_tracks(&self, playlist_id: &str) -> Result<PlaylistTracks> {
        let mut url = self.endpoint_url(SPOTIFY_PLAYLIST_ENDPOINT)?;
        let endpoint = url.to_string();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(endpoint, String::from("URL cannot be used as a base")))?
            .pop_if_empty()
            .push(playlist_id)
            .push("tracks");

        let response = self.send_http_request(self.build_http_request(Method::GET, url)).await?;

        let tracks = private::read_json(response).await?;
        trace!("Playlist tracks: {:?}", tracks);

        Ok(tracks)
    }
}

impl SpotifyRoutes for super::MigratorClient {}
