use log::debug;
use reqwest::Method;
use serde_json::Value;

use super::{private, YOUTUBE_ADD_ENDPOINT, YOUTUBE_CREATE_PLAYLIST_ENDPOINT, YOUTUBE_SEARCH_ENDPOINT};
use crate::{error::Result, model::youtube::CreatedPlaylist};

/// YouTube Music routes of the backend. These require the credentials file to have been uploaded first; otherwise the
/// backend answers 400.
#[async_trait::async_trait]
pub trait YoutubeRoutes: private::SendHttpRequest + Sync {
    /// Search YouTube Music for songs. The results are passed through from the backend as-is.
    async fn youtube_search(&self, query: &str) -> Result<Vec<Value>> {
        let mut url = self.endpoint_url(YOUTUBE_SEARCH_ENDPOINT)?;
        url.query_pairs_mut().append_pair("q", query);

        let response = self.send_http_request(self.build_http_request(Method::GET, url)).await?;
        private::read_json(response).await
    }

    async fn create_youtube_playlist(&self, title: &str, description: &str) -> Result<CreatedPlaylist> {
        let mut url = self.endpoint_url(YOUTUBE_CREATE_PLAYLIST_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("title", title)
            .append_pair("description", description);

        let response = self.send_http_request(self.build_http_request(Method::POST, url)).await?;

        let created: CreatedPlaylist = private::read_json(response).await?;
        debug!("Created YouTube playlist {}", created.playlist_id());

        Ok(created)
    }

    async fn add_to_youtube_playlist(&self, playlist_id: &str, video_id: &str) -> Result<Value> {
        let mut url = self.endpoint_url(YOUTUBE_ADD_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("playlist_id", playlist_id)
            .append_pair("video_id", video_id);

        let response = self.send_http_request(self.build_http_request(Method::POST, url)).await?;
        private::read_json(response).await
    }
}

impl YoutubeRoutes for super::MigratorClient {}
