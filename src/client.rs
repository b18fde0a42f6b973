mod spotify;
mod youtube;

pub(crate) mod private;

pub use self::{spotify::SpotifyRoutes, youtube::YoutubeRoutes};

use std::sync::Arc;

use async_trait::async_trait;
use const_format::concatcp;
use log::{debug, info};
use reqwest::{multipart, Client as AsyncClient, Method, RequestBuilder, Url};
use serde_json::Value;

use crate::{
    backend::Backend,
    error::{Error, Result},
    model::{playlist::PlaylistPage, ApiMessage, CredentialsFile},
};

/// Environment variable [from_env](MigratorClientBuilder::from_env) reads the backend's base URL from.
pub const BASE_URL_ENV: &str = "MIGRATOR_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_USER_AGENT: &str = concatcp!("migrator-client/", PKG_VERSION);

// endpoint paths are relative so they resolve under the base URL's path
const HEALTH_ENDPOINT: &str = "";

const AUTH_BASE: &str = "auth/";
const AUTH_SPOTIFY_LOGIN_ENDPOINT: &str = concatcp!(AUTH_BASE, "spotify/login");

const SPOTIFY_BASE: &str = "spotify/";
const SPOTIFY_PLAYLISTS_ENDPOINT: &str = concatcp!(SPOTIFY_BASE, "playlists");
const SPOTIFY_PROFILE_ENDPOINT: &str = concatcp!(SPOTIFY_BASE, "me");
const SPOTIFY_PLAYLIST_ENDPOINT: &str = concatcp!(SPOTIFY_BASE, "playlist");

const YOUTUBE_BASE: &str = "youtube/";
const YOUTUBE_UPLOAD_ENDPOINT: &str = concatcp!(YOUTUBE_BASE, "auth/upload");
const YOUTUBE_SEARCH_ENDPOINT: &str = concatcp!(YOUTUBE_BASE, "search");
const YOUTUBE_CREATE_PLAYLIST_ENDPOINT: &str = concatcp!(YOUTUBE_BASE, "create_playlist");
const YOUTUBE_ADD_ENDPOINT: &str = concatcp!(YOUTUBE_BASE, "add");

const TRANSFER_ENDPOINT: &str = "transfer";

const UPLOAD_FILE_FIELD: &str = "file";
const TRANSFER_PLAYLIST_QUERY: &str = "spotify_playlist_id";

/// Client for the migrator backend. Cloning it is cheap; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct MigratorClient {
    inner: Arc<MigratorClientRef>,
    http_client: AsyncClient,
}

#[derive(Debug)]
struct MigratorClientRef {
    base_url: Url,
    login_url: Url,
}

#[derive(Debug, Clone)]
pub struct MigratorClientBuilder {
    base_url: String,
    user_agent: Option<String>,
}

impl MigratorClientBuilder {
    pub fn new<S>(base_url: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            base_url: base_url.into(),
            user_agent: None,
        }
    }

    /// Reads the base URL from the `MIGRATOR_BASE_URL` environment variable, falling back to the backend's default
    /// local address.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| String::from(DEFAULT_BASE_URL));
        Self::new(base_url)
    }

    pub fn user_agent<S>(self, user_agent: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            user_agent: Some(user_agent.into()),
            ..self
        }
    }

    pub fn build(self) -> Result<MigratorClient> {
        let base_url = parse_base_url(&self.base_url)?;
        let login_url = join_endpoint(&base_url, AUTH_SPOTIFY_LOGIN_ENDPOINT)?;
        debug!("Building migrator client for {}", base_url);

        let http_client = AsyncClient::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .build()?;

        Ok(MigratorClient {
            inner: Arc::new(MigratorClientRef { base_url, login_url }),
            http_client,
        })
    }
}

impl MigratorClient {
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Check the backend is up. It answers with a fixed message.
    pub async fn health(&self) -> Result<ApiMessage> {
        use private::{BuildHttpRequest, SendHttpRequest};

        let url = self.endpoint_url(HEALTH_ENDPOINT)?;
        let response = self.send_http_request(self.build_http_request(Method::GET, url)).await?;

        private::read_json(response).await
    }

    /// The URL that starts the backend's Spotify login. It is meant to be opened in the user's browser, not requested
    /// by this client.
    pub fn login_url(&self) -> &Url {
        &self.inner.login_url
    }

    fn transfer_url(&self, spotify_playlist_id: &str) -> Result<Url> {
        use private::BuildHttpRequest;

        let mut url = self.endpoint_url(TRANSFER_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair(TRANSFER_PLAYLIST_QUERY, spotify_playlist_id);

        Ok(url)
    }
}

impl private::Sealed for MigratorClient {}

impl private::BuildHttpRequest for MigratorClient {
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        join_endpoint(&self.inner.base_url, path)
    }

    fn build_http_request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {}", method, url);
        self.http_client.request(method, url)
    }
}

#[async_trait]
impl Backend for MigratorClient {
    fn login_url(&self) -> Url {
        self.inner.login_url.clone()
    }

    async fn upload_credentials(&self, file: CredentialsFile) -> Result<()> {
        use private::{BuildHttpRequest, SendHttpRequest};

        let (file_name, contents) = file.into_parts();
        debug!("Uploading credentials file {} ({} bytes)", file_name, contents.len());

        let form = multipart::Form::new().part(
            UPLOAD_FILE_FIELD,
            multipart::Part::bytes(contents).file_name(file_name),
        );

        let url = self.endpoint_url(YOUTUBE_UPLOAD_ENDPOINT)?;
        self.send_http_request(self.build_http_request(Method::POST, url).multipart(form))
            .await?;

        Ok(())
    }

    async fn playlists(&self) -> Result<PlaylistPage> {
        use private::{BuildHttpRequest, SendHttpRequest};

        let url = self.endpoint_url(SPOTIFY_PLAYLISTS_ENDPOINT)?;
        let response = self.send_http_request(self.build_http_request(Method::GET, url)).await?;

        private::read_json(response).await
    }

    async fn transfer(&self, spotify_playlist_id: &str) -> Result<Value> {
        use private::{BuildHttpRequest, SendHttpRequest};

        info!("Requesting transfer of Spotify playlist {}", spotify_playlist_id);

        let url = self.transfer_url(spotify_playlist_id)?;
        let response = self.send_http_request(self.build_http_request(Method::POST, url)).await?;

        private::read_json(response).await
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let mut normalized = base_url.trim().to_owned();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }

    let url = Url::parse(&normalized).map_err(|err| Error::InvalidBaseUrl(base_url.to_owned(), err.to_string()))?;

    if url.cannot_be_a_base() {
        return Err(Error::InvalidBaseUrl(
            base_url.to_owned(),
            String::from("URL cannot be used as a base"),
        ));
    }

    Ok(url)
}

fn join_endpoint(base_url: &Url, path: &str) -> Result<Url> {
    base_url
        .join(path)
        .map_err(|err| Error::InvalidBaseUrl(base_url.to_string(), err.to_string()))
}
