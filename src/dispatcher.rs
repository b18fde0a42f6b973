//! Turns user actions into backend calls and reflects the outcome in the UI.
//!
//! Each action goes idle → working → idle and makes at most one backend call. Actions don't know about each other:
//! nothing stops the same action, or a different one, from being started while another is still waiting on the
//! backend.

use log::{debug, error, info, warn};
use serde_json::Value;

use crate::{
    backend::Backend,
    error::{Error, Result},
    ui::{Action, StatusElement, Ui},
};

pub const PICK_FILE_ALERT: &str = "Pick browser.json";
pub const LOAD_PLAYLISTS_FAILED_ALERT: &str = "Load playlists failed. Login first.";
pub const PICK_PLAYLIST_ALERT: &str = "Pick playlist";

pub const UPLOADING_LABEL: &str = "Uploading...";
pub const UPLOADED_LABEL: &str = "Uploaded";
pub const UPLOAD_FAILED_LABEL: &str = "Upload failed";

pub const LOADING_LABEL: &str = "Loading...";
pub const LOAD_PLAYLISTS_LABEL: &str = "Load My Playlists";

pub const TRANSFERRING_LABEL: &str = "Transferring...";
pub const DONE_LABEL: &str = "Done";
pub const TRANSFER_FAILED_LABEL: &str = "Transfer failed";

#[derive(Debug)]
pub struct Dispatcher<B, U> {
    backend: B,
    ui: U,
}

impl<B, U> Dispatcher<B, U>
where
    B: Backend,
    U: Ui,
{
    pub fn new(backend: B, ui: U) -> Self {
        Self { backend, ui }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Run the action bound to a control.
    ///
    /// Whatever the outcome, the UI has already been updated by the time this returns; the returned error is for
    /// callers that want to log or react to it further.
    pub async fn dispatch(&self, action: Action) -> Result<()> {
        debug!("Dispatching {}", action);

        match action {
            Action::Login => {
                self.start_login();
                Ok(())
            }
            Action::UploadCredentials => self.upload_credentials().await,
            Action::LoadPlaylists => self.load_playlists().await.map(|_| ()),
            Action::Transfer => self.transfer_selected().await.map(|_| ()),
        }
    }

    /// Open the backend's Spotify login in a new browser tab.
    pub fn start_login(&self) {
        let url = self.backend.login_url();
        info!("Opening Spotify login at {}", url);

        self.ui.open_url(&url);
    }

    /// Upload the selected credentials file.
    ///
    /// Without a selected file the user is alerted and the backend isn't called. Otherwise the upload status ends up
    /// as either "Uploaded" or "Upload failed", depending only on whether the upload succeeded.
    pub async fn upload_credentials(&self) -> Result<()> {
        let Some(file) = self.ui.selected_file() else {
            warn!("Upload requested without a credentials file");
            self.ui.alert(PICK_FILE_ALERT);
            return Err(Error::NoFileSelected);
        };

        self.ui.set_status(StatusElement::UploadStatus, UPLOADING_LABEL);

        match self.backend.upload_credentials(file).await {
            Ok(()) => {
                info!("Credentials file uploaded");
                self.ui.set_status(StatusElement::UploadStatus, UPLOADED_LABEL);
                Ok(())
            }

            Err(err) => {
                error!("Credentials upload failed: {}", err);
                self.ui.set_status(StatusElement::UploadStatus, UPLOAD_FAILED_LABEL);
                Err(err)
            }
        }
    }

    /// Replace the playlist selection with the user's current playlists. Returns how many playlists were loaded.
    ///
    /// On failure the user is alerted and the existing selection is left as it was. The button label is restored
    /// either way.
    pub async fn load_playlists(&self) -> Result<usize> {
        self.ui.set_status(StatusElement::RefreshPlaylists, LOADING_LABEL);

        let result = match self.backend.playlists().await {
            Ok(page) => {
                let options = page.options();
                let count = options.len();
                debug!("Loaded {} playlists", count);

                self.ui.replace_options(options);
                Ok(count)
            }

            Err(err) => {
                error!("Loading playlists failed: {}", err);
                self.ui.alert(LOAD_PLAYLISTS_FAILED_ALERT);
                Err(err)
            }
        };

        self.ui.set_status(StatusElement::RefreshPlaylists, LOAD_PLAYLISTS_LABEL);
        result
    }

    /// Transfer the selected playlist and render the backend's report. Returns the report.
    ///
    /// Without a selected playlist the user is alerted and the backend isn't called. A failed transfer sets the
    /// status to "Transfer failed" and renders whatever the backend said about it in the report area.
    pub async fn transfer_selected(&self) -> Result<Value> {
        let playlist_id = match self.ui.selected_playlist() {
            Some(id) if !id.is_empty() => id,
            _ => {
                warn!("Transfer requested without a selected playlist");
                self.ui.alert(PICK_PLAYLIST_ALERT);
                return Err(Error::NoPlaylistSelected);
            }
        };

        self.ui.set_status(StatusElement::TransferStatus, TRANSFERRING_LABEL);

        let rendered = self
            .backend
            .transfer(&playlist_id)
            .await
            .and_then(|report| Ok((serde_json::to_string_pretty(&report)?, report)));

        match rendered {
            Ok((text, report)) => {
                info!("Transfer of playlist {} done", playlist_id);
                self.ui.set_status(StatusElement::TransferStatus, DONE_LABEL);
                self.ui.render_report(&text);
                Ok(report)
            }

            Err(err) => {
                error!("Transfer of playlist {} failed: {}", playlist_id, err);
                self.ui.set_status(StatusElement::TransferStatus, TRANSFER_FAILED_LABEL);
                self.ui.render_report(&error_report(&err));
                Err(err)
            }
        }
    }
}

/// What to show in the report area for a failed transfer: the backend's error body, pretty-printed if it's JSON.
fn error_report(err: &Error) -> String {
    match err {
        Error::UnsuccessfulResponse { body, .. } if !body.trim().is_empty() => serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| serde_json::to_string_pretty(&value).ok())
            .unwrap_or_else(|| body.clone()),

        other => other.to_string(),
    }
}
