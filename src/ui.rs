//! The UI surface the [Dispatcher](crate::dispatcher::Dispatcher) drives.
//!
//! The elements are named after the identifiers of the migrator's web page, so a UI that mirrors the page can map
//! them one to one.

use std::{fmt, str::FromStr};

use reqwest::Url;

use crate::{
    error::Error,
    model::{playlist::PlaylistOption, CredentialsFile},
};

/// Everything the dispatcher needs from a UI. All functions take `&self`, since actions may run concurrently;
/// implementations are expected to use interior mutability.
pub trait Ui: Send + Sync {
    /// Open a URL in a new browser tab or window. Failing to do so is not reported back to the dispatcher.
    fn open_url(&self, url: &Url);

    /// The credentials file currently picked in the file input, if any.
    fn selected_file(&self) -> Option<CredentialsFile>;

    /// Show a blocking message to the user.
    fn alert(&self, message: &str);

    /// Replace the text of a status element.
    fn set_status(&self, element: StatusElement, text: &str);

    /// Replace every option in the playlist selection.
    fn replace_options(&self, options: Vec<PlaylistOption>);

    /// The value of the currently selected playlist option, if any.
    fn selected_playlist(&self) -> Option<String>;

    /// Replace the contents of the report area.
    fn render_report(&self, text: &str);
}

/// Elements whose text the dispatcher updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusElement {
    UploadStatus,
    /// The label of the button that loads the playlists.
    RefreshPlaylists,
    TransferStatus,
}

/// The user actions, one per control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Login,
    UploadCredentials,
    LoadPlaylists,
    Transfer,
}

impl StatusElement {
    pub fn id(self) -> &'static str {
        match self {
            StatusElement::UploadStatus => "upload-status",
            StatusElement::RefreshPlaylists => "refresh-playlists",
            StatusElement::TransferStatus => "transfer-status",
        }
    }
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Login,
        Action::UploadCredentials,
        Action::LoadPlaylists,
        Action::Transfer,
    ];

    /// The identifier of the control that triggers this action.
    pub fn control_id(self) -> &'static str {
        match self {
            Action::Login => "spotify-login",
            Action::UploadCredentials => "upload-headers",
            Action::LoadPlaylists => "refresh-playlists",
            Action::Transfer => "transfer-btn",
        }
    }
}

impl fmt::Display for StatusElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_id())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(control_id: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.control_id() == control_id)
            .ok_or_else(|| Error::UnknownControl(control_id.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_control_id() {
        for action in Action::ALL {
            assert_eq!(action.control_id().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn unknown_control_id() {
        assert!(matches!(
            "file-input".parse::<Action>(),
            Err(Error::UnknownControl(id)) if id == "file-input"
        ));
    }
}
