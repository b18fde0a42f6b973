//! Client for the Spotify → YouTube Music playlist migrator backend.
//!
//! The crate has two layers:
//!
//! - [MigratorClient]: an async HTTP client for the backend's routes. Build one with [MigratorClientBuilder].
//! - [Dispatcher]: the four user actions of the migrator's control page (log in to Spotify, upload the YouTube Music
//!   credentials file, load the user's playlists and transfer the selected one), written against a [Backend] and a
//!   [Ui] so any front-end, or a test double, can drive them.
//!
//! ```no_run
//! use migrator_client::{Action, Dispatcher, MigratorClientBuilder};
//! # use migrator_client::{model::{playlist::PlaylistOption, CredentialsFile}, StatusElement, Ui};
//! # struct MyUi;
//! # impl Ui for MyUi {
//! #     fn open_url(&self, _: &reqwest::Url) {}
//! #     fn selected_file(&self) -> Option<CredentialsFile> { None }
//! #     fn alert(&self, _: &str) {}
//! #     fn set_status(&self, _: StatusElement, _: &str) {}
//! #     fn replace_options(&self, _: Vec<PlaylistOption>) {}
//! #     fn selected_playlist(&self) -> Option<String> { None }
//! #     fn render_report(&self, _: &str) {}
//! # }
//! # async fn run() -> migrator_client::Result<()> {
//! let client = MigratorClientBuilder::new("http://127.0.0.1:8000").build()?;
//! let dispatcher = Dispatcher::new(client, MyUi);
//!
//! dispatcher.dispatch(Action::LoadPlaylists).await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod client;
pub mod dispatcher;
pub mod model;
pub mod ui;

mod error;
mod util;

pub use crate::{
    backend::Backend,
    client::{MigratorClient, MigratorClientBuilder},
    dispatcher::Dispatcher,
    error::{Error, Result},
    ui::{Action, StatusElement, Ui},
};

/// Re-exports the traits needed to call every backend route on a [MigratorClient].
pub mod prelude {
    pub use crate::{
        backend::Backend,
        client::{SpotifyRoutes, YoutubeRoutes},
        ui::Ui,
    };
}
