use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("No credentials file has been selected")]
    NoFileSelected,
    #[error("No playlist has been selected")]
    NoPlaylistSelected,
    #[error("Unknown control: {0}")]
    UnknownControl(String),
    #[error("Invalid backend base URL {0:?}: {1}")]
    InvalidBaseUrl(String, String),

    #[error("The backend responded with status {status}: {body}")]
    UnsuccessfulResponse { status: u16, body: String },

    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Returns the HTTP status code of an unsuccessful backend response, or of a reqwest error that carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnsuccessfulResponse { status, .. } => Some(*status),
            Error::HttpError(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Returns the `detail` field of a FastAPI-style error body, if the backend sent one.
    pub fn detail(&self) -> Option<String> {
        let Error::UnsuccessfulResponse { body, .. } = self else {
            return None;
        };

        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        match value.get("detail")? {
            serde_json::Value::String(detail) => Some(detail.clone()),
            other => Some(other.to_string()),
        }
    }
}
