pub mod playlist;
pub mod report;
pub mod user;
pub mod youtube;

use std::{fmt, path::Path};

use serde::Deserialize;

use crate::error::Result;

/// The plain `{"message": ...}` body the backend answers some requests with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// A browser-exported YouTube Music headers file (usually `browser.json`).
///
/// The file is opaque to the client; it is read once and uploaded as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialsFile {
    file_name: String,
    contents: Vec<u8>,
}

impl CredentialsFile {
    pub fn new<S>(file_name: S, contents: Vec<u8>) -> Self
    where
        S: Into<String>,
    {
        Self {
            file_name: file_name.into(),
            contents,
        }
    }

    /// Reads a credentials file from disk. The upload keeps the file's own name.
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let contents = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("browser.json"));

        Ok(Self { file_name, contents })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub(crate) fn into_parts(self) -> (String, Vec<u8>) {
        (self.file_name, self.contents)
    }
}

// the contents are credentials, keep them out of logs
impl fmt::Debug for CredentialsFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsFile")
            .field("file_name", &self.file_name)
            .field("len", &self.contents.len())
            .finish()
    }
}
