//! Store errors.
use std::panic::Location;
use std::sync::Arc;

use camino::Utf8PathBuf;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// The store file could not be read or written.
    #[error("Unable to access the store file {path}: {source}, {location}")]
    Io {
        path: Utf8PathBuf,
        source: Arc<std::io::Error>,
        location: &'static Location<'static>,
    },

    /// The store file is not a JSON object of strings.
    #[error("The store file {path} is not valid: {source}, {location}")]
    Serialization {
        path: Utf8PathBuf,
        source: Arc<serde_json::Error>,
        location: &'static Location<'static>,
    },
}

impl Error {
    #[track_caller]
    pub(crate) fn io(path: &Utf8PathBuf, err: std::io::Error) -> Self {
        Self::Io {
            path: path.clone(),
            source: Arc::new(err),
            location: Location::caller(),
        }
    }

    #[track_caller]
    pub(crate) fn serialization(path: &Utf8PathBuf, err: serde_json::Error) -> Self {
        Self::Serialization {
            path: path.clone(),
            source: Arc::new(err),
            location: Location::caller(),
        }
    }
}
