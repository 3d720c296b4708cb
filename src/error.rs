//! Errors from the loading side of the crate.
//!
//! Drawing itself never fails; only reading themes, configuration, fonts
//! and icon sheets from disk can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkinError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse theme {path:?}: {source}")]
    ThemeParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse font {path:?}: {details}")]
    Font { path: PathBuf, details: String },

    #[error("failed to decode image {path:?}: {details}")]
    Image { path: PathBuf, details: String },

    #[error("file watcher error: {0}")]
    Watch(#[from] notify::Error),
}
