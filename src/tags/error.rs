use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomDataError {
    #[error("Failed to read custom data {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid custom data {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
