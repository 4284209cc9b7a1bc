use std::path::PathBuf;

/// Errors that can occur while exporting a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize document")]
    Json(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
