use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing or reading the vehicle output file
#[derive(Error, Debug)]
pub enum VehicleError {
    /// The output file could not be created, written or read
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Vehicle records could not be serialized or parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VehicleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
