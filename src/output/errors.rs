use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Empty file name!")]
    EmptyFileName,

    #[error("Failed to open or create file: {}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
