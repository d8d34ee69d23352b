use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading an instance. The search itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read instance {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid instance {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
