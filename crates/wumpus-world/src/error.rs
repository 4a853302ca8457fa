use std::path::PathBuf;

use thiserror::Error;

/// Errors building a world from configuration.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read config {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("no free square left to place the {0}")]
    Crowded(&'static str),
}

pub type Result<T> = std::result::Result<T, WorldError>;
