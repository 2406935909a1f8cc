use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconlineError {
    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("layout references undefined segment `{0}`")]
    UnknownSegment(String),

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = IconlineError> = std::result::Result<T, E>;
