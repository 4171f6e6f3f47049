use crate::commands::CmdMessage;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragzError {
    /// Recovered by the merger: the fragment is skipped with a warning.
    #[error("{0}: file not found")]
    FragmentNotFound(String),

    #[error("Failed to read fragment {name}: {source}")]
    FragmentRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fatal error raised after diagnostics were already produced.
    #[error("{source}")]
    Interrupted {
        notices: Vec<CmdMessage>,
        source: Box<FragzError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, FragzError>;
