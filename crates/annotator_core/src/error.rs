use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the annotation core.
#[derive(Debug, Error)]
pub enum AnnotatorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Path does not exist: {0:?}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0:?}")]
    NotADirectory(PathBuf),

    /// The image set must hold at least one name for the cursor to be valid.
    #[error("No images to annotate")]
    EmptyImageSet,

    #[error("Unknown {kind} label '{value}'")]
    UnknownLabel { kind: &'static str, value: String },
}
