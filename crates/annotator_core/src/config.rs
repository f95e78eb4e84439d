//! Optional TOML configuration for the annotator.

use crate::{AnnotatorError, DEFAULT_OUTPUT_PATH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "annotator.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Destination of the TSV written on save and on exit.
    pub output_path: PathBuf,
    /// Edge length in pixels of the square image preview.
    pub display_size: u32,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            display_size: 400,
        }
    }
}

impl AnnotatorConfig {
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, AnnotatorError> {
        toml::from_str(text).map_err(|source| AnnotatorError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AnnotatorError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text, path)
    }

    /// Load an explicit file, or `annotator.toml` if it exists, or fall back to defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, AnnotatorError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            tracing::info!("using config {}", fallback.display());
            return Self::load(fallback);
        }
        Ok(Self::default())
    }
}
