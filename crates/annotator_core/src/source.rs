//! Providers for the list of image names a session walks through.

use crate::AnnotatorError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Yields the identifiers of the images to annotate.
pub trait ImageSource {
    fn list(&self) -> Result<Vec<String>, AnnotatorError>;
}

/// Every direct entry of a directory, without extension filtering.
#[derive(Debug, Clone)]
pub struct FolderSource {
    root: PathBuf,
}

impl FolderSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a listed image.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl ImageSource for FolderSource {
    fn list(&self) -> Result<Vec<String>, AnnotatorError> {
        let root = self.root.as_path();
        if !root.exists() {
            return Err(AnnotatorError::PathNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(AnnotatorError::NotADirectory(root.to_path_buf()));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!("walkdir error: {}", e);
                    continue;
                }
            };
            let name = match entry.file_name().to_str() {
                Some(name) => name.to_string(),
                None => {
                    let lossy = entry.file_name().to_string_lossy().into_owned();
                    tracing::warn!(
                        "file name is not valid UTF-8, listing it as {:?}; it cannot be displayed",
                        lossy
                    );
                    lossy
                }
            };
            names.push(name);
        }
        tracing::debug!("listed {} entries in {}", names.len(), root.display());
        Ok(names)
    }
}

impl ImageSource for [String] {
    fn list(&self) -> Result<Vec<String>, AnnotatorError> {
        Ok(self.to_vec())
    }
}

impl ImageSource for Vec<String> {
    fn list(&self) -> Result<Vec<String>, AnnotatorError> {
        self.as_slice().list()
    }
}
