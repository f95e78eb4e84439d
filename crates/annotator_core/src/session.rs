//! Annotation session: cursor over the image set plus the per-image label map.
//!
//! The selection shown by the presentation layer is never read from shared state;
//! callers pass it to every operation that commits.

use crate::{AnnotatorError, ImageSource, LabelPair, export};
use std::collections::HashMap;
use std::path::Path;

/// Snapshot of the image under the cursor, used to (re)render the form.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentImage {
    pub filename: String,
    pub index: usize,
    pub total: usize,
    /// Stored labels, or the default pair when the image was never committed.
    pub labels: LabelPair,
    /// Position in percent, `(index + 1) / total * 100`.
    pub progress: f64,
}

impl CurrentImage {
    pub fn progress_text(&self) -> String {
        format!("Progress: {:.2}%", self.progress)
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Moved(CurrentImage),
    /// Advance requested on the last image; cursor unchanged.
    NoMoreImages,
    /// Retreat requested on the first image; cursor unchanged.
    AlreadyFirst,
}

impl Step {
    /// Title and message of the notice for a boundary step.
    pub fn notice(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Step::Moved(_) => None,
            Step::NoMoreImages => Some(("End of Images", "No more images to display.")),
            Step::AlreadyFirst => Some(("Start of Images", "This is the first image.")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnnotationSession {
    images: Vec<String>,
    cursor: usize,
    annotations: HashMap<String, LabelPair>,
}

impl AnnotationSession {
    /// Start a session over `images`, sorted lexicographically.
    pub fn new(mut images: Vec<String>) -> Result<Self, AnnotatorError> {
        if images.is_empty() {
            return Err(AnnotatorError::EmptyImageSet);
        }
        images.sort();
        tracing::info!("annotation session over {} images", images.len());
        Ok(Self {
            images,
            cursor: 0,
            annotations: HashMap::new(),
        })
    }

    pub fn from_source<S: ImageSource + ?Sized>(source: &S) -> Result<Self, AnnotatorError> {
        Self::new(source.list()?)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; a session holds at least one image.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current_filename(&self) -> &str {
        &self.images[self.cursor]
    }

    pub fn label_for(&self, filename: &str) -> Option<LabelPair> {
        self.annotations.get(filename).copied()
    }

    pub fn labeled_count(&self) -> usize {
        self.annotations.len()
    }

    pub fn load_current(&self) -> CurrentImage {
        let filename = self.current_filename().to_string();
        let labels = self.label_for(&filename).unwrap_or_default();
        let total = self.images.len();
        CurrentImage {
            filename,
            index: self.cursor,
            total,
            labels,
            progress: (self.cursor + 1) as f64 / total as f64 * 100.0,
        }
    }

    /// Store `labels` for the image under the cursor, replacing any earlier pair.
    pub fn commit_current(&mut self, labels: LabelPair) {
        let filename = self.images[self.cursor].clone();
        tracing::debug!(
            "commit {} -> {}/{}",
            filename,
            labels.gender,
            labels.status
        );
        self.annotations.insert(filename, labels);
    }

    /// Commit `labels`, then move to the next image if there is one.
    pub fn advance(&mut self, labels: LabelPair) -> Step {
        self.commit_current(labels);
        if self.cursor + 1 < self.images.len() {
            self.cursor += 1;
            Step::Moved(self.load_current())
        } else {
            tracing::debug!("advance at last image ignored");
            Step::NoMoreImages
        }
    }

    /// Commit `labels`, then move to the previous image if there is one.
    pub fn retreat(&mut self, labels: LabelPair) -> Step {
        self.commit_current(labels);
        if self.cursor > 0 {
            self.cursor -= 1;
            Step::Moved(self.load_current())
        } else {
            tracing::debug!("retreat at first image ignored");
            Step::AlreadyFirst
        }
    }

    /// Commit `labels`, then rewrite the whole TSV at `path`.
    pub fn save_all(
        &mut self,
        labels: LabelPair,
        path: impl AsRef<Path>,
    ) -> Result<usize, AnnotatorError> {
        self.commit_current(labels);
        self.write_to(path)
    }

    /// Rewrite the TSV at `path` from the committed labels only.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<usize, AnnotatorError> {
        let path = path.as_ref();
        let rows = export::write_tsv(&self.images, &self.annotations, path)?;
        tracing::info!("saved {} annotations to {}", rows, path.display());
        Ok(rows)
    }
}
