//! Core of the gender/status image annotator: label vocabulary, the
//! annotation session and the TSV writer. Free of any GUI dependency.

mod config;
mod error;
mod export;
mod labels;
mod session;
mod source;

pub use config::{AnnotatorConfig, DEFAULT_CONFIG_FILE};
pub use error::AnnotatorError;
pub use export::{DEFAULT_OUTPUT_PATH, HEADER, write_tsv, write_tsv_to};
pub use labels::{Gender, LabelPair, Status};
pub use session::{AnnotationSession, CurrentImage, Step};
pub use source::{FolderSource, ImageSource};
