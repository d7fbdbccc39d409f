//! Image assessment errors

use thiserror::Error;

/// Errors raised while loading or running the image classifier
///
/// Load errors are fatal at startup. Errors during an assessment are turned
/// into a warning message by `ImageAssessor` and never reach the caller.
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("Failed to load model {path}: {reason}")]
    ModelLoad { path: String, reason: String },

    #[error("Failed to load labels {path}: {reason}")]
    Labels { path: String, reason: String },

    #[error("{0}")]
    Decode(#[from] image::ImageError),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Classifier returned {scores} scores for {labels} labels")]
    LabelMismatch { labels: usize, scores: usize },
}
