//! Image Assessment Domain
//!
//! Scores an uploaded claim photo against a generic pretrained image
//! classifier and, when the top predictions look relevant to the insurance
//! type, synthesizes a cosmetic damage estimate.
//!
//! # Pipeline
//!
//! ```text
//! bytes -> decode -> classifier logits -> softmax -> top-5
//!       -> relevance gate (type keywords) -> pseudo-random estimate
//! ```
//!
//! The estimate has no relation to the image beyond the coarse relevance
//! gate. Randomness is always injected by the caller so that a fixed seed
//! gives a fixed estimate.

pub mod classifier;
pub mod preprocess;
pub mod onnx;
pub mod profile;
pub mod estimate;
pub mod assessor;
pub mod error;

pub use classifier::{ImageClassifier, Prediction};
pub use onnx::OnnxClassifier;
pub use estimate::{DamageEstimate, EstimateDetail};
pub use assessor::{Assessment, ImageAssessor};
pub use error::AssessmentError;
