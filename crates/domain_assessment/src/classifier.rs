//! Classifier port and prediction ranking

use image::DynamicImage;
use serde::Serialize;
use std::cmp::Ordering;

use crate::error::AssessmentError;

/// Number of ranked predictions used downstream
pub const TOP_K: usize = 5;

/// A generic pretrained image classifier
///
/// Implementations return one raw score (logit) per label; ranking and
/// normalization happen in `predict`.
pub trait ImageClassifier: Send + Sync {
    /// Label vocabulary, index-aligned with `class_scores`
    fn labels(&self) -> &[String];

    /// Raw class scores for a decoded image
    fn class_scores(&self, image: &DynamicImage) -> Result<Vec<f32>, AssessmentError>;
}

/// A ranked class label with its probability
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Lower-cased label
    pub label: String,
    pub probability: f32,
}

impl Prediction {
    /// Debug line for the 1-based `rank`, e.g. `Prediction 1: sports car (62.3%)`
    pub fn debug_line(&self, rank: usize) -> String {
        format!(
            "Prediction {}: {} ({:.1}%)",
            rank,
            self.label,
            f64::from(self.probability) * 100.0
        )
    }
}

/// Numerically stable softmax
pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Indices of the `k` largest probabilities, highest first; ties keep index order
pub fn top_k(probabilities: &[f32], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..probabilities.len()).collect();
    indices.sort_by(|&a, &b| {
        probabilities[b]
            .partial_cmp(&probabilities[a])
            .unwrap_or(Ordering::Equal)
    });
    indices.truncate(k);
    indices
}

/// Runs the classifier and returns the top predictions
pub fn predict<C: ImageClassifier + ?Sized>(
    classifier: &C,
    image: &DynamicImage,
    k: usize,
) -> Result<Vec<Prediction>, AssessmentError> {
    let labels = classifier.labels();
    let scores = classifier.class_scores(image)?;
    if scores.is_empty() || scores.len() != labels.len() {
        return Err(AssessmentError::LabelMismatch {
            labels: labels.len(),
            scores: scores.len(),
        });
    }

    let probabilities = softmax(&scores);
    Ok(top_k(&probabilities, k)
        .into_iter()
        .map(|i| Prediction {
            label: labels[i].to_lowercase(),
            probability: probabilities[i],
        })
        .collect())
}
