//! Image assessment entry point

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use core_kernel::{first_match, InsuranceType};

use crate::classifier::{self, ImageClassifier, Prediction, TOP_K};
use crate::error::AssessmentError;
use crate::estimate::DamageEstimate;
use crate::profile;

/// Message shown when no top prediction matches the insurance type
pub const MISMATCH_MESSAGE: &str =
    "⚠️ Image doesn't match the insurance type. Please upload a relevant image.";

/// Outcome of assessing one uploaded image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub message: String,
    /// One line per ranked prediction
    pub debug_lines: Vec<String>,
    pub estimate: Option<DamageEstimate>,
}

impl Assessment {
    pub fn is_relevant(&self) -> bool {
        self.estimate.is_some()
    }
}

/// Runs the classifier, the relevance gate and the estimate synthesis
#[derive(Clone)]
pub struct ImageAssessor {
    classifier: Arc<dyn ImageClassifier>,
}

impl ImageAssessor {
    pub fn new(classifier: Arc<dyn ImageClassifier>) -> Self {
        Self { classifier }
    }

    /// Assesses raw image bytes
    ///
    /// Never fails: decode and inference errors become a warning message,
    /// carrying whatever debug lines were produced before the failure.
    pub fn assess<R: Rng + ?Sized>(
        &self,
        image_bytes: &[u8],
        insurance_type: InsuranceType,
        rng: &mut R,
    ) -> Assessment {
        let mut debug_lines = Vec::new();
        match self.try_assess(image_bytes, insurance_type, rng, &mut debug_lines) {
            Ok(estimate) => Assessment {
                message: estimate
                    .as_ref()
                    .map(DamageEstimate::message)
                    .unwrap_or_else(|| MISMATCH_MESSAGE.to_string()),
                debug_lines,
                estimate,
            },
            Err(e) => {
                warn!(insurance_type = %insurance_type, error = %e, "Image processing failed");
                Assessment {
                    message: format!("⚠️ Error processing image: {e}"),
                    debug_lines,
                    estimate: None,
                }
            }
        }
    }

    fn try_assess<R: Rng + ?Sized>(
        &self,
        image_bytes: &[u8],
        insurance_type: InsuranceType,
        rng: &mut R,
        debug_lines: &mut Vec<String>,
    ) -> Result<Option<DamageEstimate>, AssessmentError> {
        let image = image::load_from_memory(image_bytes)?;
        let predictions = classifier::predict(self.classifier.as_ref(), &image, TOP_K)?;

        debug_lines.extend(
            predictions
                .iter()
                .enumerate()
                .map(|(i, p)| p.debug_line(i + 1)),
        );

        let Some(matched) = relevant_prediction(&predictions, insurance_type) else {
            debug!(insurance_type = %insurance_type, "No relevant prediction");
            return Ok(None);
        };

        debug!(
            insurance_type = %insurance_type,
            label = %matched.label,
            confidence = matched.probability,
            "Relevant prediction"
        );
        Ok(Some(DamageEstimate::synthesize(
            insurance_type,
            &matched.label,
            matched.probability,
            rng,
        )))
    }
}

/// First prediction, in rank order, whose label contains a type keyword
pub fn relevant_prediction(
    predictions: &[Prediction],
    insurance_type: InsuranceType,
) -> Option<&Prediction> {
    let keywords = profile::relevance_keywords(insurance_type);
    predictions
        .iter()
        .find(|p| first_match(&p.label, keywords).is_some())
}
