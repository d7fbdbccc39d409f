//! ONNX Runtime adapter for the classifier port
//!
//! Runs a pretrained ImageNet classifier (ResNet-50 exported to ONNX) and
//! returns the raw logits of the first output row.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use image::DynamicImage;
use ort::session::Session;
use ort::value::Tensor;
use tracing::info;

use crate::classifier::ImageClassifier;
use crate::error::AssessmentError;
use crate::preprocess::{to_input_tensor, INPUT_SHAPE};

/// Classifier backed by an ONNX Runtime session
pub struct OnnxClassifier {
    /// `Session::run` needs `&mut self`
    session: Mutex<Session>,
    labels: Vec<String>,
}

impl OnnxClassifier {
    /// Loads the model and its label list; both must exist
    pub fn load(
        model_path: impl AsRef<Path>,
        labels_path: impl AsRef<Path>,
    ) -> Result<Self, AssessmentError> {
        let model_path = model_path.as_ref();
        let path_text = model_path.display().to_string();
        let model_error = |reason: String| AssessmentError::ModelLoad {
            path: path_text.clone(),
            reason,
        };

        if !model_path.exists() {
            return Err(model_error("model file not found".to_string()));
        }

        let labels = load_labels(labels_path)?;
        let session = Session::builder()
            .map_err(|e| model_error(e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e| model_error(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| model_error(e.to_string()))?;

        info!(model = %path_text, labels = labels.len(), "Image classifier loaded");

        Ok(Self {
            session: Mutex::new(session),
            labels,
        })
    }
}

impl ImageClassifier for OnnxClassifier {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn class_scores(&self, image: &DynamicImage) -> Result<Vec<f32>, AssessmentError> {
        let input = to_input_tensor(image)?;
        let tensor = Tensor::from_array((INPUT_SHAPE.to_vec(), input))
            .map_err(|e| AssessmentError::Inference(format!("tensor creation error: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| AssessmentError::Inference(format!("session lock poisoned: {e}")))?;

        let outputs = session
            .run(ort::inputs![tensor])
            .map_err(|e| AssessmentError::Inference(e.to_string()))?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| AssessmentError::Inference("no output tensor".to_string()))?;

        let (_shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| AssessmentError::Inference(format!("tensor extraction failed: {e}")))?;

        Ok(data.iter().take(self.labels.len()).copied().collect())
    }
}

/// Reads a newline-separated label file
pub fn load_labels(path: impl AsRef<Path>) -> Result<Vec<String>, AssessmentError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| AssessmentError::Labels {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let labels = parse_labels(&text);
    if labels.is_empty() {
        return Err(AssessmentError::Labels {
            path: path.display().to_string(),
            reason: "label file is empty".to_string(),
        });
    }
    Ok(labels)
}

/// One label per line; trailing blank lines are dropped
pub fn parse_labels(text: &str) -> Vec<String> {
    let mut labels: Vec<String> = text.lines().map(|l| l.trim().to_string()).collect();
    while labels.last().is_some_and(|l| l.is_empty()) {
        labels.pop();
    }
    labels
}
