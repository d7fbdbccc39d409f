//! Classifier fakes and in-memory images
//!
//! `FixedClassifier` returns the same logits for every image, which makes
//! the ranking, the relevance gate and the debug lines fully predictable.

use std::io::Cursor;

use domain_assessment::{AssessmentError, ImageClassifier};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// Labels that match none of the relevance keywords of any type
pub const IRRELEVANT_LABELS: &[&str] = &[
    "tabby", "goldfish", "banana", "daisy", "tench", "zebra", "lemon",
];

/// Classifier returning fixed logits
#[derive(Debug, Clone)]
pub struct FixedClassifier {
    labels: Vec<String>,
    logits: Vec<f32>,
}

impl FixedClassifier {
    /// One `(label, logit)` pair per class
    pub fn new(classes: &[(&str, f32)]) -> Self {
        Self {
            labels: classes.iter().map(|(l, _)| l.to_string()).collect(),
            logits: classes.iter().map(|(_, s)| *s).collect(),
        }
    }

    /// `label` ranked first with a clear margin, irrelevant labels behind it
    pub fn favoring(label: &str) -> Self {
        let mut classes = vec![(label, 6.0)];
        classes.extend(
            IRRELEVANT_LABELS
                .iter()
                .enumerate()
                .map(|(i, l)| (*l, 1.0 - i as f32 * 0.1)),
        );
        Self::new(&classes)
    }

    /// Only irrelevant labels
    pub fn irrelevant() -> Self {
        let classes: Vec<_> = IRRELEVANT_LABELS
            .iter()
            .enumerate()
            .map(|(i, l)| (*l, 3.0 - i as f32 * 0.5))
            .collect();
        Self::new(&classes)
    }

    /// Returns a score vector of the wrong length
    pub fn mismatched() -> Self {
        Self {
            labels: vec!["sports car".to_string(), "minivan".to_string()],
            logits: vec![1.0],
        }
    }
}

impl ImageClassifier for FixedClassifier {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn class_scores(&self, _image: &DynamicImage) -> Result<Vec<f32>, AssessmentError> {
        Ok(self.logits.clone())
    }
}

/// Classifier whose inference always fails
#[derive(Debug, Clone, Default)]
pub struct FailingClassifier;

impl ImageClassifier for FailingClassifier {
    fn labels(&self) -> &[String] {
        &[]
    }

    fn class_scores(&self, _image: &DynamicImage) -> Result<Vec<f32>, AssessmentError> {
        Err(AssessmentError::Inference("model unavailable".to_string()))
    }
}

/// Encodes a gradient image of the given size as PNG
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("PNG encoding of an in-memory image");
    buffer.into_inner()
}
