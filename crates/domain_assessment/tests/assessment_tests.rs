//! Comprehensive tests for domain_assessment

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use core_kernel::InsuranceType;

use domain_assessment::assessor::MISMATCH_MESSAGE;
use domain_assessment::classifier::{predict, TOP_K};
use domain_assessment::profile;
use domain_assessment::{EstimateDetail, ImageAssessor};

use test_utils::{
    assert_estimate_consistent, assert_estimate_type, png_bytes, FailingClassifier,
    FixedClassifier,
};

fn assessor(classifier: FixedClassifier) -> ImageAssessor {
    ImageAssessor::new(Arc::new(classifier))
}

// ============================================================================
// Relevance Gate Tests
// ============================================================================

mod relevance_tests {
    use super::*;

    #[test]
    fn test_irrelevant_image() {
        let assessment = assessor(FixedClassifier::irrelevant()).assess(
            &png_bytes(64, 48),
            InsuranceType::Auto,
            &mut StdRng::seed_from_u64(1),
        );

        assert_eq!(assessment.message, MISMATCH_MESSAGE);
        assert!(assessment.estimate.is_none());
        assert!(!assessment.is_relevant());
        assert_eq!(assessment.debug_lines.len(), 5);
        assert!(assessment.debug_lines[0].starts_with("Prediction 1: tabby ("));
    }

    #[test]
    fn test_top_five_probability_mass() {
        let classifier = FixedClassifier::irrelevant();
        let image = image::load_from_memory(&png_bytes(8, 8)).unwrap();
        let predictions = predict(&classifier, &image, TOP_K).unwrap();

        assert_eq!(predictions.len(), 5);
        let mass: f32 = predictions.iter().map(|p| p.probability).sum();
        assert!(mass <= 1.0 + 1e-6);
        assert!(predictions.windows(2).all(|w| w[0].probability >= w[1].probability));
    }

    #[test]
    fn test_labels_are_lower_cased() {
        let classifier = FixedClassifier::favoring("Sports Car");
        let image = image::load_from_memory(&png_bytes(8, 8)).unwrap();
        let predictions = predict(&classifier, &image, TOP_K).unwrap();
        assert_eq!(predictions[0].label, "sports car");
    }

    #[test]
    fn test_relevant_label_below_the_top() {
        let classifier = FixedClassifier::new(&[
            ("tabby", 5.0),
            ("goldfish", 4.0),
            ("house finch", 3.0),
            ("daisy", 2.0),
            ("banana", 1.0),
            ("zebra", 0.0),
        ]);
        let assessment = assessor(classifier).assess(
            &png_bytes(16, 16),
            InsuranceType::Home,
            &mut StdRng::seed_from_u64(3),
        );

        let estimate = assessment.estimate.expect("house finch contains house");
        assert_eq!(estimate.matched_label, "house finch");
    }

    #[test]
    fn test_relevant_label_outside_top_five_is_ignored() {
        let classifier = FixedClassifier::new(&[
            ("tabby", 6.0),
            ("goldfish", 5.0),
            ("banana", 4.0),
            ("daisy", 3.0),
            ("tench", 2.0),
            ("minivan", 1.0),
        ]);
        let assessment = assessor(classifier).assess(
            &png_bytes(16, 16),
            InsuranceType::Auto,
            &mut StdRng::seed_from_u64(3),
        );
        assert_eq!(assessment.message, MISMATCH_MESSAGE);
    }
}

// ============================================================================
// Estimate Tests
// ============================================================================

mod estimate_tests {
    use super::*;

    #[test]
    fn test_auto_estimate() {
        let assessment = assessor(FixedClassifier::favoring("sports car")).assess(
            &png_bytes(64, 48),
            InsuranceType::Auto,
            &mut StdRng::seed_from_u64(42),
        );

        let estimate = assessment.estimate.clone().unwrap();
        assert_estimate_type(&estimate, InsuranceType::Auto);
        assert_estimate_consistent(&estimate);

        let lines: Vec<_> = assessment.message.lines().collect();
        assert!(lines[0].starts_with("✅ Vehicle damage detected (confidence: "));
        assert!(lines[1].starts_with("Damage Type: "));
        assert_eq!(lines[2], format!("Estimated Repair Cost: {}", estimate.estimated_cost));
        assert_eq!(lines[3], format!("Approved Claim: {}", estimate.approved_claim));
    }

    #[test]
    fn test_home_estimate() {
        let assessment = assessor(FixedClassifier::favoring("apartment building")).assess(
            &png_bytes(40, 40),
            InsuranceType::Home,
            &mut StdRng::seed_from_u64(7),
        );

        let estimate = assessment.estimate.unwrap();
        assert_estimate_type(&estimate, InsuranceType::Home);
        assert_estimate_consistent(&estimate);
        assert!(assessment.message.starts_with("✅ Property damage detected"));
    }

    #[test]
    fn test_health_document_type_inferred_from_label() {
        let assessment = assessor(FixedClassifier::favoring("prescription pad")).assess(
            &png_bytes(40, 40),
            InsuranceType::Health,
            &mut StdRng::seed_from_u64(11),
        );

        let estimate = assessment.estimate.unwrap();
        assert_estimate_consistent(&estimate);
        assert!(matches!(
            estimate.detail,
            EstimateDetail::Medical { document_type: "prescription", .. }
        ));
        assert!(assessment.message.contains("\n Document Type: Prescription\n"));
    }

    #[test]
    fn test_health_document_type_falls_back_to_catalogue() {
        let assessment = assessor(FixedClassifier::favoring("envelope")).assess(
            &png_bytes(40, 40),
            InsuranceType::Health,
            &mut StdRng::seed_from_u64(5),
        );

        let estimate = assessment.estimate.unwrap();
        match estimate.detail {
            EstimateDetail::Medical { document_type, .. } => {
                assert!(profile::MEDICAL_DOCUMENT_TYPES.contains(&document_type));
            }
            other => panic!("unexpected detail {other:?}"),
        }
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let a = assessor(FixedClassifier::favoring("pickup"));
        let bytes = png_bytes(32, 32);

        let first = a.assess(&bytes, InsuranceType::Auto, &mut StdRng::seed_from_u64(99));
        let second = a.assess(&bytes, InsuranceType::Auto, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }
}

// ============================================================================
// Failure Tests
// ============================================================================

mod failure_tests {
    use super::*;

    #[test]
    fn test_undecodable_bytes() {
        let assessment = assessor(FixedClassifier::irrelevant()).assess(
            b"not an image",
            InsuranceType::Auto,
            &mut StdRng::seed_from_u64(1),
        );

        assert!(assessment.message.starts_with("⚠️ Error processing image: "));
        assert!(assessment.debug_lines.is_empty());
        assert!(assessment.estimate.is_none());
    }

    #[test]
    fn test_inference_failure() {
        let assessment = ImageAssessor::new(Arc::new(FailingClassifier)).assess(
            &png_bytes(8, 8),
            InsuranceType::Home,
            &mut StdRng::seed_from_u64(1),
        );

        assert_eq!(
            assessment.message,
            "⚠️ Error processing image: Inference failed: model unavailable"
        );
    }

    #[test]
    fn test_label_mismatch() {
        let assessment = assessor(FixedClassifier::mismatched()).assess(
            &png_bytes(8, 8),
            InsuranceType::Auto,
            &mut StdRng::seed_from_u64(1),
        );

        assert_eq!(
            assessment.message,
            "⚠️ Error processing image: Classifier returned 1 scores for 2 labels"
        );
    }
}

// ============================================================================
// Preprocessing Tests
// ============================================================================

mod preprocessing_tests {
    use super::*;
    use domain_assessment::preprocess::{crop_window, to_input_tensor, CROP_SIZE};

    #[test]
    fn test_thin_upload_is_preprocessed_from_its_crop_window() {
        let bytes = png_bytes(1, 100_000);
        assert!(bytes.len() < 10 * 1024 * 1024);

        let image = image::load_from_memory(&bytes).unwrap();
        let window = crop_window(1, 100_000);
        assert!(u64::from(window.width) * u64::from(window.height) <= 100_000);

        let tensor = to_input_tensor(&image).unwrap();
        assert_eq!(tensor.len(), 3 * (CROP_SIZE * CROP_SIZE) as usize);
        assert!(tensor.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_wide_upload_is_preprocessed() {
        let image = image::load_from_memory(&png_bytes(100_000, 1)).unwrap();
        let tensor = to_input_tensor(&image).unwrap();
        assert_eq!(tensor.len(), 3 * (CROP_SIZE * CROP_SIZE) as usize);
    }
}

// ============================================================================
// Estimate Properties
// ============================================================================

mod estimate_properties {
    use super::*;
    use proptest::prelude::*;
    use test_utils::insurance_type_strategy;

    proptest! {
        #[test]
        fn estimates_stay_in_band(t in insurance_type_strategy(), seed in any::<u64>()) {
            let label = match t {
                InsuranceType::Auto => "convertible",
                InsuranceType::Home => "residence",
                InsuranceType::Health => "medical chart",
            };
            let assessment = assessor(FixedClassifier::favoring(label)).assess(
                &png_bytes(12, 12),
                t,
                &mut StdRng::seed_from_u64(seed),
            );

            let estimate = assessment.estimate.unwrap();
            assert_estimate_type(&estimate, t);
            assert_estimate_consistent(&estimate);
            prop_assert!(estimate.approved_claim.amount() <= estimate.estimated_cost.amount());
            prop_assert_eq!(assessment.debug_lines.len(), 5);
        }
    }
}
