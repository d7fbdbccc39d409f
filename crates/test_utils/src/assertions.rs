//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::InsuranceType;
use domain_assessment::profile::{self, PriceBand};
use domain_assessment::{DamageEstimate, EstimateDetail};
use domain_claims::{ClaimRecord, Outcome};
use rust_decimal::Decimal;

/// Asserts an outcome by its tag, reporting the full message on failure
pub fn assert_outcome_tag(outcome: &Outcome, expected_tag: &str) {
    assert_eq!(
        outcome.tag(),
        expected_tag,
        "Unexpected outcome: {}",
        outcome.message()
    );
}

/// Asserts that a record stores the message of `outcome` as its status
pub fn assert_record_status(record: &ClaimRecord, outcome: &Outcome) {
    assert_eq!(
        record.status,
        outcome.message(),
        "Record for policy {} has unexpected status",
        record.policy_number
    );
}

/// Asserts that an estimate's cost lies in its band and the claim is the
/// truncated share of the cost
///
/// # Panics
///
/// Panics if the detail names an item that no catalogue contains
pub fn assert_estimate_consistent(estimate: &DamageEstimate) {
    let band = estimate_band(estimate);
    let cost = estimate.estimated_cost.whole_units();
    assert!(
        band.contains(cost),
        "Cost {} outside [{}, {}) for {}",
        cost,
        band.min,
        band.max,
        band.name
    );

    let rate = profile::claim_rate(estimate.insurance_type);
    let expected = (Decimal::from(cost) * rate.as_decimal()).trunc();
    assert_eq!(
        estimate.approved_claim.amount(),
        expected,
        "Approved claim is not the truncated {:?} of {}",
        rate,
        cost
    );
}

fn estimate_band(estimate: &DamageEstimate) -> PriceBand {
    let (catalogue, name) = match &estimate.detail {
        EstimateDetail::Vehicle { part, .. } => (profile::VEHICLE_PARTS, *part),
        EstimateDetail::Property { severity, .. } => (profile::PROPERTY_SEVERITY_LEVELS, *severity),
        EstimateDetail::Medical { treatment, .. } => (profile::MEDICAL_TREATMENTS, *treatment),
    };
    *catalogue
        .iter()
        .find(|b| b.name == name)
        .unwrap_or_else(|| panic!("{name} is not in the catalogue"))
}

/// Asserts the type an estimate was produced for
pub fn assert_estimate_type(estimate: &DamageEstimate, insurance_type: InsuranceType) {
    assert_eq!(estimate.insurance_type, insurance_type);
    let matches = matches!(
        (&estimate.detail, insurance_type),
        (EstimateDetail::Vehicle { .. }, InsuranceType::Auto)
            | (EstimateDetail::Property { .. }, InsuranceType::Home)
            | (EstimateDetail::Medical { .. }, InsuranceType::Health)
    );
    assert!(matches, "Detail {:?} does not fit {}", estimate.detail, insurance_type);
}
