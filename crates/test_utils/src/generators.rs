//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claim input that exercises
//! specific stages of the validator.

use core_kernel::{contains_any, InsuranceType};
use domain_claims::rules;
use proptest::prelude::*;
use proptest::sample::select;

/// Words that match no keyword in any rule table
pub const NEUTRAL_WORDS: &[&str] = &[
    "yesterday", "near", "junction", "we", "saw", "it", "happened", "at", "noon", "then",
];

/// Strategy for generating insurance types
pub fn insurance_type_strategy() -> impl Strategy<Value = InsuranceType> {
    select(InsuranceType::ALL.to_vec())
}

/// Strategy for neutral filler text
pub fn neutral_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(select(NEUTRAL_WORDS.to_vec()), 0..8).prop_map(|w| w.join(" "))
}

/// Strategy for a type and a description holding one of its valid events
/// and nothing from the later rule stages
pub fn valid_event_claim_strategy() -> impl Strategy<Value = (InsuranceType, String)> {
    insurance_type_strategy().prop_flat_map(|t| {
        (
            Just(t),
            select(plain_valid_events(t)),
            neutral_text_strategy(),
            neutral_text_strategy(),
        )
            .prop_map(|(t, event, before, after)| (t, format!("{before} {event} {after}")))
    })
}

/// Valid events that do not themselves contain a later-stage keyword
///
/// Excludes entries such as "severe damage" (severity) and "mold" ("old").
pub fn plain_valid_events(insurance_type: InsuranceType) -> Vec<&'static str> {
    rules::valid_events(insurance_type)
        .iter()
        .copied()
        .filter(|event| {
            !contains_any(event, rules::minor_issues(insurance_type))
                && !contains_any(event, rules::MAINTENANCE_ISSUES)
                && !contains_any(event, rules::FRAUD_PATTERNS)
                && !contains_any(event, rules::SEVERITY_INDICATORS)
        })
        .collect()
}

/// Strategy for one keyword from a static table
pub fn keyword_strategy(table: &'static [&'static str]) -> impl Strategy<Value = &'static str> {
    select(table.to_vec())
}

/// Strategy for policy numbers in their text form
pub fn policy_number_text_strategy() -> impl Strategy<Value = String> {
    (1i64..1_000_000i64).prop_map(|n| n.to_string())
}

/// Strategy for text that contains a non-digit after some digits
pub fn malformed_policy_number_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,6}[a-z.]{1,3}"
}
