//! Keyword rule tables used by the claim validator
//!
//! All entries are lower case; descriptions are lower-cased before matching.

use core_kernel::InsuranceType;

const AUTO_VALID_EVENTS: &[&str] = &[
    "accident", "collision", "crash", "total loss", "stolen", "theft",
    "hit and run", "severe damage", "major damage", "write-off",
    "rear-ended", "side-swiped", "rollover", "flood damage", "fire damage",
];

const HOME_VALID_EVENTS: &[&str] = &[
    "fire", "flood", "earthquake", "storm", "hurricane", "tornado",
    "theft", "burglary", "vandalism", "structural damage", "roof damage",
    "water damage", "mold", "electrical fire", "gas leak", "explosion",
    "natural disaster", "severe weather", "lightning strike",
];

const HEALTH_VALID_EVENTS: &[&str] = &[
    "emergency", "hospitalization", "surgery", "critical illness",
    "serious injury", "accident", "heart attack", "stroke", "cancer",
    "broken bone", "fracture", "severe pain", "life-threatening",
    "medical emergency", "ambulance", "intensive care", "icu",
];

const AUTO_MINOR_ISSUES: &[&str] = &[
    "small scratch", "minor dent", "cosmetic damage", "paint chip", "small ding", "light scratch",
];

const HOME_MINOR_ISSUES: &[&str] = &[
    "small leak", "minor stain", "cosmetic damage", "small crack", "minor wear", "light damage",
];

const HEALTH_MINOR_ISSUES: &[&str] = &[
    "minor cold", "small cut", "minor bruise", "headache", "minor pain", "small injury",
];

/// Routine or wear-related issues, for every insurance type
pub const MAINTENANCE_ISSUES: &[&str] = &[
    "regular maintenance", "routine check", "preventive care", "annual checkup",
    "wear and tear", "normal wear", "aging", "old", "worn out", "maintenance",
    "service", "oil change", "tune up", "cleaning", "minor repair",
];

/// Phrases that flag a claim for fraud investigation
pub const FRAUD_PATTERNS: &[&str] = &[
    "repeat claim", "exaggerated", "suspicious", "fake", "scam", "false report",
    "fraudulent", "duplicate", "multiple claims", "suspicious activity",
    "unusual pattern", "made up", "fake damage", "pretend", "simulate",
];

/// Words indicating a high-severity incident
pub const SEVERITY_INDICATORS: &[&str] = &[
    "severe", "major", "extensive", "significant", "substantial", "serious", "critical",
];

/// Events that qualify as a legitimate claim for the given type
pub fn valid_events(insurance_type: InsuranceType) -> &'static [&'static str] {
    match insurance_type {
        InsuranceType::Auto => AUTO_VALID_EVENTS,
        InsuranceType::Home => HOME_VALID_EVENTS,
        InsuranceType::Health => HEALTH_VALID_EVENTS,
    }
}

/// Minor issues that do not qualify for a claim of the given type
pub fn minor_issues(insurance_type: InsuranceType) -> &'static [&'static str] {
    match insurance_type {
        InsuranceType::Auto => AUTO_MINOR_ISSUES,
        InsuranceType::Home => HOME_MINOR_ISSUES,
        InsuranceType::Health => HEALTH_MINOR_ISSUES,
    }
}
