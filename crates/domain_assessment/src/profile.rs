//! Per-type assessment profiles
//!
//! Relevance keywords for the classifier labels, the catalogues the
//! estimate draws from, and the share of the estimate that is approved.

use rust_decimal_macros::dec;

use core_kernel::{InsuranceType, Rate};

/// A named item with a whole-rupee cost range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBand {
    pub name: &'static str,
    pub min: i64,
    pub max: i64,
}

impl PriceBand {
    const fn new(name: &'static str, min: i64, max: i64) -> Self {
        Self { name, min, max }
    }

    pub fn contains(&self, amount: i64) -> bool {
        (self.min..self.max).contains(&amount)
    }
}

pub const VEHICLE_PARTS: &[PriceBand] = &[
    PriceBand::new("Front Bumper", 5000, 15000),
    PriceBand::new("Rear Bumper", 5000, 12000),
    PriceBand::new("Windshield", 8000, 20000),
    PriceBand::new("Doors", 3000, 10000),
    PriceBand::new("Headlights", 2000, 7000),
    PriceBand::new("Tires", 1500, 6000),
    PriceBand::new("Hood", 4000, 12000),
    PriceBand::new("Side Panel", 6000, 18000),
];

pub const VEHICLE_DAMAGE_TYPES: &[&str] = &[
    "dent", "scratch", "crack", "shattered", "broken", "collision damage",
];

pub const PROPERTY_SEVERITY_LEVELS: &[PriceBand] = &[
    PriceBand::new("minor", 10000, 30000),
    PriceBand::new("moderate", 30000, 80000),
    PriceBand::new("severe", 80000, 200000),
];

pub const PROPERTY_DAMAGE_TYPES: &[&str] = &["water", "fire", "structural", "theft", "vandalism"];

pub const MEDICAL_DOCUMENT_TYPES: &[&str] = &[
    "medical bill", "prescription", "hospital report", "diagnostic report",
    "doctor's note", "discharge summary",
];

pub const MEDICAL_TREATMENTS: &[PriceBand] = &[
    PriceBand::new("consultation", 500, 3000),
    PriceBand::new("procedure", 3000, 50000),
    PriceBand::new("hospitalization", 10000, 200000),
    PriceBand::new("medication", 200, 10000),
    PriceBand::new("diagnostic test", 1000, 15000),
];

const VEHICLE_KEYWORDS: &[&str] = &[
    "car", "vehicle", "truck", "jeep", "automobile", "minivan", "pickup", "suv",
    "sports car", "convertible",
];

const PROPERTY_KEYWORDS: &[&str] = &[
    "house", "building", "property", "apartment", "structure", "fire", "flame",
    "smoke", "condo", "residence",
];

const MEDICAL_KEYWORDS: &[&str] = &[
    "medical", "hospital", "clinic", "doctor", "prescription", "report", "bill",
    "envelope", "paper", "document", "form", "certificate", "letter", "chart",
    "record", "x-ray", "ambulance", "stretcher", "pharmacy", "medicine",
];

/// Label substrings that make a prediction relevant to the type
pub fn relevance_keywords(insurance_type: InsuranceType) -> &'static [&'static str] {
    match insurance_type {
        InsuranceType::Auto => VEHICLE_KEYWORDS,
        InsuranceType::Home => PROPERTY_KEYWORDS,
        InsuranceType::Health => MEDICAL_KEYWORDS,
    }
}

/// Share of the estimated cost that is approved
pub fn claim_rate(insurance_type: InsuranceType) -> Rate {
    match insurance_type {
        InsuranceType::Auto => Rate::new(dec!(0.80)),
        InsuranceType::Home => Rate::new(dec!(0.70)),
        InsuranceType::Health => Rate::new(dec!(0.85)),
    }
}

/// Medical document kind suggested by a classifier label, if any
pub fn infer_document_type(label: &str) -> Option<&'static str> {
    let label = label.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| label.contains(n));

    if has(&["prescription"]) {
        Some("prescription")
    } else if has(&["bill", "invoice"]) {
        Some("medical bill")
    } else if has(&["report", "summary"]) {
        Some("medical report")
    } else if has(&["x-ray", "scan"]) {
        Some("diagnostic image")
    } else {
        None
    }
}
