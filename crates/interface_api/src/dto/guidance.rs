//! Guidance DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::InsuranceType;
use domain_claims::{CoverageSummary, Guidance};

#[derive(Debug, Serialize)]
pub struct GuidanceResponse {
    pub insurance_type: InsuranceType,
    pub context_label: String,
    pub guidance: &'static Guidance,
    pub coverage: &'static CoverageSummary,
    pub markdown: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NarrativeRequest {
    #[validate(length(max = 10000))]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct NarrativeResponse {
    pub narrative: String,
}
