//! Image assessment DTOs

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AssessmentQuery {
    pub insurance_type: String,
}
