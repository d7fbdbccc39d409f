//! Wizard session DTOs

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct BasicInfoRequest {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub policy_number: String,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub insurance_type: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DetailsRequest {
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DocumentQuery {
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
}
