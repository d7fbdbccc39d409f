//! Policy DTOs

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PolicyHolderResponse {
    pub policy_number: i64,
    pub holder: String,
}
