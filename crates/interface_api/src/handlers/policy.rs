//! Policy handlers

use axum::{
    extract::{Path, State},
    Json,
};

use core_kernel::PolicyNumber;

use crate::dto::policy::PolicyHolderResponse;
use crate::{error::ApiError, AppState};

/// Looks up the holder of a policy number, regardless of insurance type
pub async fn get_holder(
    State(state): State<AppState>,
    Path(policy_number): Path<String>,
) -> Result<Json<PolicyHolderResponse>, ApiError> {
    let number: PolicyNumber = policy_number
        .parse()
        .map_err(|e: core_kernel::PolicyNumberError| ApiError::BadRequest(e.to_string()))?;

    let holder = state
        .intake
        .policy_holder(&policy_number)
        .ok_or_else(|| ApiError::NotFound(format!("No policy with number {number}")))?;

    Ok(Json(PolicyHolderResponse {
        policy_number: number.value(),
        holder,
    }))
}
