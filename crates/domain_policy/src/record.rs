//! Policy table rows

use serde::{Deserialize, Serialize};

use core_kernel::{InsuranceType, PolicyNumber};

/// A single policy as listed in the policy table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub policy_number: PolicyNumber,
    pub holder_name: String,
    pub insurance_type: InsuranceType,
}

impl PolicyRecord {
    pub fn new(
        policy_number: impl Into<PolicyNumber>,
        holder_name: impl Into<String>,
        insurance_type: InsuranceType,
    ) -> Self {
        Self {
            policy_number: policy_number.into(),
            holder_name: holder_name.into(),
            insurance_type,
        }
    }
}
