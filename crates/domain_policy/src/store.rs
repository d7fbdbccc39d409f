//! In-memory policy store

use tracing::debug;

use core_kernel::{InsuranceType, PolicyNumber};
use crate::record::PolicyRecord;

/// Read-only table of policies
///
/// Rows keep their load order; lookups are linear scans so that the first
/// matching row wins when policy numbers repeat.
#[derive(Debug, Clone, Default)]
pub struct PolicyStore {
    records: Vec<PolicyRecord>,
}

impl PolicyStore {
    /// Creates a store from rows in load order
    pub fn new(records: Vec<PolicyRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PolicyRecord] {
        &self.records
    }

    /// Returns the holder of the first policy with this number, regardless of type
    pub fn find_holder(&self, policy_number: PolicyNumber) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.policy_number == policy_number)
            .map(|r| r.holder_name.as_str())
    }

    /// Returns the first policy matching both number and insurance type
    pub fn find_policy(
        &self,
        policy_number: PolicyNumber,
        insurance_type: InsuranceType,
    ) -> Option<&PolicyRecord> {
        let found = self
            .records
            .iter()
            .find(|r| r.policy_number == policy_number && r.insurance_type == insurance_type);

        debug!(
            policy_number = %policy_number,
            insurance_type = %insurance_type,
            found = found.is_some(),
            "Policy lookup"
        );
        found
    }

    /// Looks up a holder from raw form input
    ///
    /// Text that is not a policy number yields `None`, the same as an
    /// unknown number.
    pub fn lookup_holder(&self, raw_policy_number: &str) -> Option<&str> {
        let number = raw_policy_number.parse::<PolicyNumber>().ok()?;
        self.find_holder(number)
    }
}

impl FromIterator<PolicyRecord> for PolicyStore {
    fn from_iter<I: IntoIterator<Item = PolicyRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
