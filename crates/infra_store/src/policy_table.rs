//! Policy table loading

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use core_kernel::InsuranceType;
use domain_policy::{PolicyRecord, PolicyStore};

use crate::error::StoreError;

/// One row of the policy table as stored
#[derive(Debug, Deserialize)]
struct PolicyRow {
    policy_number: i64,
    policy_holder: String,
    insurance_type: String,
}

/// Loads the policy table from a CSV file
pub fn load_policy_table(path: impl AsRef<Path>) -> Result<PolicyStore, StoreError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| StoreError::io(path.display(), e))?;

    let store = collect_rows(reader)?;
    info!(path = %path.display(), policies = store.len(), "Policy table loaded");
    Ok(store)
}

/// Reads a policy table from any CSV source with a header row
pub fn read_policy_table<R: Read>(source: R) -> Result<PolicyStore, StoreError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);
    collect_rows(reader)
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<PolicyStore, StoreError> {
    let headers = reader.headers()?.clone();
    let mut records = Vec::new();
    for result in reader.records() {
        let raw = result?;
        let row: PolicyRow = raw.deserialize(Some(&headers))?;
        let insurance_type = row.insurance_type.parse::<InsuranceType>().map_err(|_| {
            StoreError::UnknownInsuranceType {
                // line where the record starts; quoted fields may span lines
                line: raw.position().map_or(0, csv::Position::line),
                value: row.insurance_type.clone(),
            }
        })?;
        records.push(PolicyRecord::new(
            row.policy_number,
            row.policy_holder,
            insurance_type,
        ));
    }
    Ok(PolicyStore::new(records))
}
