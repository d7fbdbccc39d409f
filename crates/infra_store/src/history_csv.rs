//! Claim history export and import
//!
//! Export is a pure serialization of the records in insertion order. The
//! header row is always written, so an empty history exports as a single
//! line.

use std::io::{Read, Write};
use std::path::Path;

use tracing::info;

use domain_claims::ClaimRecord;

use crate::error::StoreError;

/// Column order of the history export
pub const HISTORY_COLUMNS: [&str; 8] = [
    "timestamp",
    "name",
    "policy_number",
    "insurance_type",
    "description",
    "status",
    "ai_guidance",
    "document_count",
];

/// Writes records as CSV with a header row
pub fn write_history<W: Write>(records: &[ClaimRecord], sink: W) -> Result<(), StoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);

    writer.write_record(HISTORY_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Renders records as CSV text
pub fn export_history(records: &[ClaimRecord]) -> Result<String, StoreError> {
    let mut buffer = Vec::new();
    write_history(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| StoreError::Encoding(e.to_string()))
}

/// Reads records previously written by `write_history`
pub fn read_history<R: Read>(source: R) -> Result<Vec<ClaimRecord>, StoreError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(source);
    reader
        .deserialize::<ClaimRecord>()
        .map(|row| row.map_err(StoreError::from))
        .collect()
}

/// Writes the history to a file, replacing it
pub fn save_history(path: impl AsRef<Path>, records: &[ClaimRecord]) -> Result<(), StoreError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| StoreError::io(path.display(), e))?;
    write_history(records, file)?;
    info!(path = %path.display(), claims = records.len(), "Claim history saved");
    Ok(())
}

/// Reads the history from a file
pub fn load_history(path: impl AsRef<Path>) -> Result<Vec<ClaimRecord>, StoreError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| StoreError::io(path.display(), e))?;
    read_history(file)
}
