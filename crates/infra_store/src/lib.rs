//! File-Backed Infrastructure Layer
//!
//! This crate reads the reference policy table and moves the claim history
//! in and out of CSV.
//!
//! # Files
//!
//! - **Policy table**: `policy_number, policy_holder, insurance_type`, one
//!   row per policy, loaded once at startup. Extra columns are ignored.
//! - **Claim history**: `timestamp, name, policy_number, insurance_type,
//!   description, status, ai_guidance, document_count`, one row per
//!   submitted claim in insertion order.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{load_policy_table, export_history};
//!
//! let store = load_policy_table("data/policies.csv")?;
//! let csv_text = export_history(history.records())?;
//! ```

pub mod error;
pub mod policy_table;
pub mod history_csv;

pub use error::StoreError;
pub use policy_table::{load_policy_table, read_policy_table};
pub use history_csv::{
    export_history, load_history, read_history, save_history, write_history, HISTORY_COLUMNS,
};
