//! Policy Store Domain
//!
//! The policy store is the read-only reference table of valid policies. It is
//! loaded once at startup (see `infra_store::policy_table`) and then shared
//! behind an `Arc` by every claim validation.
//!
//! # Lookups
//!
//! ```text
//! find_holder(number)         -> first row with that number, any type
//! find_policy(number, type)   -> first row with that number and type
//! ```
//!
//! Policy numbers are not required to be unique. When the table carries
//! duplicates, the first row in load order wins.

pub mod record;
pub mod store;

pub use record::PolicyRecord;
pub use store::PolicyStore;
