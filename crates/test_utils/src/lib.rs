//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim intake test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built policy tables, descriptions and timestamps
//! - `builders`: Builder patterns for test data construction
//! - `classifier`: Deterministic classifier fakes and in-memory images
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod classifier;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use classifier::*;
pub use assertions::*;
pub use generators::*;
