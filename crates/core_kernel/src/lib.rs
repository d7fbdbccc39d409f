//! Core Kernel - Foundational types for the claim-intake system
//!
//! This crate provides the building blocks shared by every other crate:
//! - `InsuranceType`, the closed set of lines of business
//! - Policy numbers and wizard session identifiers
//! - Rupee amounts and ratios with precise decimal arithmetic for estimates
//! - Substring keyword matching used by the rule tables

pub mod money;
pub mod identifiers;
pub mod insurance;
pub mod keywords;
pub mod error;

pub use money::{Money, Rate};
pub use identifiers::{SessionId, PolicyNumber, PolicyNumberError};
pub use insurance::InsuranceType;
pub use keywords::{contains_any, first_match};
pub use error::CoreError;
