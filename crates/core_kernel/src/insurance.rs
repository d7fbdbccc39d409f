//! Lines of business accepted by the intake workflow

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Insurance type a policy is written under
///
/// Parsing is case-insensitive; display always uses the canonical
/// capitalized name because it is embedded in user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InsuranceType {
    Auto,
    Home,
    Health,
}

impl InsuranceType {
    /// All insurance types, in form order
    pub const ALL: [InsuranceType; 3] = [
        InsuranceType::Auto,
        InsuranceType::Home,
        InsuranceType::Health,
    ];

    /// Canonical display name
    pub fn name(&self) -> &'static str {
        match self {
            InsuranceType::Auto => "Auto",
            InsuranceType::Home => "Home",
            InsuranceType::Health => "Health",
        }
    }

    /// Case-insensitive comparison against free text
    pub fn matches(&self, text: &str) -> bool {
        self.name().eq_ignore_ascii_case(text.trim())
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InsuranceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.matches(s))
            .ok_or_else(|| CoreError::UnknownInsuranceType(s.to_string()))
    }
}

impl Serialize for InsuranceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for InsuranceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
