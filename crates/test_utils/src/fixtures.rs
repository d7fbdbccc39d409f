//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the policy table, claim descriptions
//! and timestamps. These fixtures are consistent and predictable.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::InsuranceType;
use domain_policy::{PolicyRecord, PolicyStore};
use fake::faker::name::en::Name;
use fake::Fake;

/// Fixture for the policy table
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// Policy table in its CSV form; 10004 appears once per type
    pub const CSV: &'static str = "\
policy_number,policy_holder,insurance_type
10001,Asha Rao,Auto
10002,Vikram Shah,Home
10003,Kavya Nair,Health
10004,Rahul Menon,Auto
10004,Rahul Menon,Home
";

    /// Auto policy held by Asha Rao
    pub const AUTO_POLICY: &'static str = "10001";
    /// Home policy held by Vikram Shah
    pub const HOME_POLICY: &'static str = "10002";
    /// Health policy held by Kavya Nair
    pub const HEALTH_POLICY: &'static str = "10003";
    /// Number that is not in the table
    pub const UNKNOWN_POLICY: &'static str = "99999";

    /// Rows of `CSV` in load order
    pub fn records() -> Vec<PolicyRecord> {
        vec![
            PolicyRecord::new(10001, "Asha Rao", InsuranceType::Auto),
            PolicyRecord::new(10002, "Vikram Shah", InsuranceType::Home),
            PolicyRecord::new(10003, "Kavya Nair", InsuranceType::Health),
            PolicyRecord::new(10004, "Rahul Menon", InsuranceType::Auto),
            PolicyRecord::new(10004, "Rahul Menon", InsuranceType::Home),
        ]
    }

    pub fn store() -> PolicyStore {
        PolicyStore::new(Self::records())
    }

    /// Policy number on file for a type
    pub fn policy_for(insurance_type: InsuranceType) -> &'static str {
        match insurance_type {
            InsuranceType::Auto => Self::AUTO_POLICY,
            InsuranceType::Home => Self::HOME_POLICY,
            InsuranceType::Health => Self::HEALTH_POLICY,
        }
    }

    /// Store with `count` generated holders, numbered from 20000, types cycling
    pub fn generated_store(count: usize) -> PolicyStore {
        (0..count)
            .map(|i| {
                let holder: String = Name().fake();
                PolicyRecord::new(
                    20000 + i as i64,
                    holder,
                    InsuranceType::ALL[i % InsuranceType::ALL.len()],
                )
            })
            .collect()
    }
}

/// Fixture for claim descriptions, one per validation outcome
pub struct DescriptionFixtures;

impl DescriptionFixtures {
    /// Valid event plus severity indicator
    pub fn approved(insurance_type: InsuranceType) -> &'static str {
        match insurance_type {
            InsuranceType::Auto => "Major collision on the highway, front of the car destroyed",
            InsuranceType::Home => "Severe storm tore through the roof last night",
            InsuranceType::Health => "Emergency surgery after a serious fall",
        }
    }

    /// Valid event without any severity indicator
    pub fn pending(insurance_type: InsuranceType) -> &'static str {
        match insurance_type {
            InsuranceType::Auto => "Rear-ended at a traffic light",
            InsuranceType::Home => "Burglary while we were away",
            InsuranceType::Health => "Hospitalization for three days",
        }
    }

    /// No qualifying event at all
    pub fn no_event() -> &'static str {
        "Something happened yesterday"
    }

    /// Valid event with a fraud phrase
    pub fn fraud(insurance_type: InsuranceType) -> &'static str {
        match insurance_type {
            InsuranceType::Auto => "Accident with fake damage photos",
            InsuranceType::Home => "Fire in the garage, duplicate of last month",
            InsuranceType::Health => "Emergency visit, details are made up",
        }
    }
}

/// Fixture for timestamps
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard submission time (Mar 15, 2024 10:30 UTC)
    pub fn submitted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()
    }

    /// Submission time `minutes` after the standard one
    pub fn minutes_later(minutes: i64) -> DateTime<Utc> {
        Self::submitted_at() + Duration::minutes(minutes)
    }
}
