//! Money types with precise decimal arithmetic
//!
//! Estimates and approved claim amounts are whole rupees. Ratios are applied
//! with `rust_decimal` so that "80% of the cost, truncated" is exact and
//! never suffers from binary floating-point drift.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol printed in front of every amount
pub const RUPEE_SYMBOL: &str = "₹";

/// An amount in Indian rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Creates Money from a whole number of rupees
    pub fn from_units(units: i64) -> Self {
        Self::new(Decimal::from(units))
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the whole-unit part of the amount
    pub fn whole_units(&self) -> i64 {
        self.amount.trunc().to_i64().unwrap_or(0)
    }

    /// Drops any fractional part (truncates toward zero)
    pub fn truncate(&self) -> Self {
        Self::new(self.amount.trunc())
    }

    /// Multiplies by a scalar
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor)
    }

    /// Formats the amount with comma thousands grouping, e.g. `₹123,456`
    pub fn grouped(&self) -> String {
        let negative = self.amount.is_sign_negative() && !self.amount.is_zero();
        let units = self.amount.abs().trunc().to_string();
        let fraction = self.amount.abs().fract();

        let mut out = String::with_capacity(units.len() + units.len() / 3 + 4);
        for (i, ch) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        if !fraction.is_zero() {
            let fraction = fraction.round_dp(2).to_string();
            out.push_str(fraction.trim_start_matches('0'));
        }

        format!(
            "{}{}{}",
            if negative { "-" } else { "" },
            RUPEE_SYMBOL,
            out
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grouped())
    }
}

/// A ratio applied to an amount, e.g. the share of an estimated cost that is approved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.80 for 80%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.80 for 80%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.value)
    }

    /// Applies this rate and truncates the result to whole units
    pub fn apply_truncated(&self, money: &Money) -> Money {
        self.apply(money).truncate()
    }
}
