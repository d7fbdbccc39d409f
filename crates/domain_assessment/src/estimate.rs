//! Synthesized damage estimates
//!
//! The estimate is cosmetic: apart from the matched label it does not look
//! at the image at all. Random draws happen in a fixed order so a seeded
//! generator always yields the same estimate.

use rand::Rng;
use serde::Serialize;

use core_kernel::{InsuranceType, Money};

use crate::profile::{self, PriceBand};

/// What the estimate is about, per insurance type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimateDetail {
    Vehicle {
        part: &'static str,
        damage_type: &'static str,
    },
    Property {
        severity: &'static str,
        damage_type: &'static str,
    },
    Medical {
        document_type: &'static str,
        treatment: &'static str,
    },
}

/// Estimated cost and approved claim amount for a relevant image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DamageEstimate {
    pub insurance_type: InsuranceType,
    /// Classifier label that passed the relevance gate
    pub matched_label: String,
    pub confidence: f32,
    pub detail: EstimateDetail,
    pub estimated_cost: Money,
    pub approved_claim: Money,
}

impl DamageEstimate {
    /// Draws an estimate for a relevant image
    pub fn synthesize<R: Rng + ?Sized>(
        insurance_type: InsuranceType,
        matched_label: &str,
        confidence: f32,
        rng: &mut R,
    ) -> Self {
        let (detail, band) = match insurance_type {
            InsuranceType::Auto => {
                let part = pick(rng, profile::VEHICLE_PARTS);
                let damage_type = *pick(rng, profile::VEHICLE_DAMAGE_TYPES);
                (
                    EstimateDetail::Vehicle {
                        part: part.name,
                        damage_type,
                    },
                    part,
                )
            }
            InsuranceType::Home => {
                let level = pick(rng, profile::PROPERTY_SEVERITY_LEVELS);
                let damage_type = *pick(rng, profile::PROPERTY_DAMAGE_TYPES);
                (
                    EstimateDetail::Property {
                        severity: level.name,
                        damage_type,
                    },
                    level,
                )
            }
            InsuranceType::Health => {
                let document_type = match profile::infer_document_type(matched_label) {
                    Some(kind) => kind,
                    None => *pick(rng, profile::MEDICAL_DOCUMENT_TYPES),
                };
                let treatment = pick(rng, profile::MEDICAL_TREATMENTS);
                (
                    EstimateDetail::Medical {
                        document_type,
                        treatment: treatment.name,
                    },
                    treatment,
                )
            }
        };

        let estimated_cost = draw_cost(rng, band);
        let approved_claim = profile::claim_rate(insurance_type).apply_truncated(&estimated_cost);

        Self {
            insurance_type,
            matched_label: matched_label.to_string(),
            confidence,
            detail,
            estimated_cost,
            approved_claim,
        }
    }

    /// Multi-line result shown to the claimant
    pub fn message(&self) -> String {
        let confidence = f64::from(self.confidence) * 100.0;
        let cost = self.estimated_cost.grouped();
        let claim = self.approved_claim.grouped();

        match &self.detail {
            EstimateDetail::Vehicle { part, damage_type } => format!(
                "✅ Vehicle damage detected (confidence: {confidence:.1}%)\n\
                 Damage Type: {} on {part}\n\
                 Estimated Repair Cost: {cost}\n\
                 Approved Claim: {claim}",
                capitalize(damage_type)
            ),
            EstimateDetail::Property {
                severity,
                damage_type,
            } => format!(
                "✅ Property damage detected (confidence: {confidence:.1}%)\n\
                 Damage Type: {} ({severity})\n\
                 Estimated Repair Cost: {cost}\n\
                 Approved Claim: {claim}",
                capitalize(damage_type)
            ),
            EstimateDetail::Medical {
                document_type,
                treatment,
            } => format!(
                "✅ Medical document verified (confidence: {confidence:.8}%)\n \
                 Document Type: {}\n \
                 Treatment: {treatment}\n \
                 Estimated Cost: {cost}\n \
                 Approved Claim: {claim}",
                capitalize(document_type)
            ),
        }
    }
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn draw_cost<R: Rng + ?Sized>(rng: &mut R, band: &PriceBand) -> Money {
    Money::from_units(rng.gen_range(band.min..band.max))
}

/// First letter upper case, the rest lower case
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
