//! Canned claim guidance
//!
//! Static next steps, required documents and tips per insurance type, a
//! short narrative keyed on the claim description, and the covered /
//! not-covered summary shown before a claim is described.

use serde::Serialize;
use std::fmt::Write;

use core_kernel::InsuranceType;

/// Structured guidance for one insurance type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub next_steps: &'static [&'static str],
    pub documents_needed: &'static [&'static str],
    pub tips: &'static [&'static str],
}

/// What an insurance type does and does not cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageSummary {
    pub valid_claims: &'static [&'static str],
    pub not_covered: &'static [&'static str],
}

const AUTO_GUIDANCE: Guidance = Guidance {
    next_steps: &[
        "📋 Contact your insurance agent within 24 hours",
        "🚔 File a police report if it's a collision",
        "📸 Take photos of all damage from multiple angles",
        "🔧 Get 2-3 repair estimates from authorized garages",
        "📞 Keep all receipts and documentation",
        "🚗 Don't drive the damaged vehicle if unsafe",
    ],
    documents_needed: &[
        "Driver's license and registration",
        "Police report (if applicable)",
        "Repair estimates",
        "Photos of damage",
        "Witness statements (if any)",
    ],
    tips: &[
        "Don't admit fault at the scene",
        "Exchange information with other parties",
        "Note weather and road conditions",
        "Get medical attention if injured",
    ],
};

const HOME_GUIDANCE: Guidance = Guidance {
    next_steps: &[
        "📞 Contact emergency services if needed",
        "📸 Document all damage with photos/videos",
        "🔒 Secure the property to prevent further damage",
        "📋 Contact your insurance agent immediately",
        "🏠 Don't make permanent repairs until inspected",
        "💰 Keep all receipts for temporary repairs",
    ],
    documents_needed: &[
        "Property ownership documents",
        "Photos/videos of damage",
        "Police report (for theft/vandalism)",
        "Repair estimates",
        "Inventory of damaged items",
    ],
    tips: &[
        "Don't throw away damaged items",
        "Take photos before cleanup",
        "Keep detailed records of all expenses",
        "Consider temporary accommodation if needed",
    ],
};

const HEALTH_GUIDANCE: Guidance = Guidance {
    next_steps: &[
        "🏥 Seek immediate medical attention if emergency",
        "📞 Contact your insurance provider",
        "📋 Get pre-authorization for procedures",
        "📄 Keep all medical bills and receipts",
        "💊 Save prescription receipts",
        "📊 Request detailed medical reports",
    ],
    documents_needed: &[
        "Medical bills and receipts",
        "Doctor's prescriptions",
        "Hospital discharge summary",
        "Diagnostic test reports",
        "Insurance card and ID",
    ],
    tips: &[
        "Always get pre-authorization",
        "Keep copies of all documents",
        "Track all medical expenses",
        "Follow up on claim status regularly",
    ],
};

const AUTO_COVERAGE: CoverageSummary = CoverageSummary {
    valid_claims: &[
        "Vehicle collision/accident with significant damage",
        "Total loss due to accident or natural disaster",
        "Theft of vehicle",
        "Severe damage from fire, flood, or storm",
        "Hit and run incidents with substantial damage",
    ],
    not_covered: &[
        "Minor scratches or dents",
        "Regular maintenance and wear",
        "Cosmetic damage only",
        "Small paint chips",
        "Routine service issues",
    ],
};

const HOME_COVERAGE: CoverageSummary = CoverageSummary {
    valid_claims: &[
        "Fire damage to property",
        "Flood or water damage",
        "Theft or burglary",
        "Storm or natural disaster damage",
        "Structural damage",
        "Vandalism with significant damage",
    ],
    not_covered: &[
        "Minor wear and tear",
        "Regular maintenance",
        "Cosmetic damage",
        "Small leaks or stains",
        "Normal aging of property",
    ],
};

const HEALTH_COVERAGE: CoverageSummary = CoverageSummary {
    valid_claims: &[
        "Medical emergencies requiring hospitalization",
        "Surgery or major procedures",
        "Critical illness treatment",
        "Serious injuries from accidents",
        "Life-threatening conditions",
    ],
    not_covered: &[
        "Regular checkups",
        "Minor illnesses",
        "Preventive care",
        "Cosmetic procedures",
        "Minor injuries",
    ],
};

/// Number of next steps appended to a narrative
const NARRATIVE_STEPS: usize = 3;

pub fn guidance(insurance_type: InsuranceType) -> &'static Guidance {
    match insurance_type {
        InsuranceType::Auto => &AUTO_GUIDANCE,
        InsuranceType::Home => &HOME_GUIDANCE,
        InsuranceType::Health => &HEALTH_GUIDANCE,
    }
}

pub fn coverage(insurance_type: InsuranceType) -> &'static CoverageSummary {
    match insurance_type {
        InsuranceType::Auto => &AUTO_COVERAGE,
        InsuranceType::Home => &HOME_COVERAGE,
        InsuranceType::Health => &HEALTH_COVERAGE,
    }
}

/// Heading used when presenting guidance for a type
pub fn context_label(insurance_type: InsuranceType) -> String {
    format!("{insurance_type} Insurance Claim Guidance")
}

/// Picks the canned response sentence for a description
fn response_for(insurance_type: InsuranceType, description: &str) -> &'static str {
    let desc = description.to_lowercase();
    match insurance_type {
        InsuranceType::Auto if desc.contains("collision") => {
            "🚗 Collision detected. Priority: Ensure safety, document damage, and contact authorities."
        }
        InsuranceType::Auto if desc.contains("theft") => {
            "🔒 Vehicle theft reported. Priority: File police report and provide vehicle details."
        }
        InsuranceType::Auto => "🚙 Auto claim submitted. Follow the next steps for smooth processing.",
        InsuranceType::Home if desc.contains("fire") => {
            "🔥 Fire damage detected. Priority: Ensure safety, contact fire department, and document damage."
        }
        InsuranceType::Home if desc.contains("flood") => {
            "💧 Flood damage reported. Priority: Stop water source and prevent further damage."
        }
        InsuranceType::Home => "🏠 Home claim submitted. Follow the next steps for proper assessment.",
        InsuranceType::Health if desc.contains("emergency") => {
            "🚨 Emergency medical situation. Priority: Seek immediate care and contact insurance provider."
        }
        InsuranceType::Health if desc.contains("surgery") => {
            "⚕️ Surgical procedure needed. Priority: Get pre-authorization and detailed cost estimates."
        }
        InsuranceType::Health => {
            "🏥 Health claim submitted. Follow the next steps for coverage verification."
        }
    }
}

/// Short guidance text stored with every submitted claim
pub fn narrative(insurance_type: InsuranceType, description: &str) -> String {
    let steps = guidance(insurance_type)
        .next_steps
        .iter()
        .take(NARRATIVE_STEPS)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n**Next Steps:**\n{}",
        response_for(insurance_type, description),
        steps
    )
}

/// Full guide for a type rendered as Markdown
pub fn render_markdown(insurance_type: InsuranceType) -> String {
    let g = guidance(insurance_type);
    let mut out = format!("## 📋 {insurance_type} Insurance Claim Guide\n\n");

    let sections = [
        ("### 🎯 Immediate Next Steps:", g.next_steps),
        ("### 📄 Required Documents:", g.documents_needed),
        ("### 💡 Important Tips:", g.tips),
    ];
    for (i, (heading, items)) in sections.iter().enumerate() {
        out.push_str(heading);
        out.push('\n');
        for item in items.iter() {
            let _ = writeln!(out, "- {item}");
        }
        if i + 1 < sections.len() {
            out.push('\n');
        }
    }
    out
}
