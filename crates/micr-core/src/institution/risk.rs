//! Additive risk scoring for institution records.
//!
//! Point values are summed and clamped to [0, 100]. A Closed institution
//! short-circuits to 100 before any other rule runs. Compliance requirements
//! are copied from the validator's notes for the same code so the two
//! components never disagree about why an institution needs extra handling.

use serde::{Deserialize, Serialize};

use crate::institution::directory::InstitutionRecord;
use crate::institution::validator::validate_institution;
use crate::types::{ComplianceTier, OperatingStatus, RegulatoryBody, RiskLevel};

const CLOSED_SCORE: u32 = 100;
const HIGH_PROFILE_POINTS: u32 = 40;
const MEDIUM_PROFILE_POINTS: u32 = 20;
const LOW_PROFILE_FLOOR: u32 = 5;
const NOT_CDIC_POINTS: u32 = 15;
const PROVINCIAL_POINTS: u32 = 5;
const TRANSITION_POINTS: u32 = 15;
const DIGITAL_ONLY_POINTS: u32 = 10;
const SMALL_NETWORK_POINTS: u32 = 5;
const ENHANCED_TIER_POINTS: u32 = 10;
const SPECIAL_TIER_POINTS: u32 = 20;

/// Itemized 0-100 risk score for one institution. Computed fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionRiskAssessment {
    pub risk_score: u32,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    /// Seeded from the validator's compliance notes for the same code.
    pub compliance_requirements: Vec<String>,
}

/// Score an institution record with the additive point model.
pub fn assess_institution_risk(record: &InstitutionRecord) -> InstitutionRiskAssessment {
    let compliance_requirements = validate_institution(&record.institution_code).compliance_notes;

    if record.status == OperatingStatus::Closed {
        return InstitutionRiskAssessment {
            risk_score: CLOSED_SCORE,
            risk_factors: vec![format!(
                "{} is permanently closed and cannot clear items.",
                record.common_name
            )],
            recommendations: vec!["Reject all items drawn on this institution.".to_string()],
            compliance_requirements,
        };
    }

    let mut score: u32 = 0;
    let mut risk_factors = Vec::new();
    let mut recommendations = Vec::new();

    match record.risk_profile {
        RiskLevel::High => {
            score += HIGH_PROFILE_POINTS;
            risk_factors.push("High inherent risk profile.".to_string());
            recommendations
                .push("Route items to a senior reviewer before settlement.".to_string());
        }
        RiskLevel::Medium => {
            score += MEDIUM_PROFILE_POINTS;
            risk_factors.push("Medium inherent risk profile.".to_string());
        }
        RiskLevel::Low => {
            // Floor, not zero: no institution is risk-free.
            score += LOW_PROFILE_FLOOR;
        }
    }

    if !record.cdic_insured {
        score += NOT_CDIC_POINTS;
        risk_factors.push("Deposits are not CDIC insured.".to_string());
        recommendations.push(format!(
            "Verify the deposit coverage in effect: {}.",
            record.deposit_insurance_details
        ));
    }

    if record.regulatory_body == RegulatoryBody::Provincial {
        score += PROVINCIAL_POINTS;
        risk_factors.push("Provincially regulated institution.".to_string());
    }

    let transition_label = match record.status {
        OperatingStatus::Acquired => Some("acquired"),
        OperatingStatus::Merged => Some("merged"),
        _ => None,
    };
    if let Some(label) = transition_label {
        score += TRANSITION_POINTS;
        risk_factors.push(format!("Institution has been {}.", label));
        recommendations
            .push("Confirm successor routing before releasing funds.".to_string());
    }

    if record.branch_count == 0 {
        score += DIGITAL_ONLY_POINTS;
        risk_factors.push("Digital-only institution with no physical branches.".to_string());
        recommendations
            .push("Use the institution's digital channels for item verification.".to_string());
    } else if record.branch_count < 20 {
        score += SMALL_NETWORK_POINTS;
        risk_factors.push(format!(
            "Small branch network ({} branches).",
            record.branch_count
        ));
    }

    match record.compliance_tier {
        ComplianceTier::Standard => {}
        ComplianceTier::Enhanced => {
            score += ENHANCED_TIER_POINTS;
            risk_factors.push("Enhanced compliance tier.".to_string());
            recommendations.push("Apply enhanced due diligence to this item.".to_string());
        }
        ComplianceTier::Special => {
            score += SPECIAL_TIER_POINTS;
            risk_factors.push("Special compliance tier.".to_string());
            recommendations
                .push("Consult the risk team before processing this item.".to_string());
        }
    }

    if risk_factors.is_empty() {
        risk_factors
            .push("Standard low-risk institution; no elevated risk factors identified.".to_string());
    }

    InstitutionRiskAssessment {
        risk_score: score.min(100),
        risk_factors,
        recommendations,
        compliance_requirements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::institution::directory::lookup_institution;
    use crate::types::InstitutionType;
    use pretty_assertions::assert_eq;

    fn synthetic_record() -> InstitutionRecord {
        InstitutionRecord {
            institution_code: "998".to_string(),
            legal_name: "Test Bank of Canada".to_string(),
            common_name: "Test Bank".to_string(),
            short_name: "TBC".to_string(),
            institution_type: InstitutionType::Bank,
            regulatory_body: RegulatoryBody::Osfi,
            status: OperatingStatus::Active,
            cdic_insured: true,
            deposit_insurance_details: "CDIC insured up to $100,000 per insured category"
                .to_string(),
            headquarters: "Toronto, ON".to_string(),
            customer_service: "1-800-555-0100".to_string(),
            verification_line: "1-800-555-0100".to_string(),
            fraud_line: "1-800-555-0100".to_string(),
            primary_provinces: vec!["ON".to_string()],
            branch_count: 500,
            founded: 1950,
            risk_profile: RiskLevel::Low,
            compliance_tier: ComplianceTier::Standard,
            special_notes: String::new(),
        }
    }

    #[test]
    fn test_low_risk_baseline() {
        let assessment = assess_institution_risk(&synthetic_record());
        assert_eq!(assessment.risk_score, 5);
        assert_eq!(assessment.risk_factors.len(), 1);
        assert!(assessment.risk_factors[0].contains("Standard low-risk"));
        assert!(assessment.recommendations.is_empty());
    }

    #[test]
    fn test_medium_uninsured_digital_scores_45() {
        let mut record = synthetic_record();
        record.risk_profile = RiskLevel::Medium;
        record.cdic_insured = false;
        record.branch_count = 0;
        let assessment = assess_institution_risk(&record);
        assert_eq!(assessment.risk_score, 45);
        assert_eq!(assessment.risk_factors.len(), 3);
    }

    #[test]
    fn test_closed_forces_100() {
        let mut record = synthetic_record();
        record.status = OperatingStatus::Closed;
        // Fields that would otherwise add points must not matter.
        record.risk_profile = RiskLevel::Low;
        record.compliance_tier = ComplianceTier::Special;
        let assessment = assess_institution_risk(&record);
        assert_eq!(assessment.risk_score, 100);
        assert!(assessment.risk_factors[0].contains("permanently closed"));
    }

    #[test]
    fn test_acquired_adds_transition_points() {
        let mut record = synthetic_record();
        record.status = OperatingStatus::Acquired;
        let assessment = assess_institution_risk(&record);
        assert_eq!(assessment.risk_score, 5 + 15);
        assert!(assessment
            .risk_factors
            .iter()
            .any(|f| f.contains("acquired")));
    }

    #[test]
    fn test_small_network_points() {
        let mut record = synthetic_record();
        record.branch_count = 7;
        let assessment = assess_institution_risk(&record);
        assert_eq!(assessment.risk_score, 5 + 5);
    }

    #[test]
    fn test_tier_points() {
        let mut record = synthetic_record();
        record.compliance_tier = ComplianceTier::Enhanced;
        assert_eq!(assess_institution_risk(&record).risk_score, 5 + 10);
        record.compliance_tier = ComplianceTier::Special;
        assert_eq!(assess_institution_risk(&record).risk_score, 5 + 20);
    }

    #[test]
    fn test_requirements_mirror_validator_notes() {
        let record = lookup_institution("219").unwrap();
        let assessment = assess_institution_risk(record);
        let validation = validate_institution("219");
        assert_eq!(assessment.compliance_requirements, validation.compliance_notes);
    }

    #[test]
    fn test_score_clamped_to_100() {
        let mut record = synthetic_record();
        record.risk_profile = RiskLevel::High;
        record.cdic_insured = false;
        record.regulatory_body = RegulatoryBody::Provincial;
        record.status = OperatingStatus::Merged;
        record.branch_count = 0;
        record.compliance_tier = ComplianceTier::Special;
        let assessment = assess_institution_risk(&record);
        // 40 + 15 + 5 + 15 + 10 + 20 = 105, clamped
        assert_eq!(assessment.risk_score, 100);
    }
}
