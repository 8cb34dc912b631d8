//! Rule engine that turns a looked-up institution record into a processing
//! verdict.
//!
//! Rules run in a fixed precedence: format guard, directory lookup, then the
//! operating-status branch (Closed is terminal), then orthogonal modifiers
//! for insurance, regulator, branch network, and compliance tier.

use serde::{Deserialize, Serialize};

use crate::institution::directory::{lookup_institution, InstitutionRecord};
use crate::types::{ComplianceTier, OperatingStatus, RegulatoryBody, RiskLevel};

/// Verdict for one institution code. Computed fresh per call; not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionValidationResult {
    /// True for Active, Acquired, and Merged institutions only.
    pub is_valid: bool,
    pub institution: Option<InstitutionRecord>,
    pub message: String,
    pub risk_level: RiskLevel,
    pub compliance_notes: Vec<String>,
    pub banking_guidance: Vec<String>,
}

/// Validate a 3-digit institution code against the directory.
pub fn validate_institution(code: &str) -> InstitutionValidationResult {
    if code.chars().count() != 3 || !code.chars().all(|c| c.is_ascii_digit()) {
        return InstitutionValidationResult {
            is_valid: false,
            institution: None,
            message: format!("'{}' is not a valid 3-digit institution code", code),
            risk_level: RiskLevel::High,
            compliance_notes: Vec::new(),
            banking_guidance: vec![
                "Institution code could not be read; check for scanning or MICR recognition \
                 errors and re-capture the cheque image."
                    .to_string(),
            ],
        };
    }

    let record = match lookup_institution(code) {
        Some(record) => record,
        None => {
            return InstitutionValidationResult {
                is_valid: false,
                institution: None,
                message: format!("Institution code {} is not in the reference directory", code),
                risk_level: RiskLevel::High,
                compliance_notes: vec![
                    "Institution not found in the local reference directory.".to_string()
                ],
                banking_guidance: vec![
                    "Cross-reference the code against the Payments Canada financial \
                     institutions file before processing."
                        .to_string(),
                    "Consider holding high-value items pending manual verification of the \
                     institution."
                        .to_string(),
                ],
            }
        }
    };

    // Closed is terminal: no other rule can soften an outright rejection.
    if record.status == OperatingStatus::Closed {
        let mut compliance_notes = vec![format!(
            "{} has permanently ceased operations and no longer clears items.",
            record.common_name
        )];
        if !record.special_notes.is_empty() {
            compliance_notes.push(record.special_notes.clone());
        }
        return InstitutionValidationResult {
            is_valid: false,
            institution: Some(record.clone()),
            message: format!("{} is permanently closed", record.legal_name),
            risk_level: RiskLevel::High,
            compliance_notes,
            banking_guidance: vec![
                "Reject this item; cheques drawn on a closed institution cannot be processed."
                    .to_string(),
            ],
        };
    }

    let mut compliance_notes = Vec::new();
    let mut banking_guidance = Vec::new();
    let mut risk_level = record.risk_profile;

    let transition_verb = match record.status {
        OperatingStatus::Acquired => Some("acquired"),
        OperatingStatus::Merged => Some("merged"),
        _ => None,
    };
    if let Some(verb) = transition_verb {
        risk_level = risk_level.escalated();
        compliance_notes.push(format!(
            "{} has been {}; account numbers and clearing processes may have changed.",
            record.common_name, verb
        ));
        banking_guidance.push(
            "Confirm current routing with the successor institution before settlement."
                .to_string(),
        );
    }

    if record.cdic_insured {
        compliance_notes.push("CDIC insured institution.".to_string());
    } else {
        compliance_notes.push(format!(
            "Not CDIC insured: {}.",
            record.deposit_insurance_details
        ));
        risk_level = risk_level.max(RiskLevel::Medium);
    }

    match record.regulatory_body {
        RegulatoryBody::Osfi => {
            compliance_notes.push("Regulated by: OSFI.".to_string());
        }
        RegulatoryBody::Provincial => {
            compliance_notes.push("Regulated by: Provincial regulator.".to_string());
            compliance_notes.push(format!(
                "Follow the provincial deposit-institution rules applicable in {}.",
                record.headquarters
            ));
        }
    }

    if record.branch_count == 0 {
        compliance_notes
            .push("Digital-only institution with no physical branch network.".to_string());
        banking_guidance.push(
            "Use the institution's digital verification channels to confirm item authenticity."
                .to_string(),
        );
    } else if record.branch_count < 10 {
        compliance_notes.push(format!(
            "Limited branch network ({} branches).",
            record.branch_count
        ));
        banking_guidance
            .push("Apply additional verification for large or unusual transactions.".to_string());
    }

    match record.compliance_tier {
        ComplianceTier::Standard => {}
        ComplianceTier::Enhanced => {
            risk_level = risk_level.max(RiskLevel::Medium);
            banking_guidance.push(
                "Enhanced due diligence is required for items drawn on this institution."
                    .to_string(),
            );
        }
        ComplianceTier::Special => {
            // Special does not use the Medium floor; it carries its own
            // higher-severity guidance instead.
            banking_guidance.push(
                "Apply the highest level of due diligence and consult the risk team before \
                 processing."
                    .to_string(),
            );
        }
    }

    if !record.special_notes.is_empty() {
        compliance_notes.push(record.special_notes.clone());
    }

    let message = match transition_verb {
        Some(verb) => format!(
            "{} is valid for processing, but items may be affected by its pending {} transition",
            record.legal_name, verb
        ),
        None => format!("{} is active and valid for processing", record.legal_name),
    };

    InstitutionValidationResult {
        is_valid: true,
        institution: Some(record.clone()),
        message,
        risk_level,
        compliance_notes,
        banking_guidance,
    }
}
