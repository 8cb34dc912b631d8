//! Enrichment facade: joins loosely-typed extracted cheque fields with the
//! institution directory, validator, and risk scorer.
//!
//! The upstream extraction service may omit expected fields or attach
//! arbitrary extra ones, so the input is a duck-typed bag and every lookup
//! is defensive. This function never fails; absence is always a null field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::institution::directory::InstitutionRecord;
use crate::institution::risk::{assess_institution_risk, InstitutionRiskAssessment};
use crate::institution::validator::{validate_institution, InstitutionValidationResult};
use crate::types::{InstitutionType, RiskLevel};

/// Sentinel code handed to the validator when none could be derived, so the
/// caller still receives a structured not-found result.
const INVALID_CODE: &str = "INVALID";

/// Cheque fields as delivered by the external extraction service.
///
/// Only the three fields below are consumed here; everything else rides
/// along in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChequeFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_extracted_micr: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The original fields plus everything the banking reference adds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedChequeData {
    #[serde(flatten)]
    pub fields: ChequeFields,
    pub institution: Option<InstitutionRecord>,
    pub risk_assessment: Option<InstitutionRiskAssessment>,
    pub compliance_notes: Vec<String>,
    pub banking_guidance: Vec<String>,
    pub is_institution_valid_for_processing: bool,
}

/// Compact projection for quick consumption by dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankingContext {
    pub bank_name: String,
    pub common_name: String,
    pub institution_type: InstitutionType,
    pub customer_service: String,
    pub verification_line: String,
    pub fraud_line: String,
    pub deposit_insurance: String,
    pub risk_profile: RiskLevel,
    pub special_notes: String,
}

/// Full enrichment output. A pure function of the input and the static
/// directory; safe for JSON transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedMicrContext {
    pub original: ChequeFields,
    pub validation: InstitutionValidationResult,
    pub enhanced: EnhancedChequeData,
    pub banking_context: Option<BankingContext>,
}

/// Derive the institution code, validate it, score the matched record, and
/// assemble the enriched context.
pub fn enhance_micr_with_banking_data(fields: &ChequeFields) -> EnhancedMicrContext {
    let code = derive_institution_code(fields);
    let validation = validate_institution(code.as_deref().unwrap_or(INVALID_CODE));

    let risk_assessment = validation.institution.as_ref().map(assess_institution_risk);
    let banking_context = validation.institution.as_ref().map(banking_context_for);

    let enhanced = EnhancedChequeData {
        fields: fields.clone(),
        institution: validation.institution.clone(),
        risk_assessment,
        compliance_notes: validation.compliance_notes.clone(),
        banking_guidance: validation.banking_guidance.clone(),
        is_institution_valid_for_processing: validation.is_valid,
    };

    EnhancedMicrContext {
        original: fields.clone(),
        enhanced,
        banking_context,
        validation,
    }
}

/// Prefer an explicit institution number; otherwise cut characters 5-7 out
/// of a transit number of at least 8 characters.
fn derive_institution_code(fields: &ChequeFields) -> Option<String> {
    if let Some(code) = &fields.institution_number {
        return Some(code.clone());
    }
    let transit = fields.transit_number.as_deref()?;
    if transit.chars().count() >= 8 {
        Some(transit.chars().skip(5).take(3).collect())
    } else {
        None
    }
}

fn banking_context_for(record: &InstitutionRecord) -> BankingContext {
    BankingContext {
        bank_name: record.legal_name.clone(),
        common_name: record.common_name.clone(),
        institution_type: record.institution_type,
        customer_service: record.customer_service.clone(),
        verification_line: record.verification_line.clone(),
        fraud_line: record.fraud_line.clone(),
        deposit_insurance: record.deposit_insurance_details.clone(),
        risk_profile: record.risk_profile,
        special_notes: record.special_notes.clone(),
    }
}
