//! Static reference data for Canadian financial institutions.
//!
//! The directory is a deliberately partial subset of the Payments Canada
//! registry covering the institutions most commonly seen on deposited
//! cheques. It is seeded at first use and never mutated; extending coverage
//! means redeploying, not a runtime API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::{ComplianceTier, InstitutionType, OperatingStatus, RegulatoryBody, RiskLevel};

/// Reference entry for one institution, keyed by its 3-digit code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionRecord {
    pub institution_code: String,
    pub legal_name: String,
    pub common_name: String,
    pub short_name: String,
    pub institution_type: InstitutionType,
    pub regulatory_body: RegulatoryBody,
    pub status: OperatingStatus,
    pub cdic_insured: bool,
    pub deposit_insurance_details: String,
    pub headquarters: String,
    pub customer_service: String,
    pub verification_line: String,
    pub fraud_line: String,
    pub primary_provinces: Vec<String>,
    pub branch_count: u32,
    pub founded: u16,
    /// Inherent risk profile before any status/insurance escalation.
    pub risk_profile: RiskLevel,
    pub compliance_tier: ComplianceTier,
    /// Free text surfaced verbatim as a compliance note when non-empty.
    pub special_notes: String,
}

/// Approximate region served, by leading digit of the 5-digit branch code.
/// Informational only; never used for validation decisions.
const BRANCH_REGIONS: &[(char, &str)] = &[
    ('0', "Atlantic Canada (NL, NS, NB, PE)"),
    ('1', "Quebec"),
    ('2', "Ontario"),
    ('3', "Greater Toronto Area"),
    ('4', "Manitoba and Saskatchewan"),
    ('5', "Alberta"),
    ('6', "British Columbia"),
    ('7', "Prairie and Northern Canada"),
    ('8', "Quebec (caisses populaires)"),
    ('9', "British Columbia and Territories"),
];

fn cdic_details() -> String {
    "CDIC insured up to $100,000 per insured category".to_string()
}

fn provinces(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|p| (*p).to_string()).collect()
}

fn seed_institutions() -> Vec<InstitutionRecord> {
    vec![
        InstitutionRecord {
            institution_code: "001".to_string(),
            legal_name: "Bank of Montreal".to_string(),
            common_name: "BMO".to_string(),
            short_name: "BMO".to_string(),
            institution_type: InstitutionType::Bank,
            regulatory_body: RegulatoryBody::Osfi,
            status: OperatingStatus::Active,
            cdic_insured: true,
            deposit_insurance_details: cdic_details(),
            headquarters: "Montreal, QC".to_string(),
            customer_service: "1-877-225-5266".to_string(),
            verification_line: "1-844-837-9228".to_string(),
            fraud_line: "1-877-225-5266".to_string(),
            primary_provinces: provinces(&["ON", "QC", "AB", "BC", "MB"]),
            branch_count: 890,
            founded: 1817,
            risk_profile: RiskLevel::Low,
            compliance_tier: ComplianceTier::Standard,
            special_notes: String::new(),
        },
        InstitutionRecord {
            institution_code: "002".to_string(),
            legal_name: "The Bank of Nova Scotia".to_string(),
            common_name: "Scotiabank".to_string(),
            short_name: "Scotia".to_string(),
            institution_type: InstitutionType::Bank,
            regulatory_body: RegulatoryBody::Osfi,
            status: OperatingStatus::Active,
            cdic_insured: true,
            deposit_insurance_details: cdic_details(),
            headquarters: "Toronto, ON".to_string(),
            customer_service: "1-800-472-6842".to_string(),
            verification_line: "1-800-575-2424".to_string(),
            fraud_line: "1-866-625-0561".to_string(),
            primary_provinces: provinces(&["ON", "BC", "AB", "NS", "QC"]),
            branch_count: 900,
            founded: 1832,
            risk_profile: RiskLevel::Low,
            compliance_tier: ComplianceTier::Standard,
            special_notes: String::new(),
        },
        InstitutionRecord {
            institution_code: "003".to_string(),
            legal_name: "Royal Bank of Canada".to_string(),
            common_name: "RBC Royal Bank".to_string(),
            short_name: "RBC".to_string(),
            institution_type: InstitutionType::Bank,
            regulatory_body: RegulatoryBody::Osfi,
            status: OperatingStatus::Active,
            cdic_insured: true,
            deposit_insurance_details: cdic_details(),
            headquarters: "Toronto, ON".to_string(),
            customer_service: "1-800-769-2511".to_string(),
            verification_line: "1-800-769-2555".to_string(),
            fraud_line: "1-800-769-2511".to_string(),
            primary_provinces: provinces(&["ON", "QC", "BC", "AB", "NS"]),
            branch_count: 1200,
            founded: 1864,
            risk_profile: RiskLevel::Low,
            compliance_tier: ComplianceTier::Standard,
            special_notes: String::new(),
        },
        InstitutionRecord {
            institution_code: "004".to_string(),
            legal_name: "The Toronto-Dominion Bank".to_string(),
            common_name: "TD Canada Trust".to_string(),
            short_name: "TD".to_string(),
            institution_type: InstitutionType::Bank,
            regulatory_body: RegulatoryBody::Osfi,
            status: OperatingStatus::Active,
            cdic_insured: true,
            deposit_insurance_details: cdic_details(),
            headquarters: "Toronto, ON".to_string(),
            customer_service: "1-866-222-3456".to_string(),
            verification_line: "1-800-983-8472".to_string(),
            fraud_line: "1-866-222-3456".to_string(),
            primary_provinces: provinces(&["ON", "BC", "QC", "AB", "NB"]),
            branch_count: 1060,
            founded: 1855,
            risk_profile: RiskLevel::Low,
            compliance_tier: ComplianceTier::Standard,
            special_notes: String::new(),
        },
        InstitutionRecord {
            institution_code: "006".to_string(),
            legal_name: "National Bank of Canada".to_string(),
            common_name: "National Bank".to_string(),
            short_name: "NBC".to_string(),
            institution_type: InstitutionType::Bank,
            regulatory_body: RegulatoryBody::Osfi,
            status: OperatingStatus::Active,
            cdic_insured: true,
            deposit_insurance_details: cdic_details(),
            headquarters: "Montreal, QC".to_string(),
            customer_service: "1-888-483-5628".to_string(),
            verification_line: "1-844-394-4494".to_string(),
            fraud_line: "1-888-483-5628".to_string(),
            primary_provinces: provinces(&["QC", "ON", "NB", "AB"]),
            branch_count: 370,
            founded: 1859,
            risk_profile: RiskLevel::Low,
            compliance_tier: ComplianceTier::Standard,
            special_notes: String::new(),
        },
        InstitutionRecord {
            institution_code: "010".to_string(),
            legal_name: "Canadian Imperial Bank of Commerce".to_string(),
            common_name: "CIBC".to_string(),
            short_name: "CIBC".to_string(),
            institution_type: InstitutionType::Bank,
            regulatory_body: RegulatoryBody::Osfi,
            status: OperatingStatus::Active,
            cdic_insured: true,
            deposit_insurance_details: cdic_details(),
            headquarters: "Toronto, ON".to_string(),
            customer_service: "1-800-465-2422".to_string(),
            verification_line: "1-888-872-2422".to_string(),
            fraud_line: "1-800-465-2422".to_string(),
            primary_provinces: provinces(&["ON", "BC", "AB", "QC"]),
            branch_count: 1000,
            founded: 1961,
            risk_profile: RiskLevel::Low,
            compliance_tier: ComplianceTier::Standard,
            special_notes: String::new(),
        },
        InstitutionRecord {
            institution_code: "016".to_string(),
            legal_name: "HSBC Bank Canada".to_string(),
            common_name: "HSBC Canada".to_string(),
            short_name: "HSBC".to_string(),
            institution_type: InstitutionType::Bank,
            regulatory_body: RegulatoryBody::Osfi,
            status: OperatingStatus::Acquired,
            cdic_insured: true,
            deposit_insurance_details: cdic_details(),
            headquarters: "Vancouver, BC".to_string(),
            customer_service: "1-888-310-4722".to_string(),
            verification_line: "1-888-310-4722".to_string(),
            fraud_line: "1-888-310-4722".to_string(),
            primary_provinces: provinces(&["BC", "ON", "AB", "QC"]),
            branch_count: 120,
            founded: 1981,
            risk_profile: RiskLevel::Low,
            compliance_tier: ComplianceTier::Enhanced,
            special_notes: "Acquired by Royal Bank of Canada in March 2024; accounts and routing \
                            are migrating to RBC."
                .to_string(),
        },
        InstitutionRecord {
            institution_code: "030".to_string(),
            legal_name: "Canadian Western Bank".to_string(),
            common_name: "CWB".to_string(),
            short_name: "CWB".to_string(),
            institution_type: InstitutionType::Bank,
            regulatory_body: RegulatoryBody::Osfi,
            status: OperatingStatus::Acquired,
            cdic_insured: true,
            deposit_insurance_details: cdic_details(),
            headquarters: "Edmonton, AB".to_string(),
            customer_service: "1-866-441-2921".to_string(),
            verification_line: "1-866-441-2921".to_string(),
            fraud_line: "1-866-441-2921".to_string(),
            primary_provinces: provinces(&["AB", "BC", "SK", "MB"]),
            branch_count: 65,
            founded: 1984,
            risk_profile: RiskLevel::Low,
            compliance_tier: ComplianceTier::Standard,
            special_notes: "Acquired by National Bank of Canada in 2025; integration in progress."
                .to_string(),
        },
        InstitutionRecord {
            institution_code: "039".to_string(),
            legal_name: "Laurentian Bank of Canada".to_string(),
            common_name: "Laurentian Bank".to_string(),
            short_name: "LBC".to_string(),
            institution_type: InstitutionType::Bank,
            regulatory_body: RegulatoryBody::Osfi,
            status: OperatingStatus::Active,
            cdic_insured: true,
            deposit_insurance_details: cdic_details(),
            headquarters: "Montreal, QC".to_string(),
            customer_service: "1-800-252-1846".to_string(),
            verification_line: "1-800-252-1846".to_string(),
            fraud_line: "1-800-252-1846".to_string(),
            primary_provinces: provinces(&["QC", "ON"]),
            branch_count: 57,
            founded: 1846,
            risk_profile: RiskLevel::Medium,
            compliance_tier: ComplianceTier::Standard,
            special_notes: String::new(),
        },
        InstitutionRecord {
            institution_code: "219".to_string(),
            legal_name: "ATB Financial".to_string(),
            common_name: "ATB Financial".to_string(),
            short_name: "ATB".to_string(),
            institution_type: InstitutionType::Bank,
            regulatory_body: RegulatoryBody::Provincial,
            status: OperatingStatus::Active,
            cdic_insured: false,
            deposit_insurance_details: "Deposits guaranteed in full by the Province of Alberta"
                .to_string(),
            headquarters: "Edmonton, AB".to_string(),
            customer_service: "1-800-332-8383".to_string(),
            verification_line: "1-800-332-8383".to_string(),
            fraud_line: "1-800-332-8383".to_string(),
            primary_provinces: provinces(&["AB"]),
            branch_count: 100,
            founded: 1938,
            risk_profile: RiskLevel::Low,
            compliance_tier: ComplianceTier::Standard,
            special_notes: "Provincial Crown corporation; deposits carry an unlimited Alberta \
                            government guarantee rather than CDIC coverage."
                .to_string(),
        },
        InstitutionRecord {
            institution_code: "320".to_string(),
            legal_name: "President's Choice Bank".to_string(),
            common_name: "PC Financial".to_string(),
            short_name: "PCB".to_string(),
            institution_type: InstitutionType::Bank,
            regulatory_body: RegulatoryBody::Osfi,
            status: OperatingStatus::Closed,
            cdic_insured: true,
            deposit_insurance_details: cdic_details(),
            headquarters: "Toronto, ON".to_string(),
            customer_service: "1-866-246-7262".to_string(),
            verification_line: "1-866-246-7262".to_string(),
            fraud_line: "1-866-246-7262".to_string(),
            primary_provinces: provinces(&["ON"]),
            branch_count: 0,
            founded: 1996,
            risk_profile: RiskLevel::High,
            compliance_tier: ComplianceTier::Special,
            special_notes: "Retail deposit business wound down in 2017; accounts were transferred \
                            to Simplii Financial (CIBC)."
                .to_string(),
        },
        InstitutionRecord {
            institution_code: "509".to_string(),
            legal_name: "The Canada Trust Company".to_string(),
            common_name: "Canada Trust".to_string(),
            short_name: "CT".to_string(),
            institution_type: InstitutionType::TrustCompany,
            regulatory_body: RegulatoryBody::Osfi,
            status: OperatingStatus::Merged,
            cdic_insured: true,
            deposit_insurance_details: cdic_details(),
            headquarters: "Toronto, ON".to_string(),
            customer_service: "1-866-222-3456".to_string(),
            verification_line: "1-866-222-3456".to_string(),
            fraud_line: "1-866-222-3456".to_string(),
            primary_provinces: provinces(&["ON", "BC", "AB"]),
            branch_count: 0,
            founded: 1864,
            risk_profile: RiskLevel::Low,
            compliance_tier: ComplianceTier::Standard,
            special_notes: "Merged into The Toronto-Dominion Bank in 2000; items remap to TD \
                            routing."
                .to_string(),
        },
        InstitutionRecord {
            institution_code: "540".to_string(),
            legal_name: "Manulife Bank of Canada".to_string(),
            common_name: "Manulife Bank".to_string(),
            short_name: "MBC".to_string(),
            institution_type: InstitutionType::Bank,
            regulatory_body: RegulatoryBody::Osfi,
            status: OperatingStatus::Active,
            cdic_insured: true,
            deposit_insurance_details: cdic_details(),
            headquarters: "Waterloo, ON".to_string(),
            customer_service: "1-877-765-2265".to_string(),
            verification_line: "1-877-765-2265".to_string(),
            fraud_line: "1-877-765-2265".to_string(),
            primary_provinces: provinces(&["ON", "BC", "AB", "QC"]),
            branch_count: 0,
            founded: 1993,
            risk_profile: RiskLevel::Low,
            compliance_tier: ComplianceTier::Standard,
            special_notes: String::new(),
        },
        InstitutionRecord {
            institution_code: "614".to_string(),
            legal_name: "Tangerine Bank".to_string(),
            common_name: "Tangerine".to_string(),
            short_name: "TNG".to_string(),
            institution_type: InstitutionType::Bank,
            regulatory_body: RegulatoryBody::Osfi,
            status: OperatingStatus::Active,
            cdic_insured: true,
            deposit_insurance_details: cdic_details(),
            headquarters: "Toronto, ON".to_string(),
            customer_service: "1-888-826-4374".to_string(),
            verification_line: "1-888-826-4374".to_string(),
            fraud_line: "1-888-826-4374".to_string(),
            primary_provinces: provinces(&["ON", "BC", "AB", "QC"]),
            branch_count: 0,
            founded: 1997,
            risk_profile: RiskLevel::Low,
            compliance_tier: ComplianceTier::Standard,
            special_notes: "Direct bank subsidiary of Scotiabank; no physical branch network."
                .to_string(),
        },
        InstitutionRecord {
            institution_code: "809".to_string(),
            legal_name: "Central 1 Credit Union".to_string(),
            common_name: "Central 1".to_string(),
            short_name: "C1".to_string(),
            institution_type: InstitutionType::CreditUnion,
            regulatory_body: RegulatoryBody::Provincial,
            status: OperatingStatus::Active,
            cdic_insured: false,
            deposit_insurance_details: "Member deposits insured by provincial credit union \
                                        insurers (CUDIC in British Columbia)"
                .to_string(),
            headquarters: "Vancouver, BC".to_string(),
            customer_service: "1-800-661-6813".to_string(),
            verification_line: "1-800-661-6813".to_string(),
            fraud_line: "1-800-661-6813".to_string(),
            primary_provinces: provinces(&["BC", "ON"]),
            branch_count: 2,
            founded: 2008,
            risk_profile: RiskLevel::Medium,
            compliance_tier: ComplianceTier::Enhanced,
            special_notes: "Clearing central for British Columbia and Ontario credit unions; \
                            items carry the member credit union in the branch code."
                .to_string(),
        },
        InstitutionRecord {
            institution_code: "815".to_string(),
            legal_name: "Federation des caisses Desjardins du Quebec".to_string(),
            common_name: "Desjardins".to_string(),
            short_name: "DSJ".to_string(),
            institution_type: InstitutionType::CaissePopulaire,
            regulatory_body: RegulatoryBody::Provincial,
            status: OperatingStatus::Active,
            cdic_insured: false,
            deposit_insurance_details: "Deposits insured by the Autorite des marches financiers \
                                        (Quebec)"
                .to_string(),
            headquarters: "Levis, QC".to_string(),
            customer_service: "1-800-224-7737".to_string(),
            verification_line: "1-800-224-7737".to_string(),
            fraud_line: "1-800-224-7737".to_string(),
            primary_provinces: provinces(&["QC", "ON"]),
            branch_count: 669,
            founded: 1900,
            risk_profile: RiskLevel::Low,
            compliance_tier: ComplianceTier::Standard,
            special_notes: String::new(),
        },
    ]
}

fn build_directory() -> HashMap<String, InstitutionRecord> {
    seed_institutions()
        .into_iter()
        .map(|record| (record.institution_code.clone(), record))
        .collect()
}

/// The full institution directory, built once on first access.
pub fn directory() -> &'static HashMap<String, InstitutionRecord> {
    static DIRECTORY: OnceLock<HashMap<String, InstitutionRecord>> = OnceLock::new();
    DIRECTORY.get_or_init(build_directory)
}

/// Exact-code lookup.
pub fn lookup_institution(code: &str) -> Option<&'static InstitutionRecord> {
    directory().get(code)
}

/// Approximate region for a 5-digit branch code, for informational display.
///
/// Returns None for malformed input.
pub fn branch_location(branch_code: &str) -> Option<String> {
    if branch_code.chars().count() != 5 || !branch_code.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let first = branch_code.chars().next()?;
    let region = BRANCH_REGIONS
        .iter()
        .find(|(prefix, _)| *prefix == first)
        .map(|(_, region)| (*region).to_string())
        .unwrap_or_else(|| "Region Undetermined".to_string());
    Some(region)
}
