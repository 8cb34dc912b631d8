use serde::{Deserialize, Serialize};

/// Coarse risk level attached to validation and scoring outputs.
///
/// Variant order matters: `Low < Medium < High`, so escalation floors can be
/// expressed as `max()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// One-notch escalation: Low becomes Medium; Medium and High are unchanged.
    pub fn escalated(self) -> Self {
        match self {
            RiskLevel::Low => RiskLevel::Medium,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstitutionType {
    Bank,
    CreditUnion,
    TrustCompany,
    CaissePopulaire,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatingStatus {
    Active,
    Merged,
    Closed,
    Acquired,
}

/// Prudential regulator of record. Federally chartered institutions answer to
/// OSFI; credit unions and caisses populaires answer to their province.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegulatoryBody {
    Osfi,
    Provincial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceTier {
    Standard,
    Enhanced,
    Special,
}
