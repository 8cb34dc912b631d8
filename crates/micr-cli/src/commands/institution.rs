use clap::Args;
use serde_json::Value;

use micr_core::institution::directory::lookup_institution;
use micr_core::institution::risk::assess_institution_risk;
use micr_core::institution::validator::validate_institution;

/// Arguments for institution validation
#[derive(Args)]
pub struct InstitutionArgs {
    /// 3-digit institution code
    pub code: String,
}

/// Arguments for institution risk scoring
#[derive(Args)]
pub struct RiskArgs {
    /// 3-digit institution code (must be in the directory)
    pub code: String,
}

pub fn run_institution(args: InstitutionArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result = validate_institution(&args.code);
    Ok(serde_json::to_value(result)?)
}

pub fn run_risk(args: RiskArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let record = lookup_institution(&args.code).ok_or_else(|| {
        format!(
            "institution code '{}' is not in the reference directory",
            args.code
        )
    })?;
    let assessment = assess_institution_risk(record);
    Ok(serde_json::to_value(assessment)?)
}
