use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// MICR line and transit number
// ---------------------------------------------------------------------------

#[napi]
pub fn parse_micr_line(raw_line: String) -> NapiResult<String> {
    let parsed = micr_core::micr::tokenizer::parse_micr_line(&raw_line);
    serde_json::to_string(&parsed).map_err(to_napi_error)
}

#[napi]
pub fn validate_transit_number(transit_number: String) -> NapiResult<String> {
    let detail = micr_core::micr::checksum::validate_transit_number(&transit_number);
    serde_json::to_string(&detail).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Institution directory
// ---------------------------------------------------------------------------

#[napi]
pub fn validate_institution(code: String) -> NapiResult<String> {
    let result = micr_core::institution::validator::validate_institution(&code);
    serde_json::to_string(&result).map_err(to_napi_error)
}

#[napi]
pub fn assess_institution_risk(code: String) -> NapiResult<String> {
    let record = micr_core::institution::directory::lookup_institution(&code)
        .ok_or_else(|| to_napi_error(format!("unknown institution code: {}", code)))?;
    let assessment = micr_core::institution::risk::assess_institution_risk(record);
    serde_json::to_string(&assessment).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Enrichment
// ---------------------------------------------------------------------------

#[napi]
pub fn enhance_micr(fields_json: String) -> NapiResult<String> {
    let fields: micr_core::enrichment::facade::ChequeFields =
        serde_json::from_str(&fields_json).map_err(to_napi_error)?;
    let context = micr_core::enrichment::facade::enhance_micr_with_banking_data(&fields);
    serde_json::to_string(&context).map_err(to_napi_error)
}
