use micr_core::enrichment::facade::{enhance_micr_with_banking_data, ChequeFields};
use serde_json::json;

fn fields_from(value: serde_json::Value) -> ChequeFields {
    serde_json::from_value(value).expect("cheque fields should deserialize")
}

#[test]
fn test_enhancement_with_known_bank() {
    let fields = fields_from(json!({
        "transit_number": "000120049",
        "raw_extracted_micr": "⑆000120049⑉5551234",
        "payee": "Acme Supplies Ltd."
    }));
    let context = enhance_micr_with_banking_data(&fields);

    assert!(context.validation.is_valid);
    assert!(context.enhanced.is_institution_valid_for_processing);

    let record = context.enhanced.institution.expect("record should match");
    assert_eq!(record.institution_code, "004");

    let banking = context.banking_context.expect("projection for matched record");
    assert_eq!(banking.bank_name, "The Toronto-Dominion Bank");

    let assessment = context.enhanced.risk_assessment.expect("scored record");
    assert!(assessment.risk_score <= 100);
}

#[test]
fn test_overlong_invalid_transit_scenario() {
    // 10 characters: code derives as "01X", which fails the format guard
    let fields = fields_from(json!({ "transit_number": "00001001XX" }));
    let context = enhance_micr_with_banking_data(&fields);

    assert!(!context.enhanced.is_institution_valid_for_processing);
    assert_eq!(context.validation.institution, None);
    assert_eq!(context.enhanced.risk_assessment, None);
    assert_eq!(context.banking_context, None);
}

#[test]
fn test_empty_bag_gets_structured_not_found() {
    let context = enhance_micr_with_banking_data(&ChequeFields::default());
    assert!(!context.validation.is_valid);
    assert_eq!(context.validation.institution, None);
    assert!(!context.validation.banking_guidance.is_empty());
}

#[test]
fn test_institution_number_wins_over_transit() {
    let fields = fields_from(json!({
        "transit_number": "000120049",
        "institution_number": "001"
    }));
    let context = enhance_micr_with_banking_data(&fields);
    let record = context.enhanced.institution.expect("record should match");
    assert_eq!(record.common_name, "BMO");
}

#[test]
fn test_arbitrary_extras_are_tolerated_and_preserved() {
    let fields = fields_from(json!({
        "transit_number": "000120049",
        "chequeDate": "2026-08-14",
        "securityFeatures": ["microprint", "void pantograph"],
        "aiConfidence": 0.87
    }));
    let context = enhance_micr_with_banking_data(&fields);
    assert_eq!(context.original.extra.len(), 3);

    let round_trip = serde_json::to_value(&context).unwrap();
    assert_eq!(
        round_trip["original"]["securityFeatures"][0],
        json!("microprint")
    );
}

#[test]
fn test_enhancement_is_idempotent() {
    let fields = fields_from(json!({ "transit_number": "000120049" }));
    assert_eq!(
        enhance_micr_with_banking_data(&fields),
        enhance_micr_with_banking_data(&fields)
    );
}

#[test]
fn test_closed_institution_flagged_not_processable() {
    let fields = fields_from(json!({ "institution_number": "320" }));
    let context = enhance_micr_with_banking_data(&fields);
    assert!(!context.enhanced.is_institution_valid_for_processing);
    assert_eq!(
        context.enhanced.risk_assessment.expect("scored").risk_score,
        100
    );
    assert!(context
        .enhanced
        .banking_guidance
        .iter()
        .any(|g| g.contains("Reject")));
}
