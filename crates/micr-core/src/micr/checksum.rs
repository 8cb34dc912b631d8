//! CPA Standard 006 check-digit arithmetic for Canadian transit numbers.
//!
//! A transit number is nine digits: five-digit branch code, three-digit
//! institution code, one check digit. The check digit is chosen so that the
//! weighted digit sum is divisible by 10.

use serde::{Deserialize, Serialize};

/// Positional weights for the nine digits of a transit number.
const TRANSIT_WEIGHTS: [u32; 9] = [1, 7, 3, 1, 7, 3, 1, 7, 3];

/// Weight applied to the check digit itself (position 9).
const CHECK_DIGIT_WEIGHT: u32 = 3;

/// Outcome of running the weighted-sum check over a full transit number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumResult {
    pub is_valid: bool,
    /// Check digit implied by the first eight digits, for cross-reference.
    pub calculated_check_digit: Option<char>,
}

/// Full validation detail for one transit number. Computed fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitValidationDetail {
    pub is_format_valid: bool,
    /// None when the format is invalid and no checksum could be attempted.
    pub is_checksum_valid: Option<bool>,
    pub branch_code: Option<String>,
    pub institution_code: Option<String>,
    pub expected_check_digit: Option<char>,
    pub actual_check_digit: Option<char>,
    pub is_valid: bool,
    pub errors: Vec<String>,
}

fn digit_values(input: &str) -> Option<Vec<u32>> {
    input.chars().map(|c| c.to_digit(10)).collect()
}

/// Verify the CPA checksum of a 9-digit transit number.
///
/// Non-numeric or wrong-length input yields `is_valid: false` with a null
/// calculated digit; it never panics.
pub fn validate_checksum(transit_number: &str) -> ChecksumResult {
    let digits = match digit_values(transit_number) {
        Some(d) if d.len() == 9 => d,
        _ => {
            return ChecksumResult {
                is_valid: false,
                calculated_check_digit: None,
            }
        }
    };

    let weighted_sum: u32 = digits
        .iter()
        .zip(TRANSIT_WEIGHTS.iter())
        .map(|(d, w)| d * w)
        .sum();

    ChecksumResult {
        is_valid: weighted_sum % 10 == 0,
        calculated_check_digit: calculate_check_digit(&transit_number[..8]),
    }
}

/// Compute the check digit for an 8-digit branch+institution prefix.
///
/// Returns None only for malformed input; every valid prefix has exactly one
/// check digit because `3 * d (mod 10)` ranges over all residues.
pub fn calculate_check_digit(eight_digit_prefix: &str) -> Option<char> {
    let digits = digit_values(eight_digit_prefix)?;
    if digits.len() != 8 {
        return None;
    }

    let prefix_sum: u32 = digits
        .iter()
        .zip(TRANSIT_WEIGHTS.iter())
        .map(|(d, w)| d * w)
        .sum();

    (0..=9u32)
        .find(|d| (prefix_sum + d * CHECK_DIGIT_WEIGHT) % 10 == 0)
        .and_then(|d| char::from_digit(d, 10))
}

/// Validate a candidate transit number: format first, then checksum.
///
/// Error messages accumulate so a caller sees every reason at once.
pub fn validate_transit_number(input: &str) -> TransitValidationDetail {
    let mut errors = Vec::new();

    if input.chars().count() != 9 {
        errors.push(format!(
            "Transit number must be exactly 9 digits, got {} characters",
            input.chars().count()
        ));
    }
    if !input.chars().all(|c| c.is_ascii_digit()) {
        errors.push("Transit number must contain only digits".to_string());
    }

    if !errors.is_empty() {
        return TransitValidationDetail {
            is_format_valid: false,
            is_checksum_valid: None,
            branch_code: None,
            institution_code: None,
            expected_check_digit: None,
            actual_check_digit: None,
            is_valid: false,
            errors,
        };
    }

    // Format is valid: nine ASCII digits, so byte slicing is safe.
    let checksum = validate_checksum(input);
    if !checksum.is_valid {
        errors.push("Transit number failed CPA check-digit validation".to_string());
    }

    TransitValidationDetail {
        is_format_valid: true,
        is_checksum_valid: Some(checksum.is_valid),
        branch_code: Some(input[..5].to_string()),
        institution_code: Some(input[5..8].to_string()),
        expected_check_digit: checksum.calculated_check_digit,
        actual_check_digit: input.chars().nth(8),
        is_valid: checksum.is_valid,
        errors,
    }
}
