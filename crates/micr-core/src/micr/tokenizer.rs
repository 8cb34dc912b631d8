//! Best-effort tokenizer for the MICR line printed along the bottom of a
//! cheque.
//!
//! Real-world MICR layouts are only semi-standardized, so this parser
//! extracts whatever fields it can recognize and reports everything it could
//! not via `parsing_errors` instead of failing the call. Partial extraction
//! is the expected common case.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{MicrError, MicrResult};

// Canonical single-letter markers the four delimiter symbols normalize to.
const TRANSIT_MARKER: char = 't';
const AMOUNT_MARKER: char = 'a';
const ON_US_MARKER: char = 'o';
const DASH_MARKER: char = 'd';

/// The four reserved delimiter symbols of a MICR line.
///
/// Defaults to the Unicode OCR block glyphs of the E-13B font. Hosts that
/// cannot produce those glyphs (tests, ASCII-only pipelines) can substitute
/// any four distinct non-digit characters via [`MicrSymbols::custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MicrSymbols {
    pub transit: char,
    pub amount: char,
    pub on_us: char,
    pub dash: char,
}

impl Default for MicrSymbols {
    fn default() -> Self {
        Self {
            transit: '\u{2446}',
            amount: '\u{2447}',
            on_us: '\u{2449}',
            dash: '\u{2448}',
        }
    }
}

impl MicrSymbols {
    /// Build a symbol table from four caller-chosen delimiters.
    ///
    /// Digits are rejected because they would be indistinguishable from
    /// field content, and the four symbols must be distinct.
    pub fn custom(transit: char, amount: char, on_us: char, dash: char) -> MicrResult<Self> {
        let symbols = [transit, amount, on_us, dash];
        for c in &symbols {
            if c.is_ascii_digit() {
                return Err(MicrError::InvalidInput {
                    field: "symbols".to_string(),
                    reason: format!("'{}' is a digit; delimiter symbols must be non-digit", c),
                });
            }
        }
        for i in 0..symbols.len() {
            for j in (i + 1)..symbols.len() {
                if symbols[i] == symbols[j] {
                    return Err(MicrError::InvalidInput {
                        field: "symbols".to_string(),
                        reason: format!("'{}' is used for more than one delimiter", symbols[i]),
                    });
                }
            }
        }
        Ok(Self {
            transit,
            amount,
            on_us,
            dash,
        })
    }
}

/// Decomposition of one raw MICR line. Absent fields are null, never "".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMicrLine {
    pub raw_micr_original: String,
    /// The input with delimiter symbols normalized to `t`/`a`/`o`/`d`.
    pub standardized_micr: String,
    pub transit_number: Option<String>,
    pub account_number: Option<String>,
    pub cheque_number: Option<String>,
    /// 1-4 digits following the on-us field.
    pub transaction_code: Option<String>,
    pub auxiliary_on_us: Option<String>,
    pub amount: Option<Decimal>,
    pub parsing_errors: Vec<String>,
}

/// Parse a raw MICR line using the default E-13B delimiter symbols.
pub fn parse_micr_line(raw: &str) -> ParsedMicrLine {
    parse_micr_line_with(&MicrSymbols::default(), raw)
}

/// Parse a raw MICR line with a caller-supplied delimiter symbol table.
pub fn parse_micr_line_with(symbols: &MicrSymbols, raw: &str) -> ParsedMicrLine {
    let standardized: String = raw
        .chars()
        .map(|c| {
            if c == symbols.transit {
                TRANSIT_MARKER
            } else if c == symbols.amount {
                AMOUNT_MARKER
            } else if c == symbols.on_us {
                ON_US_MARKER
            } else if c == symbols.dash {
                DASH_MARKER
            } else {
                c
            }
        })
        .collect();

    let chars: Vec<char> = standardized.chars().collect();
    let mut parsing_errors = Vec::new();

    // Transit number: the first transit marker followed by at least nine
    // digits; the first nine are the capture.
    let mut transit_number = None;
    let mut transit_span_end = None;
    let mut transit_marker_idx = None;
    for (i, &c) in chars.iter().enumerate() {
        if c != TRANSIT_MARKER {
            continue;
        }
        let run: String = chars[i + 1..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .take(9)
            .collect();
        if run.len() == 9 {
            transit_number = Some(run);
            transit_marker_idx = Some(i);
            transit_span_end = Some(i + 1 + 9);
            break;
        }
    }
    if transit_number.is_none() {
        parsing_errors.push("Transit number not found in MICR line".to_string());
    }

    // Account number: on-us marker followed by alphanumeric/hyphen content.
    // A missing marker is tolerated; some layouts omit it entirely.
    let first_on_us = chars.iter().position(|&c| c == ON_US_MARKER);
    let mut account_number = None;
    let mut account_span_end = None;
    if let Some(i) = first_on_us {
        let captured: String = chars[i + 1..]
            .iter()
            .take_while(|c| c.is_ascii_alphanumeric() || **c == '-')
            .collect();
        if !captured.is_empty() {
            account_span_end = Some(i + 1 + captured.chars().count());
            let stripped = captured.replace('-', "");
            if !stripped.is_empty() {
                account_number = Some(stripped);
            }
        }
    }

    // Amount: digits with an optional ./,-separated fraction, terminated by
    // the closing amount marker or the first non-amount character. Anything
    // that does not survive strict re-validation is discarded.
    let mut amount = None;
    if let Some(i) = chars.iter().position(|&c| c == AMOUNT_MARKER) {
        let captured: String = chars[i + 1..]
            .iter()
            .take_while(|c| c.is_ascii_digit() || **c == '.' || **c == ',')
            .collect();
        let normalized = captured.replace(',', ".");
        if is_well_formed_amount(&normalized) {
            amount = Decimal::from_str(&normalized).ok();
        }
    }

    // Cheque number and auxiliary on-us live in the unmarked region before
    // the transit field (or before the on-us field when transit is absent).
    // Heuristic: first whitespace/dash-delimited token becomes the cheque
    // number iff purely numeric; the rest concatenates into auxiliary on-us.
    let prefix_anchor = transit_marker_idx.or(first_on_us);
    let mut cheque_number = None;
    let mut auxiliary_on_us = None;
    if let Some(pos) = prefix_anchor {
        let prefix: String = chars[..pos].iter().collect();
        let tokens: Vec<&str> = prefix
            .split(|c: char| c.is_whitespace() || c == '-' || c == DASH_MARKER)
            .filter(|t| !t.is_empty())
            .collect();
        if let Some((first, rest)) = tokens.split_first() {
            if first.chars().all(|c| c.is_ascii_digit()) {
                cheque_number = Some((*first).to_string());
                let aux = rest.concat();
                if !aux.is_empty() {
                    auxiliary_on_us = Some(aux);
                }
            } else {
                let trimmed = prefix.trim();
                if !trimmed.is_empty() {
                    auxiliary_on_us = Some(trimmed.to_string());
                }
            }
        }
    }

    // Transaction code: 1-4 leading digits in the region after the on-us
    // capture (or after the transit digits when no on-us field matched).
    let tail_start = match (first_on_us, account_span_end) {
        (Some(_), Some(end)) => Some(end),
        (Some(i), None) => Some(i + 1),
        (None, _) => transit_span_end,
    };
    let mut transaction_code = None;
    if let Some(start) = tail_start {
        if start <= chars.len() {
            let tail: String = chars[start..].iter().collect();
            let code: String = tail
                .trim_start()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .take(4)
                .collect();
            if !code.is_empty() {
                transaction_code = Some(code);
            }
        }
    }

    if transit_number.is_none()
        && account_number.is_none()
        && cheque_number.is_none()
        && transaction_code.is_none()
        && auxiliary_on_us.is_none()
        && amount.is_none()
    {
        parsing_errors.push("No MICR fields could be extracted from the line".to_string());
    }

    ParsedMicrLine {
        raw_micr_original: raw.to_string(),
        standardized_micr: standardized,
        transit_number,
        account_number,
        cheque_number,
        transaction_code,
        auxiliary_on_us,
        amount,
        parsing_errors,
    }
}

/// Strict amount shape after comma normalization: `^\d+(\.\d{1,2})?$`.
fn is_well_formed_amount(s: &str) -> bool {
    let mut parts = s.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match parts.next() {
        None => true,
        Some(frac) => {
            (1..=2).contains(&frac.len()) && frac.chars().all(|c| c.is_ascii_digit())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    // ASCII placeholders keep the test inputs readable.
    fn ascii_symbols() -> MicrSymbols {
        MicrSymbols::custom('T', 'A', 'O', 'D').unwrap()
    }

    #[test]
    fn test_full_line() {
        let line = "001234 T000120049O1234-567 001A1250.00A";
        let parsed = parse_micr_line_with(&ascii_symbols(), line);
        assert_eq!(parsed.transit_number.as_deref(), Some("000120049"));
        assert_eq!(parsed.account_number.as_deref(), Some("1234567"));
        assert_eq!(parsed.cheque_number.as_deref(), Some("001234"));
        assert_eq!(parsed.transaction_code.as_deref(), Some("001"));
        assert_eq!(parsed.amount, Some(dec!(1250.00)));
        assert!(parsed.parsing_errors.is_empty());
    }

    #[test]
    fn test_standardized_markers() {
        let parsed = parse_micr_line_with(&ascii_symbols(), "T000120049O123");
        assert_eq!(parsed.standardized_micr, "t000120049o123");
    }

    #[test]
    fn test_missing_transit_is_an_error() {
        let parsed = parse_micr_line_with(&ascii_symbols(), "O1234567");
        assert_eq!(parsed.transit_number, None);
        assert!(parsed
            .parsing_errors
            .iter()
            .any(|e| e.contains("Transit number")));
        // Account still recovered
        assert_eq!(parsed.account_number.as_deref(), Some("1234567"));
    }

    #[test]
    fn test_missing_on_us_is_tolerated() {
        let parsed = parse_micr_line_with(&ascii_symbols(), "T000120049");
        assert_eq!(parsed.account_number, None);
        assert!(parsed.parsing_errors.is_empty());
    }

    #[test]
    fn test_transit_needs_nine_digits() {
        let parsed = parse_micr_line_with(&ascii_symbols(), "T00012004");
        assert_eq!(parsed.transit_number, None);
    }

    #[test]
    fn test_transit_takes_first_nine_of_longer_run() {
        let parsed = parse_micr_line_with(&ascii_symbols(), "T0001200491");
        assert_eq!(parsed.transit_number.as_deref(), Some("000120049"));
    }

    #[test]
    fn test_amount_comma_normalized() {
        let parsed = parse_micr_line_with(&ascii_symbols(), "T000120049A1250,50A");
        assert_eq!(parsed.amount, Some(dec!(1250.50)));
    }

    #[test]
    fn test_malformed_amount_discarded() {
        let parsed = parse_micr_line_with(&ascii_symbols(), "T000120049A12.345A");
        assert_eq!(parsed.amount, None);
    }

    #[test]
    fn test_prefix_all_auxiliary_when_not_numeric() {
        let parsed = parse_micr_line_with(&ascii_symbols(), "AB12 T000120049");
        assert_eq!(parsed.cheque_number, None);
        assert_eq!(parsed.auxiliary_on_us.as_deref(), Some("AB12"));
    }

    #[test]
    fn test_prefix_cheque_and_auxiliary() {
        let parsed = parse_micr_line_with(&ascii_symbols(), "0042 88 99T000120049");
        assert_eq!(parsed.cheque_number.as_deref(), Some("0042"));
        assert_eq!(parsed.auxiliary_on_us.as_deref(), Some("8899"));
    }

    #[test]
    fn test_empty_line() {
        let parsed = parse_micr_line("");
        assert_eq!(parsed.transit_number, None);
        assert_eq!(parsed.account_number, None);
        assert_eq!(parsed.cheque_number, None);
        assert_eq!(parsed.transaction_code, None);
        assert_eq!(parsed.auxiliary_on_us, None);
        assert_eq!(parsed.amount, None);
        assert!(!parsed.parsing_errors.is_empty());
    }

    #[test]
    fn test_default_unicode_symbols() {
        let line = "\u{2446}000120049\u{2449}555123";
        let parsed = parse_micr_line(line);
        assert_eq!(parsed.transit_number.as_deref(), Some("000120049"));
        assert_eq!(parsed.account_number.as_deref(), Some("555123"));
    }

    #[test]
    fn test_account_hyphens_stripped() {
        let parsed = parse_micr_line_with(&ascii_symbols(), "T000120049O12-34-56");
        assert_eq!(parsed.account_number.as_deref(), Some("123456"));
    }

    #[test]
    fn test_transaction_code_caps_at_four_digits() {
        let parsed = parse_micr_line_with(&ascii_symbols(), "T000120049O123456 78901");
        // tail after the account capture starts at the space
        assert_eq!(parsed.transaction_code.as_deref(), Some("7890"));
    }

    #[test]
    fn test_custom_symbols_reject_digits_and_duplicates() {
        assert!(MicrSymbols::custom('1', 'A', 'O', 'D').is_err());
        assert!(MicrSymbols::custom('T', 'T', 'O', 'D').is_err());
    }

    #[test]
    fn test_idempotent() {
        let line = "0042T000120049O1234 01A99.10A";
        let a = parse_micr_line_with(&ascii_symbols(), line);
        let b = parse_micr_line_with(&ascii_symbols(), line);
        assert_eq!(a, b);
    }
}
