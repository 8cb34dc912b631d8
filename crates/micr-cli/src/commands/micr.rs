use clap::Args;
use serde_json::Value;

use micr_core::institution::directory;
use micr_core::micr::checksum;
use micr_core::micr::tokenizer::{self, MicrSymbols};

use crate::input;

/// Arguments for MICR line parsing
#[derive(Args)]
pub struct ParseArgs {
    /// Raw MICR line (reads piped stdin when omitted)
    pub line: Option<String>,

    /// Four replacement delimiter characters in transit/amount/on-us/dash
    /// order, e.g. "TAOD" for ASCII test input
    #[arg(long)]
    pub symbols: Option<String>,
}

/// Arguments for transit-number validation
#[derive(Args)]
pub struct TransitArgs {
    /// Candidate 9-digit transit number
    pub transit: String,
}

pub fn run_parse(args: ParseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let line = match args.line {
        Some(line) => line,
        None => input::stdin::read_raw_line()?
            .ok_or("a MICR line argument or piped stdin is required")?,
    };

    let symbols = match args.symbols {
        Some(ref symbols) => parse_symbols(symbols)?,
        None => MicrSymbols::default(),
    };

    let parsed = tokenizer::parse_micr_line_with(&symbols, &line);
    Ok(serde_json::to_value(parsed)?)
}

pub fn run_transit(args: TransitArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let detail = checksum::validate_transit_number(&args.transit);

    let mut value = serde_json::to_value(&detail)?;
    // Informational only; never part of the validation decision.
    if let Some(branch) = detail.branch_code.as_deref() {
        if let Some(region) = directory::branch_location(branch) {
            value["branch_location"] = Value::String(region);
        }
    }
    Ok(value)
}

fn parse_symbols(symbols: &str) -> Result<MicrSymbols, Box<dyn std::error::Error>> {
    let chars: Vec<char> = symbols.chars().collect();
    if chars.len() != 4 {
        return Err("--symbols must supply exactly four characters".into());
    }
    Ok(MicrSymbols::custom(chars[0], chars[1], chars[2], chars[3])?)
}
