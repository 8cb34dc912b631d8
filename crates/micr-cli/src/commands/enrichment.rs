use clap::Args;
use serde_json::Value;

use micr_core::enrichment::facade::{enhance_micr_with_banking_data, ChequeFields};

use crate::input;

/// Arguments for MICR enrichment
#[derive(Args)]
pub struct EnhanceArgs {
    /// Path to a JSON file of extracted cheque fields
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_enhance(args: EnhanceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fields: ChequeFields = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for enhance".into());
    };

    let context = enhance_micr_with_banking_data(&fields);
    Ok(serde_json::to_value(context)?)
}
