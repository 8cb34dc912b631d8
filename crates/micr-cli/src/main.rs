mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::enrichment::EnhanceArgs;
use commands::institution::{InstitutionArgs, RiskArgs};
use commands::micr::{ParseArgs, TransitArgs};

/// Canadian cheque MICR parsing and institution verification
#[derive(Parser)]
#[command(
    name = "micr",
    version,
    about = "Canadian cheque MICR parsing and institution verification",
    long_about = "Parses the MICR line of a Canadian cheque, validates the CPA \
                  transit-number check digit, and cross-checks the drawn-on \
                  institution against a reference directory with rule-based \
                  risk scoring."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a raw MICR line into structured fields
    Parse(ParseArgs),
    /// Validate a 9-digit transit number (format + CPA checksum)
    Transit(TransitArgs),
    /// Validate a 3-digit institution code against the directory
    Institution(InstitutionArgs),
    /// Score a directory institution with the additive risk model
    Risk(RiskArgs),
    /// Enrich extracted cheque fields with banking reference data
    Enhance(EnhanceArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Parse(args) => commands::micr::run_parse(args),
        Commands::Transit(args) => commands::micr::run_transit(args),
        Commands::Institution(args) => commands::institution::run_institution(args),
        Commands::Risk(args) => commands::institution::run_risk(args),
        Commands::Enhance(args) => commands::enrichment::run_enhance(args),
        Commands::Version => {
            println!("micr {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
