//! Output shaping for the optsym CLI.

use anyhow::Result;
use clap::ValueEnum;
use optsym_lib::prelude::*;

/// Output shape for parsed contracts.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Output {
    /// Labelled fields, one per line.
    Text,
    /// JSON object keyed by field name.
    Json,
    /// Space-separated field values on one line.
    List,
}

/// Prints a parsed contract in the requested shape.
pub(crate) fn print_contract(contract: &OptionContract, output: Output) -> Result<()> {
    match output {
        Output::Text => {
            println!("Underlying: {}", contract.underlying_symbol());
            println!("Expiry:     {}", contract.expiry_iso());
            println!("Right:      {}", contract.right());
            println!("Strike:     {}", contract.strike());
            println!("Canonical:  {}", contract.canonical_symbol());
        }
        Output::Json => println!("{}", serde_json::to_string_pretty(contract)?),
        Output::List => println!(
            "{} {} {} {} {}",
            contract.underlying_symbol(),
            contract.expiry_iso(),
            contract.right(),
            contract.strike(),
            contract.canonical_symbol()
        ),
    }
    Ok(())
}

/// Resolves a format argument, falling back to shape detection.
///
/// Ambiguous detection is an error here: the CLI refuses to guess and asks
/// the user to pass the format explicitly.
pub(crate) fn resolve_format(symbol: &str, format: Option<&str>) -> Result<SymbolFormat> {
    match format {
        Some(tag) => Ok(tag.parse()?),
        None => match detect_option_symbol_format(symbol)? {
            Detection::Unique(format) => Ok(format),
            ambiguous => anyhow::bail!(
                "symbol format is ambiguous ({ambiguous}); pass --format to disambiguate"
            ),
        },
    }
}
