//! Build command implementation.

use anyhow::{Context, Result};
use optsym_lib::prelude::*;

/// Build a symbol from its parts and print it.
pub(crate) fn run(
    underlying: &str,
    expiry: &str,
    right: &str,
    strike: f64,
    format: &str,
    prefix: bool,
) -> Result<()> {
    let format: SymbolFormat = format
        .parse()
        .with_context(|| format!("invalid --format '{format}'"))?;

    let symbol = build_option_symbol(underlying, expiry, right, strike, format, prefix)?;
    println!("{symbol}");
    Ok(())
}
