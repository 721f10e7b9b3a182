//! Convert command implementation.

use anyhow::{Context, Result};
use optsym_lib::prelude::*;

use crate::display;

/// Convert a symbol between formats and print the result.
pub(crate) fn run(symbol: &str, from: Option<&str>, to: &str) -> Result<()> {
    let from = display::resolve_format(symbol, from)?;
    let to: SymbolFormat = to
        .parse()
        .with_context(|| format!("invalid --to '{to}'"))?;

    let converted = convert_option_symbol_format(symbol, from, to)?;
    println!("{converted}");
    Ok(())
}
