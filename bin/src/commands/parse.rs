//! Parse command implementation.

use anyhow::Result;
use optsym_lib::prelude::*;

use crate::display::{self, Output};

/// Parse a symbol and print its fields in the requested shape.
pub(crate) fn run(symbol: &str, format: Option<&str>, output: Output) -> Result<()> {
    let format = display::resolve_format(symbol, format)?;
    let contract = parse_option_symbol(symbol, format)?;
    display::print_contract(&contract, output)
}
