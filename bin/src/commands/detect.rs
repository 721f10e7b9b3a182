//! Detect command implementation.

use anyhow::Result;
use optsym_lib::prelude::*;

/// Detect and print the candidate format(s) of a symbol.
pub(crate) fn run(symbol: &str) -> Result<()> {
    match detect_option_symbol_format(symbol)? {
        Detection::Unique(format) => println!("{format}"),
        ambiguous => {
            for format in ambiguous.candidates() {
                println!("{format}");
            }
            eprintln!("note: the symbol's shape alone cannot decide between these formats");
        }
    }
    Ok(())
}
