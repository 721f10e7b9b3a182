//! Formats command implementation.

use anyhow::Result;
use optsym_lib::{DateOrder, StrikeEncoding, descriptor, prelude::*};

/// Print the grammar table, one row per supported format.
pub(crate) fn run() -> Result<()> {
    println!(
        "{:<14} {:<8} {:<10} {:<10} {:<8}",
        "FORMAT", "MARKER", "DATE", "SEPARATOR", "STRIKE"
    );
    println!("{}", "-".repeat(54));

    for &format in SymbolFormat::all() {
        let desc = descriptor(format);
        let marker = match desc.marker {
            Some(marker) if desc.marker_required => marker.to_string(),
            Some(marker) => format!("[{marker}]"),
            None => "-".to_string(),
        };
        let date = match desc.date_order {
            DateOrder::YearMonthDay => "YYMMDD",
            DateOrder::MonthDayYear => "MMDDYY",
        };
        let separator = desc.separator.map_or("-".to_string(), |sep| {
            if sep == ' ' {
                "space".to_string()
            } else {
                sep.to_string()
            }
        });
        let strike = match desc.strike {
            StrikeEncoding::Fixed8 => "fixed8",
            StrikeEncoding::Decimal => "decimal",
        };
        println!("{:<14} {marker:<8} {date:<10} {separator:<10} {strike:<8}", format.as_str());
    }

    Ok(())
}
