//! Benchmark fixtures for optsym.

use optsym_lib::prelude::*;

/// One valid symbol per supported format.
pub const FIXTURES: &[(&str, SymbolFormat)] = &[
    ("O:TSLA211015P00125000", SymbolFormat::Polygon),
    ("TSLA211015P00125000", SymbolFormat::Tradier),
    (".TSLA101521P125", SymbolFormat::Tos),
    ("TSLA_101521P125", SymbolFormat::Tda),
    ("TSLA 211015P125", SymbolFormat::TradeStation),
    ("TSLA 211015P00125000", SymbolFormat::Ibkr),
];

/// A polygon symbol carrying a provider correction digit.
pub const CORRECTED: &str = "MS1221015C00234000";
