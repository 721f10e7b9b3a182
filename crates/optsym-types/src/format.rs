//! Supported option-symbol format tags.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{Result, SymbolError};

/// The closed set of supported option-symbol grammars.
///
/// Each tag identifies one vendor's textual encoding of an option contract.
/// The per-format lexical rules live in the codec's grammar table; this enum
/// is only the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SymbolFormat {
    /// Polygon.io tickers, optionally prefixed with `O:`.
    #[default]
    Polygon,
    /// Tradier tickers (grammatically identical to polygon, no prefix).
    Tradier,
    /// ThinkOrSwim tickers, led by a mandatory dot.
    Tos,
    /// TD Ameritrade tickers, underscore-separated.
    Tda,
    /// TradeStation tickers, space-separated with decimal strikes.
    TradeStation,
    /// Interactive Brokers tickers, space-separated with fixed-point strikes.
    Ibkr,
}

impl SymbolFormat {
    /// Returns the format tag as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Polygon => "polygon",
            Self::Tradier => "tradier",
            Self::Tos => "tos",
            Self::Tda => "tda",
            Self::TradeStation => "trade_station",
            Self::Ibkr => "ibkr",
        }
    }

    /// Returns all supported formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Polygon,
            Self::Tradier,
            Self::Tos,
            Self::Tda,
            Self::TradeStation,
            Self::Ibkr,
        ]
    }
}

impl std::fmt::Display for SymbolFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SymbolFormat {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "polygon" => Ok(Self::Polygon),
            "tradier" => Ok(Self::Tradier),
            "tos" | "thinkorswim" => Ok(Self::Tos),
            "tda" | "td_ameritrade" => Ok(Self::Tda),
            "trade_station" | "tradestation" => Ok(Self::TradeStation),
            "ibkr" | "interactive_brokers" => Ok(Self::Ibkr),
            _ => Err(SymbolError::UnsupportedFormat(s.to_string())),
        }
    }
}
