//! Error types for optsym.

use thiserror::Error;

/// Result type alias for optsym operations.
pub type Result<T> = std::result::Result<T, SymbolError>;

/// Errors that can occur while building, parsing, detecting or converting
/// option symbols.
///
/// All variants are local and non-fatal: they are returned to the immediate
/// caller and nothing is retried or silently recovered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// A caller-supplied field failed basic validity checks before any
    /// symbol string was produced.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A symbol string does not match the declared format's grammar.
    #[error("malformed symbol '{symbol}': {reason}")]
    MalformedSymbol {
        /// The symbol that failed to parse.
        symbol: String,
        /// Which structural step failed.
        reason: String,
    },

    /// An unknown symbol format tag was requested.
    #[error("unsupported symbol format '{0}', expected one of: polygon, tradier, tos, tda, trade_station, ibkr")]
    UnsupportedFormat(String),

    /// No grammar rule matched the symbol during format detection.
    #[error("unrecognized symbol format: {0}")]
    UnrecognizedFormat(String),
}

impl SymbolError {
    /// Creates a [`SymbolError::MalformedSymbol`] for the given symbol.
    pub fn malformed(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSymbol {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}
