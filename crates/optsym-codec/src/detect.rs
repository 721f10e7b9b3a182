//! Format detection from lexical shape.

use optsym_types::{Result, SymbolError, SymbolFormat};

use crate::parse::parse_option_symbol;

/// Outcome of format detection.
///
/// Detection may legitimately produce more than one candidate: an 8-digit
/// space-separated strike is simultaneously a valid fixed-point `ibkr`
/// strike and a whole-number `trade_station` strike. The ambiguous outcome
/// is a success, not an error; the caller must disambiguate by context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// Exactly one format matches the symbol's shape.
    Unique(SymbolFormat),
    /// Several formats match and the string alone cannot decide.
    Ambiguous(Vec<SymbolFormat>),
}

impl Detection {
    /// Returns the candidate formats, best match first.
    #[must_use]
    pub fn candidates(&self) -> &[SymbolFormat] {
        match self {
            Self::Unique(format) => std::slice::from_ref(format),
            Self::Ambiguous(formats) => formats,
        }
    }

    /// Returns the format if detection was unambiguous.
    #[must_use]
    pub const fn unique(&self) -> Option<SymbolFormat> {
        match self {
            Self::Unique(format) => Some(*format),
            Self::Ambiguous(_) => None,
        }
    }
}

impl std::fmt::Display for Detection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tags: Vec<&str> = self.candidates().iter().map(SymbolFormat::as_str).collect();
        write!(f, "{}", tags.join(" | "))
    }
}

/// Infers the most likely format(s) of a symbol from its shape alone.
///
/// Ordered structural rules, first match wins:
///
/// 1. leading dot marker: `tos`;
/// 2. underscore separator between letters and digits: `tda`;
/// 3. no separator, parses under the polygon grammar: `polygon` (a
///    `tradier` symbol is grammatically identical and reports as `polygon`;
///    callers must not read the tag as "definitely not tradier");
/// 4. single space separator: `trade_station` when the strike token is
///    decimal text, both `ibkr` and `trade_station` when it is exactly 8
///    digits.
///
/// # Errors
///
/// Returns [`SymbolError::UnrecognizedFormat`] when no rule's structural
/// shape matches.
pub fn detect_option_symbol_format(symbol: &str) -> Result<Detection> {
    if symbol.starts_with('.') {
        return Ok(Detection::Unique(SymbolFormat::Tos));
    }

    if has_underscore_separator(symbol) {
        return Ok(Detection::Unique(SymbolFormat::Tda));
    }

    if symbol.contains(' ') {
        let (_, strike_token) = split_trailing_strike(symbol);
        if !strike_token.contains('.')
            && strike_token.len() == 8
            && parse_option_symbol(symbol, SymbolFormat::Ibkr).is_ok()
        {
            return Ok(Detection::Ambiguous(vec![
                SymbolFormat::Ibkr,
                SymbolFormat::TradeStation,
            ]));
        }
        // dotted strikes and whole-number strikes of any other width can
        // only be decimal
        if parse_option_symbol(symbol, SymbolFormat::TradeStation).is_ok() {
            return Ok(Detection::Unique(SymbolFormat::TradeStation));
        }
    } else if parse_option_symbol(symbol, SymbolFormat::Polygon).is_ok() {
        return Ok(Detection::Unique(SymbolFormat::Polygon));
    }

    Err(SymbolError::UnrecognizedFormat(symbol.to_string()))
}

/// True if the symbol carries a `_` with a letter before and a digit after.
fn has_underscore_separator(symbol: &str) -> bool {
    symbol
        .as_bytes()
        .windows(3)
        .any(|w| w[1] == b'_' && w[0].is_ascii_alphabetic() && w[2].is_ascii_digit())
}

/// Splits off the maximal trailing run of digits and dots.
fn split_trailing_strike(symbol: &str) -> (&str, &str) {
    let bytes = symbol.as_bytes();
    let mut i = bytes.len();
    while i > 0 && (bytes[i - 1].is_ascii_digit() || bytes[i - 1] == b'.') {
        i -= 1;
    }
    symbol.split_at(i)
}
