//! Option-symbol parser.

use optsym_types::{Result, Right, Strike, SymbolError, SymbolFormat};

use crate::contract::OptionContract;
use crate::grammar::{self, StrikeEncoding};

/// Parses an option symbol under the given format's grammar.
///
/// One generic routine driven by the format descriptor: strip the marker,
/// take the strike off the tail, then the right character, then the
/// 6-digit expiry, and accept what remains (minus the declared separator)
/// as the underlying block. For the polygon/tradier grammar a trailing
/// digit run in the underlying block is a provider-injected correction
/// number and is stripped; the canonical symbol is rebuilt from the
/// corrected fields and never carries the stray digits or the prefix.
///
/// # Examples
///
/// ```
/// use optsym_codec::parse_option_symbol;
/// use optsym_types::SymbolFormat;
///
/// let contract = parse_option_symbol("O:TSLA211015P00125000", SymbolFormat::Polygon)?;
/// assert_eq!(contract.underlying_symbol(), "TSLA");
/// assert_eq!(contract.canonical_symbol(), "TSLA211015P00125000");
/// # Ok::<(), optsym_types::SymbolError>(())
/// ```
///
/// # Errors
///
/// Returns [`SymbolError::MalformedSymbol`] when any structural step cannot
/// find its expected token.
pub fn parse_option_symbol(symbol: &str, format: SymbolFormat) -> Result<OptionContract> {
    let desc = grammar::descriptor(format);
    let malformed = |reason: &str| SymbolError::malformed(symbol, reason);

    // every grammar is ASCII-only; rejecting here keeps the fixed-width
    // byte splits below on char boundaries
    if !symbol.is_ascii() {
        return Err(malformed("symbol must contain only ASCII characters"));
    }

    // 1. marker
    let mut body = symbol;
    if let Some(marker) = desc.marker {
        if let Some(stripped) = strip_marker(body, marker) {
            body = stripped;
        } else if desc.marker_required {
            return Err(malformed(&format!("missing leading '{marker}' marker")));
        }
    }

    // 2. strike off the tail
    let (body, strike) = match desc.strike {
        StrikeEncoding::Fixed8 => {
            if body.len() < 8 {
                return Err(malformed("strike field must be exactly 8 digits"));
            }
            let (head, field) = body.split_at(body.len() - 8);
            let strike = Strike::from_fixed8(field)
                .ok_or_else(|| malformed("strike field must be exactly 8 digits"))?;
            (head, strike)
        }
        StrikeEncoding::Decimal => {
            let (head, token) = split_trailing_decimal(body);
            let strike = Strike::from_decimal_str(token)
                .ok_or_else(|| malformed("missing or invalid decimal strike"))?;
            (head, strike)
        }
    };

    // 3. right character
    let right_char = body
        .chars()
        .next_back()
        .ok_or_else(|| malformed("missing right character"))?;
    let right = Right::try_from(right_char)
        .map_err(|_| malformed(&format!("unrecognized right character '{right_char}'")))?;
    let body = &body[..body.len() - right_char.len_utf8()];

    // 4. expiry
    if body.len() < 6 {
        return Err(malformed("expiry field must be 6 digits"));
    }
    let (body, date_token) = body.split_at(body.len() - 6);
    if !date_token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed("expiry field must be 6 digits"));
    }
    let expiry = grammar::parse_date_token(date_token, desc.date_order)
        .ok_or_else(|| malformed("expiry is not a valid calendar date"))?;

    // 5. underlying block
    let mut root = body;
    if let Some(sep) = desc.separator {
        root = root
            .strip_suffix(sep)
            .ok_or_else(|| malformed(&format!("missing '{sep}' separator")))?;
    }
    if desc.tolerates_correction {
        root = root.trim_end_matches(|c: char| c.is_ascii_digit());
    }
    if root.is_empty() {
        return Err(malformed("missing underlying symbol"));
    }
    if !root.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(malformed("underlying block must contain only letters"));
    }

    OptionContract::new(root, expiry, right, strike)
}

/// Strips a leading marker, ASCII case-insensitively.
fn strip_marker<'a>(symbol: &'a str, marker: &str) -> Option<&'a str> {
    let head = symbol.get(..marker.len())?;
    head.eq_ignore_ascii_case(marker)
        .then(|| &symbol[marker.len()..])
}

/// Splits off the maximal trailing run of digits and dots.
fn split_trailing_decimal(body: &str) -> (&str, &str) {
    let bytes = body.as_bytes();
    let mut i = bytes.len();
    while i > 0 && (bytes[i - 1].is_ascii_digit() || bytes[i - 1] == b'.') {
        i -= 1;
    }
    body.split_at(i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_polygon() {
        let contract = parse_option_symbol("A220628P00066010", SymbolFormat::Polygon).unwrap();
        assert_eq!(contract.underlying_symbol(), "A");
        assert_eq!(contract.expiry(), date(2022, 6, 28));
        assert_eq!(contract.right(), Right::Put);
        assert_eq!(contract.strike().millis(), 66_010);
        assert_eq!(contract.canonical_symbol(), "A220628P00066010");
    }

    #[test]
    fn test_parse_polygon_prefix_tolerance() {
        let with = parse_option_symbol("O:A220628P00066010", SymbolFormat::Polygon).unwrap();
        let without = parse_option_symbol("A220628P00066010", SymbolFormat::Polygon).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_parse_correction_digits_stripped() {
        let contract = parse_option_symbol("MS1221015C00234000", SymbolFormat::Polygon).unwrap();
        assert_eq!(contract.underlying_symbol(), "MS");
        assert_eq!(contract.canonical_symbol(), "MS221015C00234000");

        // idempotent on already-clean input
        let clean = parse_option_symbol("MS221015C00234000", SymbolFormat::Polygon).unwrap();
        assert_eq!(clean.canonical_symbol(), "MS221015C00234000");
    }

    #[test]
    fn test_parse_correction_digits_longer_run() {
        let contract = parse_option_symbol("O:NVDA12210618C00100000", SymbolFormat::Tradier);
        // tradier has no marker, the O: stays and fails the letter check
        assert!(contract.is_err());

        let contract =
            parse_option_symbol("NVDA12210618C00100000", SymbolFormat::Tradier).unwrap();
        assert_eq!(contract.underlying_symbol(), "NVDA");
        assert_eq!(contract.canonical_symbol(), "NVDA210618C00100000");
    }

    #[test]
    fn test_parse_tos() {
        let contract = parse_option_symbol(".NVDA062822C546", SymbolFormat::Tos).unwrap();
        assert_eq!(contract.underlying_symbol(), "NVDA");
        assert_eq!(contract.expiry(), date(2022, 6, 28));
        assert_eq!(contract.right(), Right::Call);
        assert_eq!(contract.strike().millis(), 546_000);
        assert_eq!(contract.canonical_symbol(), "NVDA220628C00546000");
    }

    #[test]
    fn test_parse_tos_requires_marker() {
        assert!(matches!(
            parse_option_symbol("NVDA062822C546", SymbolFormat::Tos),
            Err(SymbolError::MalformedSymbol { .. })
        ));
    }

    #[test]
    fn test_parse_tda() {
        let contract = parse_option_symbol("MSFT_120521P7.345", SymbolFormat::Tda).unwrap();
        assert_eq!(contract.underlying_symbol(), "MSFT");
        assert_eq!(contract.expiry(), date(2021, 12, 5));
        assert_eq!(contract.right(), Right::Put);
        assert_eq!(contract.strike().millis(), 7_345);
    }

    #[test]
    fn test_parse_trade_station() {
        let contract = parse_option_symbol("AB 220628P46.01", SymbolFormat::TradeStation).unwrap();
        assert_eq!(contract.underlying_symbol(), "AB");
        assert_eq!(contract.strike().millis(), 46_010);
    }

    #[test]
    fn test_parse_ibkr() {
        let contract = parse_option_symbol("AB 220628P00046045", SymbolFormat::Ibkr).unwrap();
        assert_eq!(contract.underlying_symbol(), "AB");
        assert_eq!(contract.strike().millis(), 46_045);
        assert_eq!(contract.canonical_symbol(), "AB220628P00046045");
    }

    #[test]
    fn test_parse_missing_separator() {
        assert!(matches!(
            parse_option_symbol("AB220628P00046045", SymbolFormat::Ibkr),
            Err(SymbolError::MalformedSymbol { .. })
        ));
        assert!(matches!(
            parse_option_symbol("MSFT120521P7.345", SymbolFormat::Tda),
            Err(SymbolError::MalformedSymbol { .. })
        ));
    }

    #[test]
    fn test_parse_lowercase_right_tolerated() {
        let contract = parse_option_symbol("TSLA211015p00125000", SymbolFormat::Polygon).unwrap();
        assert_eq!(contract.right(), Right::Put);
    }

    #[test]
    fn test_parse_truncated_date() {
        assert!(matches!(
            parse_option_symbol("AMD22C00546560", SymbolFormat::Polygon),
            Err(SymbolError::MalformedSymbol { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_calendar_date() {
        // 2022-13-41 is not a date
        assert!(matches!(
            parse_option_symbol("AMD221341C00546560", SymbolFormat::Polygon),
            Err(SymbolError::MalformedSymbol { .. })
        ));
    }

    #[test]
    fn test_parse_bad_right_character() {
        assert!(matches!(
            parse_option_symbol("AMD220628X00546560", SymbolFormat::Polygon),
            Err(SymbolError::MalformedSymbol { .. })
        ));
    }

    #[test]
    fn test_parse_bad_strike_field() {
        // non-digit inside the fixed8 field
        assert!(matches!(
            parse_option_symbol("AMD220628C0054656O", SymbolFormat::Polygon),
            Err(SymbolError::MalformedSymbol { .. })
        ));
        // decimal grammar with no strike at all
        assert!(matches!(
            parse_option_symbol(".NVDA062822C", SymbolFormat::Tos),
            Err(SymbolError::MalformedSymbol { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_ascii() {
        // multi-byte characters must fail cleanly, not split mid-character
        for symbol in ["Xé1234567", "AMD220628C0054656é", "éMD220628C00546560"] {
            assert!(matches!(
                parse_option_symbol(symbol, SymbolFormat::Polygon),
                Err(SymbolError::MalformedSymbol { .. })
            ));
        }
        assert!(matches!(
            parse_option_symbol(".NVDA062822C54é", SymbolFormat::Tos),
            Err(SymbolError::MalformedSymbol { .. })
        ));
    }

    #[test]
    fn test_parse_empty_and_garbage() {
        assert!(parse_option_symbol("", SymbolFormat::Polygon).is_err());
        assert!(parse_option_symbol("O:", SymbolFormat::Polygon).is_err());
        assert!(parse_option_symbol("12345678", SymbolFormat::Polygon).is_err());
    }
}
