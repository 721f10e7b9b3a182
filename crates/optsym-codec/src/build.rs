//! Option-symbol builder.

use optsym_types::{IntoExpiry, IntoRight, Result, Strike, SymbolError, SymbolFormat};

use crate::contract::OptionContract;
use crate::grammar;

/// Builds an option symbol string in the given format.
///
/// `expiry` accepts a [`chrono::NaiveDate`] or a `YYMMDD`/ISO string;
/// `right` accepts [`optsym_types::Right`] or a `c`/`call`/`p`/`put`
/// synonym in any case. The strike is rounded to the nearest thousandth.
/// `with_prefix` emits the `O:` marker and only matters for polygon.
///
/// # Examples
///
/// ```
/// use optsym_codec::build_option_symbol;
/// use optsym_types::SymbolFormat;
///
/// let symbol =
///     build_option_symbol("NVDA", "220628", 'c', 546.0, SymbolFormat::Tos, false)?;
/// assert_eq!(symbol, ".NVDA062822C546");
/// # Ok::<(), optsym_types::SymbolError>(())
/// ```
///
/// # Errors
///
/// Returns [`SymbolError::InvalidInput`] if the underlying is empty or not
/// all letters, the right does not map to call/put, the expiry is not a
/// valid date, or the strike is negative or out of range.
pub fn build_option_symbol(
    underlying: &str,
    expiry: impl IntoExpiry,
    right: impl IntoRight,
    strike: f64,
    format: SymbolFormat,
    with_prefix: bool,
) -> Result<String> {
    let contract = OptionContract::new(
        underlying,
        expiry.into_expiry()?,
        right.into_right()?,
        Strike::from_price(strike)?,
    )?;
    Ok(render_option_symbol(&contract, format, with_prefix))
}

/// Renders an already-validated contract in the given format.
///
/// Infallible: every contract field was validated at construction.
#[must_use]
pub fn render_option_symbol(
    contract: &OptionContract,
    format: SymbolFormat,
    with_prefix: bool,
) -> String {
    grammar::render_parts(
        contract.underlying_symbol(),
        contract.expiry(),
        contract.right(),
        contract.strike(),
        format,
        with_prefix,
    )
}

/// Ensures a polygon symbol carries the `O:` prefix required by provider
/// endpoints, uppercasing along the way.
///
/// # Errors
///
/// Returns [`SymbolError::MalformedSymbol`] if the string is too short to
/// be a polygon option symbol.
pub fn ensure_prefix(symbol: &str) -> Result<String> {
    // shortest body: 1-letter underlying + 6-digit date + right + 8-digit strike
    if symbol.trim_start_matches("O:").trim_start_matches("o:").len() < 16 {
        return Err(SymbolError::malformed(
            symbol,
            "too short to be a polygon option symbol",
        ));
    }
    let upper = symbol.to_ascii_uppercase();
    if upper.starts_with("O:") {
        Ok(upper)
    } else {
        Ok(format!("O:{upper}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_build_polygon() {
        let symbol = build_option_symbol(
            "AMD",
            date(2022, 6, 28),
            "call",
            546.56,
            SymbolFormat::Polygon,
            false,
        )
        .unwrap();
        assert_eq!(symbol, "AMD220628C00546560");
    }

    #[test]
    fn test_build_polygon_with_prefix() {
        let symbol = build_option_symbol(
            "A",
            date(2022, 6, 28),
            "put",
            66.01,
            SymbolFormat::Polygon,
            true,
        )
        .unwrap();
        assert_eq!(symbol, "O:A220628P00066010");
    }

    #[test]
    fn test_build_fixtures_from_string_expiry() {
        // prefix flag is ignored outside polygon
        let cases = [
            ("X", "211205", "call", 134.0, SymbolFormat::Polygon, false, "X211205C00134000"),
            ("AA", "211205", "c", 134.4, SymbolFormat::Polygon, false, "AA211205C00134400"),
            ("AMD", "211205", "p", 14.23, SymbolFormat::Polygon, true, "O:AMD211205P00014230"),
            ("MSFT", "211205", "P", 7.345, SymbolFormat::Tradier, false, "MSFT211205P00007345"),
            ("PPPPPP", "211205", "put", 134.345, SymbolFormat::Polygon, false, "PPPPPP211205P00134345"),
            ("NVDA", "220628", "c", 546.0, SymbolFormat::Tos, false, ".NVDA062822C546"),
            ("AA", "211205", "c", 134.4, SymbolFormat::Tda, false, "AA_120521C134.4"),
            ("AB", "220628", "p", 46.01, SymbolFormat::TradeStation, true, "AB 220628P46.01"),
            ("AB", "220628", "p", 46.045, SymbolFormat::Ibkr, false, "AB 220628P00046045"),
        ];
        for (underlying, expiry, right, strike, format, prefix, expected) in cases {
            let symbol =
                build_option_symbol(underlying, expiry, right, strike, format, prefix).unwrap();
            assert_eq!(symbol, expected, "format {format}");
        }
    }

    #[test]
    fn test_build_lowercase_underlying() {
        let symbol = build_option_symbol(
            "wpggq",
            "211205",
            "CALL",
            134.0,
            SymbolFormat::Polygon,
            false,
        )
        .unwrap();
        assert_eq!(symbol, "WPGGQ211205C00134000");
    }

    #[test]
    fn test_build_rejects_invalid_input() {
        let date = date(2022, 6, 28);
        assert!(matches!(
            build_option_symbol("AM1D", date, "call", 10.0, SymbolFormat::Polygon, false),
            Err(SymbolError::InvalidInput(_))
        ));
        assert!(matches!(
            build_option_symbol("AMD", date, "x", 10.0, SymbolFormat::Polygon, false),
            Err(SymbolError::InvalidInput(_))
        ));
        assert!(matches!(
            build_option_symbol("AMD", date, "call", -10.0, SymbolFormat::Polygon, false),
            Err(SymbolError::InvalidInput(_))
        ));
        assert!(matches!(
            build_option_symbol("AMD", "2206", "call", 10.0, SymbolFormat::Polygon, false),
            Err(SymbolError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = build_option_symbol("TSLA", "211015", 'p', 125.0, SymbolFormat::Ibkr, false);
        let b = build_option_symbol("TSLA", "211015", 'p', 125.0, SymbolFormat::Ibkr, false);
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn test_ensure_prefix() {
        assert_eq!(
            ensure_prefix("A220628P00066010").unwrap(),
            "O:A220628P00066010"
        );
        assert_eq!(
            ensure_prefix("o:a220628p00066010").unwrap(),
            "O:A220628P00066010"
        );
        assert_eq!(
            ensure_prefix("O:A220628P00066010").unwrap(),
            "O:A220628P00066010"
        );
        assert!(ensure_prefix("A22P0006").is_err());
    }
}
