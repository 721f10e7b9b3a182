//! Strike price in integer thousandths.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Result, SymbolError};

/// A non-negative strike price, carried as integer thousandths of a unit.
///
/// Thousandths are the finest granularity any supported grammar can encode,
/// so the integer carrier makes fixed-point round-trips exact. Values are
/// capped at the 8-digit fixed-point ceiling (99999.999) so every strike can
/// be re-rendered in the canonical polygon grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Strike(u64);

impl Strike {
    /// The largest encodable strike, in thousandths (99999.999).
    pub const MAX_MILLIS: u64 = 99_999_999;

    /// Creates a strike from integer thousandths.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Creates a strike from a price, rounding to the nearest thousandth.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidInput`] if the price is negative,
    /// non-finite, or above the fixed-point ceiling.
    pub fn from_price(price: f64) -> Result<Self> {
        if !price.is_finite() {
            return Err(SymbolError::InvalidInput(format!(
                "strike price must be a finite number, got {price}"
            )));
        }
        if price < 0.0 {
            return Err(SymbolError::InvalidInput(format!(
                "strike price must not be negative, got {price}"
            )));
        }
        let millis = (price * 1000.0).round() as u64;
        if millis > Self::MAX_MILLIS {
            return Err(SymbolError::InvalidInput(format!(
                "strike price {price} exceeds the maximum of 99999.999"
            )));
        }
        Ok(Self(millis))
    }

    /// Parses an 8-digit zero-padded fixed-point strike field.
    #[must_use]
    pub fn from_fixed8(s: &str) -> Option<Self> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        s.parse().ok().map(Self)
    }

    /// Parses a free-form decimal strike token (`546`, `46.01`, `7.345`).
    ///
    /// Accepts digits with at most one decimal point; fractional digits
    /// beyond the third are rounded to the nearest thousandth. Returns
    /// `None` for empty, digit-free, double-dotted, or out-of-range input.
    #[must_use]
    pub fn from_decimal_str(s: &str) -> Option<Self> {
        if s.is_empty() || !s.bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }
        if !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            return None;
        }
        let mut parts = s.splitn(2, '.');
        let int_part = parts.next().unwrap_or("");
        let frac_part = parts.next().unwrap_or("");
        if frac_part.contains('.') {
            return None;
        }

        let int: u64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().ok()?
        };

        let mut frac: u64 = 0;
        for (i, b) in frac_part.bytes().enumerate() {
            let digit = u64::from(b - b'0');
            match i {
                0..=2 => frac = frac * 10 + digit,
                3 => {
                    // round the thousandths on the fourth fractional digit
                    if digit >= 5 {
                        frac += 1;
                    }
                }
                _ => break,
            }
        }
        // scale short fractions up to thousandths
        for _ in frac_part.len()..3 {
            frac *= 10;
        }

        let millis = int.checked_mul(1000)?.checked_add(frac)?;
        (millis <= Self::MAX_MILLIS).then_some(Self(millis))
    }

    /// Returns the strike in integer thousandths.
    #[must_use]
    pub const fn millis(&self) -> u64 {
        self.0
    }

    /// Returns the strike as a price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Returns true if the strike has no fractional part.
    #[must_use]
    pub const fn is_integral(&self) -> bool {
        self.0 % 1000 == 0
    }

    /// Renders the zero-padded 8-digit fixed-point field (strike x 1000).
    #[must_use]
    pub fn fixed8(&self) -> String {
        format!("{:08}", self.0)
    }

    /// Renders the minimal decimal text: no fractional part for integral
    /// values, trailing zeros trimmed otherwise.
    #[must_use]
    pub fn decimal(&self) -> String {
        let int = self.0 / 1000;
        let frac = self.0 % 1000;
        if frac == 0 {
            int.to_string()
        } else {
            format!("{int}.{frac:03}")
                .trim_end_matches('0')
                .to_string()
        }
    }
}

impl std::fmt::Display for Strike {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.decimal())
    }
}

impl Serialize for Strike {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.price())
    }
}

impl<'de> Deserialize<'de> for Strike {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let price = f64::deserialize(deserializer)?;
        Self::from_price(price).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_price_rounds_to_thousandths() {
        assert_eq!(Strike::from_price(546.56).unwrap().millis(), 546_560);
        assert_eq!(Strike::from_price(66.01).unwrap().millis(), 66_010);
        assert_eq!(Strike::from_price(134.0).unwrap().millis(), 134_000);
        assert_eq!(Strike::from_price(15.0035).unwrap().millis(), 15_004);
    }

    #[test]
    fn test_from_price_rejects_bad_values() {
        assert!(Strike::from_price(-1.0).is_err());
        assert!(Strike::from_price(f64::NAN).is_err());
        assert!(Strike::from_price(f64::INFINITY).is_err());
        assert!(Strike::from_price(100_000.0).is_err());
        assert!(Strike::from_price(99_999.999).is_ok());
    }

    #[test]
    fn test_fixed8_round_trip() {
        let strike = Strike::from_price(546.56).unwrap();
        assert_eq!(strike.fixed8(), "00546560");
        assert_eq!(Strike::from_fixed8("00546560").unwrap(), strike);
    }

    #[test]
    fn test_from_fixed8_rejects_bad_fields() {
        assert!(Strike::from_fixed8("0054656").is_none());
        assert!(Strike::from_fixed8("005465600").is_none());
        assert!(Strike::from_fixed8("0054656O").is_none());
        assert!(Strike::from_fixed8("").is_none());
    }

    #[test]
    fn test_decimal_rendering() {
        assert_eq!(Strike::from_price(546.0).unwrap().decimal(), "546");
        assert_eq!(Strike::from_price(134.4).unwrap().decimal(), "134.4");
        assert_eq!(Strike::from_price(46.01).unwrap().decimal(), "46.01");
        assert_eq!(Strike::from_price(7.345).unwrap().decimal(), "7.345");
    }

    #[test]
    fn test_from_decimal_str() {
        assert_eq!(Strike::from_decimal_str("546").unwrap().millis(), 546_000);
        assert_eq!(Strike::from_decimal_str("46.01").unwrap().millis(), 46_010);
        assert_eq!(Strike::from_decimal_str("7.345").unwrap().millis(), 7_345);
        assert_eq!(Strike::from_decimal_str(".5").unwrap().millis(), 500);
        // fourth fractional digit rounds
        assert_eq!(Strike::from_decimal_str("1.0005").unwrap().millis(), 1_001);
        assert!(Strike::from_decimal_str("").is_none());
        assert!(Strike::from_decimal_str(".").is_none());
        assert!(Strike::from_decimal_str("4.6.0").is_none());
        assert!(Strike::from_decimal_str("46a").is_none());
        assert!(Strike::from_decimal_str("123456").is_none());
    }

    #[test]
    fn test_price() {
        assert_relative_eq!(Strike::from_millis(546_560).price(), 546.56);
        assert_relative_eq!(Strike::from_millis(500).price(), 0.5);
    }

    #[test]
    fn test_is_integral() {
        assert!(Strike::from_millis(134_000).is_integral());
        assert!(!Strike::from_millis(134_400).is_integral());
    }
}
