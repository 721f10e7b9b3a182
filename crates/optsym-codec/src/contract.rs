//! Parsed option contract.

use chrono::{Datelike, NaiveDate};
use optsym_types::{Result, Right, Strike, SymbolError, SymbolFormat};
use serde::{Deserialize, Deserializer, Serialize};

use crate::grammar;

/// The canonical, format-independent description of an option contract.
///
/// Instances are immutable after construction and owned by the caller; the
/// codec never caches or retains them. The canonical symbol is derived at
/// construction in the polygon grammar with no prefix or correction
/// artifacts and is never independently mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionContract {
    #[serde(rename = "underlying_symbol")]
    underlying: String,
    expiry: NaiveDate,
    right: Right,
    #[serde(rename = "strike_price")]
    strike: Strike,
    #[serde(rename = "canonical_symbol")]
    canonical: String,
}

impl OptionContract {
    /// Creates a contract, normalizing the underlying to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidInput`] if the underlying is empty or
    /// contains anything other than letters, or if the expiry year falls
    /// outside 2000-2099 and cannot survive the 2-digit year encoding.
    pub fn new(underlying: &str, expiry: NaiveDate, right: Right, strike: Strike) -> Result<Self> {
        if underlying.is_empty() {
            return Err(SymbolError::InvalidInput(
                "underlying symbol must not be empty".to_string(),
            ));
        }
        if !underlying.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(SymbolError::InvalidInput(format!(
                "underlying symbol '{underlying}' must contain only letters A-Z"
            )));
        }
        if !(2000..=2099).contains(&expiry.year()) {
            return Err(SymbolError::InvalidInput(format!(
                "expiry year {} cannot be carried by a 2-digit year field (2000-2099)",
                expiry.year()
            )));
        }
        let underlying = underlying.to_ascii_uppercase();
        let canonical =
            grammar::render_parts(&underlying, expiry, right, strike, SymbolFormat::Polygon, false);
        Ok(Self {
            underlying,
            expiry,
            right,
            strike,
            canonical,
        })
    }

    /// Returns the underlying ticker symbol, uppercase.
    #[must_use]
    pub fn underlying_symbol(&self) -> &str {
        &self.underlying
    }

    /// Returns the expiry date.
    #[must_use]
    pub const fn expiry(&self) -> NaiveDate {
        self.expiry
    }

    /// Returns the expiry as an ISO `YYYY-MM-DD` string.
    #[must_use]
    pub fn expiry_iso(&self) -> String {
        self.expiry.format("%Y-%m-%d").to_string()
    }

    /// Returns the contract right.
    #[must_use]
    pub const fn right(&self) -> Right {
        self.right
    }

    /// Returns the strike price.
    #[must_use]
    pub const fn strike(&self) -> Strike {
        self.strike
    }

    /// Returns the symbol re-rendered in the polygon grammar with no
    /// prefix, marker or correction artifacts.
    #[must_use]
    pub fn canonical_symbol(&self) -> &str {
        &self.canonical
    }

    /// Decomposes the contract into its fields, canonical symbol last.
    #[must_use]
    pub fn into_fields(self) -> (String, NaiveDate, Right, Strike, String) {
        (
            self.underlying,
            self.expiry,
            self.right,
            self.strike,
            self.canonical,
        )
    }
}

impl<'de> Deserialize<'de> for OptionContract {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Fields {
            underlying_symbol: String,
            expiry: NaiveDate,
            right: Right,
            strike_price: Strike,
            #[serde(default)]
            canonical_symbol: Option<String>,
        }

        let fields = Fields::deserialize(deserializer)?;
        let contract = Self::new(
            &fields.underlying_symbol,
            fields.expiry,
            fields.right,
            fields.strike_price,
        )
        .map_err(serde::de::Error::custom)?;

        // the canonical symbol is derived, never trusted from the wire
        if let Some(canonical) = fields.canonical_symbol {
            if canonical != contract.canonical {
                return Err(serde::de::Error::custom(format!(
                    "canonical_symbol '{canonical}' does not match derived '{}'",
                    contract.canonical
                )));
            }
        }
        Ok(contract)
    }
}

impl std::fmt::Display for OptionContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} @ {}",
            self.underlying, self.expiry, self.right, self.strike
        )
    }
}
