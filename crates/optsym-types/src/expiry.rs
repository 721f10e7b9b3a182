//! Expiry input adapters.
//!
//! Builder callers may supply an expiry as a [`NaiveDate`] or as a string,
//! either `YYMMDD` (the wire form shared by every grammar) or ISO
//! `YYYY-MM-DD`. Two-digit years always resolve as `2000 + YY`; the domain
//! has no pre-2000 listings.

use chrono::NaiveDate;

use crate::{Result, SymbolError};

/// Parses a 6-character `YYMMDD` expiry string.
///
/// # Errors
///
/// Returns [`SymbolError::InvalidInput`] if the string is not 6 digits or
/// does not name a real calendar date.
pub fn parse_yymmdd(s: &str) -> Result<NaiveDate> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SymbolError::InvalidInput(format!(
            "expiry string '{s}' must be 6 digits in YYMMDD order"
        )));
    }
    let yy: i32 = s[..2].parse().map_err(|_| bad_date(s))?;
    let mm: u32 = s[2..4].parse().map_err(|_| bad_date(s))?;
    let dd: u32 = s[4..6].parse().map_err(|_| bad_date(s))?;
    NaiveDate::from_ymd_opt(2000 + yy, mm, dd).ok_or_else(|| bad_date(s))
}

fn bad_date(s: &str) -> SymbolError {
    SymbolError::InvalidInput(format!("expiry '{s}' is not a valid calendar date"))
}

/// Adapter for expiry inputs: a date object or a `YYMMDD`/ISO string.
pub trait IntoExpiry {
    /// Resolves the input to a calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidInput`] if a string input is neither
    /// `YYMMDD` nor ISO `YYYY-MM-DD`, or names an invalid date.
    fn into_expiry(self) -> Result<NaiveDate>;
}

impl IntoExpiry for NaiveDate {
    fn into_expiry(self) -> Result<NaiveDate> {
        Ok(self)
    }
}

impl IntoExpiry for &str {
    fn into_expiry(self) -> Result<NaiveDate> {
        if self.len() == 6 && self.bytes().all(|b| b.is_ascii_digit()) {
            return parse_yymmdd(self);
        }
        NaiveDate::parse_from_str(self, "%Y-%m-%d").map_err(|_| {
            SymbolError::InvalidInput(format!(
                "expiry '{self}' must be a YYMMDD or YYYY-MM-DD string"
            ))
        })
    }
}

impl IntoExpiry for String {
    fn into_expiry(self) -> Result<NaiveDate> {
        self.as_str().into_expiry()
    }
}
