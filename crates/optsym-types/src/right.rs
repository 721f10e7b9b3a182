//! Contract right (call or put).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{Result, SymbolError};

/// Whether an option contract is a call or a put.
///
/// The codec carries the right as this closed two-value kind internally;
/// the historical string synonyms (`c`, `call`, `p`, `put`, any case) are
/// accepted at the API boundary via [`FromStr`] and [`IntoRight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Right {
    /// The right to buy the underlying at the strike price.
    #[serde(rename = "C")]
    Call,
    /// The right to sell the underlying at the strike price.
    #[serde(rename = "P")]
    Put,
}

impl Right {
    /// Returns the single-character token used in every symbol grammar.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Self::Call => 'C',
            Self::Put => 'P',
        }
    }

    /// Returns the right as a lowercase word.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
        }
    }

    /// Returns true if this is a call.
    #[must_use]
    pub const fn is_call(&self) -> bool {
        matches!(self, Self::Call)
    }

    /// Returns true if this is a put.
    #[must_use]
    pub const fn is_put(&self) -> bool {
        matches!(self, Self::Put)
    }
}

impl std::fmt::Display for Right {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Right {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "c" | "call" => Ok(Self::Call),
            "p" | "put" => Ok(Self::Put),
            _ => Err(SymbolError::InvalidInput(format!(
                "invalid right '{s}', expected one of: c, call, p, put"
            ))),
        }
    }
}

impl TryFrom<char> for Right {
    type Error = SymbolError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'C' | 'c' => Ok(Self::Call),
            'P' | 'p' => Ok(Self::Put),
            _ => Err(SymbolError::InvalidInput(format!(
                "invalid right character '{c}', expected C or P"
            ))),
        }
    }
}

/// Adapter for builder inputs that may be a [`Right`] or a historical
/// string/character synonym.
pub trait IntoRight {
    /// Resolves the input to a [`Right`].
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidInput`] if the input does not map to
    /// a call or a put.
    fn into_right(self) -> Result<Right>;
}

impl IntoRight for Right {
    fn into_right(self) -> Result<Right> {
        Ok(self)
    }
}

impl IntoRight for char {
    fn into_right(self) -> Result<Right> {
        Right::try_from(self)
    }
}

impl IntoRight for &str {
    fn into_right(self) -> Result<Right> {
        self.parse()
    }
}

impl IntoRight for String {
    fn into_right(self) -> Result<Right> {
        self.as_str().parse()
    }
}
