//! Option-symbol codec for multi-vendor market data symbology.
//!
//! This is a facade crate that re-exports functionality from the optsym
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use optsym_lib::prelude::*;
//!
//! let symbol = build_option_symbol(
//!     "A",
//!     "220628",
//!     "put",
//!     66.01,
//!     SymbolFormat::Polygon,
//!     true,
//! )?;
//! assert_eq!(symbol, "O:A220628P00066010");
//!
//! let contract = parse_option_symbol(&symbol, SymbolFormat::Polygon)?;
//! assert_eq!(contract.canonical_symbol(), "A220628P00066010");
//!
//! let detection = detect_option_symbol_format("AB 220628P46.01")?;
//! assert_eq!(detection.unique(), Some(SymbolFormat::TradeStation));
//! # Ok::<(), SymbolError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/optsym/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use optsym_types::*;

// Re-export the codec
pub use optsym_codec::{
    Detection, OptionContract, build_option_symbol, convert_option_symbol_format,
    descriptor, detect_option_symbol_format, ensure_prefix, parse_option_symbol,
    render_option_symbol,
};

// Re-export the grammar table for read-only inspection
pub use optsym_codec::{DateOrder, FormatDescriptor, StrikeEncoding};

/// Commonly used optsym names.
///
/// ```
/// use optsym_lib::prelude::*;
/// ```
pub mod prelude {
    pub use optsym_types::{
        IntoExpiry, IntoRight, Result, Right, Strike, SymbolError, SymbolFormat,
    };

    pub use optsym_codec::{
        Detection, OptionContract, build_option_symbol, convert_option_symbol_format,
        detect_option_symbol_format, ensure_prefix, parse_option_symbol, render_option_symbol,
    };
}
