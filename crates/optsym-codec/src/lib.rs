//! Option-symbol codec: build, parse, detect and convert option ticker
//! symbols across the six supported vendor grammars.
//!
//! Every operation is a pure function of its inputs and the static grammar
//! table; there is no I/O, no shared mutable state and nothing to retry.
//!
//! # Quick Start
//!
//! ```
//! use optsym_codec::{build_option_symbol, parse_option_symbol};
//! use optsym_types::SymbolFormat;
//!
//! let symbol = build_option_symbol(
//!     "AMD",
//!     "220628",
//!     "call",
//!     546.56,
//!     SymbolFormat::Polygon,
//!     false,
//! )?;
//! assert_eq!(symbol, "AMD220628C00546560");
//!
//! let contract = parse_option_symbol(&symbol, SymbolFormat::Polygon)?;
//! assert_eq!(contract.underlying_symbol(), "AMD");
//! assert_eq!(contract.strike().decimal(), "546.56");
//! # Ok::<(), optsym_types::SymbolError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/optsym/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod build;
mod contract;
mod convert;
mod detect;
mod grammar;
mod parse;

pub use build::{build_option_symbol, ensure_prefix, render_option_symbol};
pub use contract::OptionContract;
pub use convert::convert_option_symbol_format;
pub use detect::{Detection, detect_option_symbol_format};
pub use grammar::{DateOrder, FormatDescriptor, StrikeEncoding, descriptor};
pub use parse::parse_option_symbol;
