//! Core types for the optsym option-symbol codec.
//!
//! This crate provides the fundamental data structures used throughout optsym:
//!
//! - [`Right`] - Whether a contract is a call or a put
//! - [`Strike`] - A strike price carried in integer thousandths
//! - [`SymbolFormat`] - The closed set of supported symbol grammars
//! - [`IntoExpiry`] - Adapter for expiry inputs (dates or `YYMMDD`/ISO strings)
//! - [`SymbolError`] - The shared error type

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/optsym/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod expiry;
mod format;
mod right;
mod strike;

pub use error::{Result, SymbolError};
pub use expiry::{IntoExpiry, parse_yymmdd};
pub use format::SymbolFormat;
pub use right::{IntoRight, Right};
pub use strike::Strike;
