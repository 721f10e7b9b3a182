//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod convert;
pub(crate) mod detect;
pub(crate) mod formats;
pub(crate) mod parse;
