//! Symbol format conversion.

use optsym_types::{Result, SymbolFormat};

use crate::build::render_option_symbol;
use crate::parse::parse_option_symbol;

/// Converts an option symbol from one format to another.
///
/// Pure composition of the parser and the renderer; no grammar logic of
/// its own. Inherits every parser failure on the source symbol.
///
/// # Examples
///
/// ```
/// use optsym_codec::convert_option_symbol_format;
/// use optsym_types::SymbolFormat;
///
/// let tos = convert_option_symbol_format(
///     "AMD220628C00546560",
///     SymbolFormat::Polygon,
///     SymbolFormat::Tos,
/// )?;
/// assert_eq!(tos, ".AMD062822C546.56");
/// # Ok::<(), optsym_types::SymbolError>(())
/// ```
///
/// # Errors
///
/// Returns [`optsym_types::SymbolError::MalformedSymbol`] when the source
/// symbol does not match the `from` grammar.
pub fn convert_option_symbol_format(
    symbol: &str,
    from: SymbolFormat,
    to: SymbolFormat,
) -> Result<String> {
    let contract = parse_option_symbol(symbol, from)?;
    Ok(render_option_symbol(&contract, to, false))
}
