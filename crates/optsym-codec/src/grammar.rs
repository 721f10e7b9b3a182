//! The grammar table: per-format lexical rules.
//!
//! This module is the single source of truth for how each vendor lays out
//! an option symbol. Every other component switches on the declared
//! descriptor fields; none of them hardcodes format-specific string layout.
//! Adding a format means adding one descriptor entry.

use chrono::{Datelike, NaiveDate};
use optsym_types::{Right, Strike, SymbolFormat};

/// Order of the three 2-digit tokens inside the 6-character expiry field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrder {
    /// `YYMMDD`.
    YearMonthDay,
    /// `MMDDYY`.
    MonthDayYear,
}

/// How a grammar encodes the strike price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrikeEncoding {
    /// Zero-padded 8-digit integer of strike x 1000.
    Fixed8,
    /// Free-form decimal text with no fixed width.
    Decimal,
}

/// Lexical rules for one symbol format.
///
/// The token order is the same everywhere: marker (if any), underlying
/// block, separator (if any), 6-digit expiry, right character, strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// The format this descriptor belongs to.
    pub format: SymbolFormat,
    /// Literal leading marker, e.g. `O:` or `.`.
    pub marker: Option<&'static str>,
    /// Whether a symbol without the marker is malformed.
    pub marker_required: bool,
    /// Literal separator between the underlying block and the expiry.
    pub separator: Option<char>,
    /// Token order inside the expiry field.
    pub date_order: DateOrder,
    /// Strike encoding.
    pub strike: StrikeEncoding,
    /// Whether a provider-injected correction number may trail the
    /// underlying block.
    pub tolerates_correction: bool,
}

const POLYGON: FormatDescriptor = FormatDescriptor {
    format: SymbolFormat::Polygon,
    marker: Some("O:"),
    marker_required: false,
    separator: None,
    date_order: DateOrder::YearMonthDay,
    strike: StrikeEncoding::Fixed8,
    tolerates_correction: true,
};

const TRADIER: FormatDescriptor = FormatDescriptor {
    format: SymbolFormat::Tradier,
    marker: None,
    marker_required: false,
    separator: None,
    date_order: DateOrder::YearMonthDay,
    strike: StrikeEncoding::Fixed8,
    tolerates_correction: true,
};

const TOS: FormatDescriptor = FormatDescriptor {
    format: SymbolFormat::Tos,
    marker: Some("."),
    marker_required: true,
    separator: None,
    date_order: DateOrder::MonthDayYear,
    strike: StrikeEncoding::Decimal,
    tolerates_correction: false,
};

const TDA: FormatDescriptor = FormatDescriptor {
    format: SymbolFormat::Tda,
    marker: None,
    marker_required: false,
    separator: Some('_'),
    date_order: DateOrder::MonthDayYear,
    strike: StrikeEncoding::Decimal,
    tolerates_correction: false,
};

const TRADE_STATION: FormatDescriptor = FormatDescriptor {
    format: SymbolFormat::TradeStation,
    marker: None,
    marker_required: false,
    separator: Some(' '),
    date_order: DateOrder::YearMonthDay,
    strike: StrikeEncoding::Decimal,
    tolerates_correction: false,
};

const IBKR: FormatDescriptor = FormatDescriptor {
    format: SymbolFormat::Ibkr,
    marker: None,
    marker_required: false,
    separator: Some(' '),
    date_order: DateOrder::YearMonthDay,
    strike: StrikeEncoding::Fixed8,
    tolerates_correction: false,
};

/// Returns the grammar descriptor for a format.
#[must_use]
pub const fn descriptor(format: SymbolFormat) -> &'static FormatDescriptor {
    match format {
        SymbolFormat::Polygon => &POLYGON,
        SymbolFormat::Tradier => &TRADIER,
        SymbolFormat::Tos => &TOS,
        SymbolFormat::Tda => &TDA,
        SymbolFormat::TradeStation => &TRADE_STATION,
        SymbolFormat::Ibkr => &IBKR,
    }
}

/// Renders the 6-character expiry field in the given token order.
pub(crate) fn render_date(date: NaiveDate, order: DateOrder) -> String {
    let yy = date.year().rem_euclid(100);
    match order {
        DateOrder::YearMonthDay => format!("{yy:02}{:02}{:02}", date.month(), date.day()),
        DateOrder::MonthDayYear => format!("{:02}{:02}{yy:02}", date.month(), date.day()),
    }
}

/// Parses a 6-digit expiry field in the given token order.
///
/// Two-digit years resolve as `2000 + YY`. Returns `None` if the field is
/// not 6 digits or does not name a real calendar date.
pub(crate) fn parse_date_token(token: &str, order: DateOrder) -> Option<NaiveDate> {
    if token.len() != 6 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (a, b, c) = (
        token[..2].parse::<u32>().ok()?,
        token[2..4].parse::<u32>().ok()?,
        token[4..6].parse::<u32>().ok()?,
    );
    let (yy, mm, dd) = match order {
        DateOrder::YearMonthDay => (a, b, c),
        DateOrder::MonthDayYear => (c, a, b),
    };
    NaiveDate::from_ymd_opt(2000 + yy as i32, mm, dd)
}

/// Assembles a symbol from its parts, consulting the descriptor for
/// marker, separator, token order and strike encoding.
///
/// `with_prefix` only matters for formats whose marker is optional; a
/// required marker is always emitted.
pub(crate) fn render_parts(
    underlying: &str,
    expiry: NaiveDate,
    right: Right,
    strike: Strike,
    format: SymbolFormat,
    with_prefix: bool,
) -> String {
    let desc = descriptor(format);
    let mut out = String::new();
    if let Some(marker) = desc.marker {
        if desc.marker_required || with_prefix {
            out.push_str(marker);
        }
    }
    out.push_str(underlying);
    if let Some(sep) = desc.separator {
        out.push(sep);
    }
    out.push_str(&render_date(expiry, desc.date_order));
    out.push(right.as_char());
    out.push_str(&match desc.strike {
        StrikeEncoding::Fixed8 => strike.fixed8(),
        StrikeEncoding::Decimal => strike.decimal(),
    });
    out
}
