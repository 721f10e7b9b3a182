//! optsym CLI - option-symbol build/parse/detect/convert tool.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod display;

use display::Output;

#[derive(Parser)]
#[command(name = "optsym")]
#[command(about = "Build, parse, detect and convert option ticker symbols", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an option symbol from its parts
    Build {
        /// Underlying ticker symbol (letters only, e.g. AMD)
        underlying: String,

        /// Expiry date (YYMMDD or YYYY-MM-DD)
        expiry: String,

        /// Contract right (c, call, p or put)
        right: String,

        /// Strike price (e.g. 546.56)
        strike: f64,

        /// Symbol format (polygon, tradier, tos, tda, trade_station, ibkr)
        #[arg(short, long, default_value = "polygon")]
        format: String,

        /// Emit the O: prefix (polygon only)
        #[arg(short, long)]
        prefix: bool,
    },

    /// Parse an option symbol into its parts
    Parse {
        /// The option symbol to parse
        symbol: String,

        /// Symbol format. Omit to detect from the symbol's shape
        #[arg(short, long)]
        format: Option<String>,

        /// Output shape
        #[arg(short, long, value_enum, default_value = "text")]
        output: Output,
    },

    /// Detect the format of an option symbol
    Detect {
        /// The option symbol to inspect
        symbol: String,
    },

    /// Convert an option symbol between formats
    Convert {
        /// The option symbol to convert
        symbol: String,

        /// Target format
        #[arg(short, long)]
        to: String,

        /// Source format. Omit to detect from the symbol's shape
        #[arg(short, long)]
        from: Option<String>,
    },

    /// List the supported symbol formats and their grammars
    Formats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            underlying,
            expiry,
            right,
            strike,
            format,
            prefix,
        } => commands::build::run(&underlying, &expiry, &right, strike, &format, prefix),
        Commands::Parse {
            symbol,
            format,
            output,
        } => commands::parse::run(&symbol, format.as_deref(), output),
        Commands::Detect { symbol } => commands::detect::run(&symbol),
        Commands::Convert { symbol, to, from } => {
            commands::convert::run(&symbol, from.as_deref(), &to)
        }
        Commands::Formats => commands::formats::run(),
    }
}
