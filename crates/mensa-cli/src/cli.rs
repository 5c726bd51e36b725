//! Command-line arguments for the `mensa` binary.

use crate::logging::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Read Mensa card balances from DESFire card dumps.
#[derive(Parser, Debug)]
#[command(name = "mensa", version, propagate_version = true)]
pub struct MensaCli {
    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, global = true, env = "MENSA_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format.
    #[arg(
        long,
        global = true,
        env = "MENSA_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a JSON card dump and print the report.
    Parse(ParseArgs),
    /// List the registered card parsers.
    List,
}

#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Path to a JSON dump of the DESFire card data.
    pub dump: PathBuf,

    /// Only run the parser with this name.
    #[arg(long, short = 'p')]
    pub parser: Option<String>,
}
