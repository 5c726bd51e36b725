//! # mensa
//!
//! Prints the balance of a Mensa card from a JSON dump of its DESFire data.
//!
//! - `parse <DUMP>` - run the card parsers and print the report
//! - `list`         - show the registered parsers

mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;
use mensa_parser::ParserRegistry;

use cli::{Commands, MensaCli};

fn main() -> Result<()> {
    let cli = MensaCli::parse();
    logging::init_logging(&cli.log_level, cli.log_format);

    let registry = ParserRegistry::with_defaults();
    tracing::debug!(version = mensa_core::VERSION, parsers = registry.len(), "starting mensa");

    match cli.command {
        Commands::Parse(args) => {
            let report = commands::parse(&args, &registry)?;
            print!("{report}");
        }
        Commands::List => print!("{}", commands::list(&registry)),
    }

    Ok(())
}
