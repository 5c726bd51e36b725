//! Subcommand implementations.

use crate::cli::ParseArgs;
use anyhow::{Context, Result, anyhow, bail};
use mensa_desfire::DesfireData;
use mensa_parser::ParserRegistry;
use std::path::Path;
use tracing::info;

/// Load a card dump written as JSON.
pub fn load_dump(path: &Path) -> Result<DesfireData> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read card dump {}", path.display()))?;
    let card: DesfireData = serde_json::from_str(&raw)
        .with_context(|| format!("failed to decode card dump {}", path.display()))?;

    let uid = card.uid().map(|uid| uid.to_hex()).unwrap_or_default();
    info!(
        path = %path.display(),
        applications = card.application_count(),
        %uid,
        "card dump loaded"
    );
    Ok(card)
}

/// Run the parsers over a dump and return the report text.
pub fn parse(args: &ParseArgs, registry: &ParserRegistry) -> Result<String> {
    let card = load_dump(&args.dump)?;
    let mut out = String::new();

    match &args.parser {
        Some(name) => {
            let parser = registry
                .find(name)
                .ok_or_else(|| anyhow!("unknown parser: {name}"))?;
            if !parser.parse(&card, &mut out) {
                bail!("card not recognized by parser {name}");
            }
        }
        None => {
            let name = registry
                .parse_all(&card, &mut out)
                .ok_or_else(|| anyhow!("card not recognized by any parser"))?;
            info!(parser = name, "card recognized");
        }
    }

    Ok(out)
}

/// One line per registered parser.
pub fn list(registry: &ParserRegistry) -> String {
    registry
        .iter()
        .map(|parser| format!("{}\t{}\n", parser.name(), parser.protocol()))
        .collect()
}
