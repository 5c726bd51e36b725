//! Supported-card parser interface and registry.
//!
//! A host reads a card with its own NFC stack, then hands the decoded card
//! data to every registered parser until one of them recognizes it. Parsers
//! only interpret data that was already read; card detection and reading
//! stay with the host.
//!
//! ```
//! use mensa_desfire::DesfireData;
//! use mensa_parser::ParserRegistry;
//!
//! let registry = ParserRegistry::with_defaults();
//! let mut out = String::new();
//!
//! // An empty card is not a Mensa card
//! assert_eq!(registry.parse_all(&DesfireData::default(), &mut out), None);
//! assert!(out.is_empty());
//! ```

use crate::mensacard::MensaCardParser;
use mensa_desfire::DesfireData;
use std::fmt;
use tracing::{debug, trace};

/// NFC protocol a parser consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NfcProtocol {
    /// ISO 14443-3A, UID only.
    Iso14443_3a,

    /// MIFARE Classic.
    MfClassic,

    /// MIFARE Ultralight / NTAG.
    MfUltralight,

    /// MIFARE DESFire.
    MfDesfire,
}

impl NfcProtocol {
    /// Get a human-readable name for the protocol.
    pub fn name(&self) -> &str {
        match self {
            Self::Iso14443_3a => "ISO14443-3A",
            Self::MfClassic => "Mifare Classic",
            Self::MfUltralight => "Mifare Ultralight",
            Self::MfDesfire => "Mifare DESFire",
        }
    }
}

impl fmt::Display for NfcProtocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parser for one kind of card.
///
/// # Output Sink
///
/// `parse` writes into a caller-owned buffer. On success the buffer is
/// overwritten with the full report; on failure it is left untouched, so a
/// host can try several parsers with the same buffer.
pub trait SupportedCardParser: Send + Sync {
    /// Short registry name.
    fn name(&self) -> &str;

    /// Protocol whose card data this parser reads.
    fn protocol(&self) -> NfcProtocol;

    /// Whether the parser can tell the card type before a full read.
    fn supports_verify(&self) -> bool {
        false
    }

    /// Whether the parser drives the card read itself.
    fn supports_read(&self) -> bool {
        false
    }

    /// Interpret already-read card data.
    ///
    /// Returns `true` if the card was recognized and `out` now holds the report.
    fn parse(&self, card: &DesfireData, out: &mut String) -> bool;
}

/// Ordered set of parsers tried one after another.
#[derive(Default)]
pub struct ParserRegistry {
    parsers: Vec<Box<dyn SupportedCardParser>>,
}

impl ParserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in parser.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MensaCardParser);
        registry
    }

    /// Add a parser. Parsers are tried in registration order.
    pub fn register(&mut self, parser: impl SupportedCardParser + 'static) {
        debug!(parser = parser.name(), protocol = %parser.protocol(), "registering parser");
        self.parsers.push(Box::new(parser));
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Look up a parser by name.
    pub fn find(&self, name: &str) -> Option<&dyn SupportedCardParser> {
        self.parsers
            .iter()
            .find(|parser| parser.name() == name)
            .map(|parser| parser.as_ref())
    }

    /// Iterate over the registered parsers.
    pub fn iter(&self) -> impl Iterator<Item = &dyn SupportedCardParser> {
        self.parsers.iter().map(|parser| parser.as_ref())
    }

    /// Run the parsers in order and stop at the first that recognizes the card.
    ///
    /// Returns the name of that parser, or `None` if no parser recognized
    /// the card, in which case `out` is unchanged.
    pub fn parse_all(&self, card: &DesfireData, out: &mut String) -> Option<&str> {
        for parser in &self.parsers {
            trace!(parser = parser.name(), "trying parser");
            if parser.parse(card, out) {
                debug!(parser = parser.name(), "card recognized");
                return Some(parser.name());
            }
        }
        debug!(tried = self.parsers.len(), "no parser recognized the card");
        None
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list()
            .entries(self.parsers.iter().map(|parser| parser.name()))
            .finish()
    }
}
