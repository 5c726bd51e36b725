//! Balance parser for Mensa payment cards.
//!
//! Mensa cards are MIFARE DESFire cards used for canteen payments at many
//! German universities. This crate interprets card data that a DESFire
//! protocol layer has already read and produces the text shown to the user:
//!
//! ```text
//! \x1b#Mensa Card
//! 513
//! Balance: 12.35 EUR
//! Last Paid: 2.50 EUR
//! ```
//!
//! # Modules
//!
//! - [`mensacard`] - the decoder itself
//! - [`report`] - the decoded report and its text layout
//! - [`plugin`] - parser trait and registry used by hosts
//!
//! # Example
//!
//! ```
//! use mensa_core::Amount;
//! use mensa_desfire::{ApplicationBuilder, DesfireDataBuilder, ValueSettings};
//! use mensa_parser::{MensaCardParser, SupportedCardParser};
//! use mensa_parser::mensacard::{MENSA_APP_ID, MENSA_FILE};
//!
//! let card = DesfireDataBuilder::new()
//!     .uid(vec![0x01, 0x02])
//!     .application(ApplicationBuilder::new(MENSA_APP_ID).value_file(
//!         MENSA_FILE,
//!         ValueSettings::default(),
//!         Amount::from_raw(1000),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! let mut out = String::new();
//! assert!(MensaCardParser.parse(&card, &mut out));
//! assert_eq!(out, "\x1b#Mensa Card\n513\nBalance: 1.00 EUR\n");
//! ```

pub mod mensacard;
pub mod plugin;
pub mod report;

pub use mensacard::{MensaCardParser, NotRecognized, decode, decode_identifier};
pub use plugin::{NfcProtocol, ParserRegistry, SupportedCardParser};
pub use report::MensaReport;
