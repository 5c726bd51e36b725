//! Card layout constants for the Mensa payment card.
//!
//! The Mensa card is a MIFARE DESFire card issued by the student services of
//! many German universities. The purse lives in a single Value file inside a
//! fixed application:
//!
//! ```text
//! PICC
//!  └── Application 0x15845F   (transmitted as 5F 84 15)
//!       └── File 0x01         (Value file, balance in thousandths of EUR)
//! ```
//!
//! # Usage
//!
//! ```
//! use mensa_core::constants::*;
//!
//! assert_eq!(MENSA_APP_ID_BYTES, [0x5F, 0x84, 0x15]);
//! assert_eq!(MENSA_FILE_ID, 0x01);
//! assert_eq!(AMOUNT_SCALE, 1000);
//! ```

// ============================================================================
// Card Layout
// ============================================================================

/// Application identifier of the Mensa purse application.
///
/// DESFire transmits AIDs least significant byte first, see
/// [`MENSA_APP_ID_BYTES`].
pub const MENSA_APP_ID: u32 = 0x15_845F;

/// [`MENSA_APP_ID`] in transmission order.
pub const MENSA_APP_ID_BYTES: [u8; APPLICATION_ID_LENGTH] = [0x5F, 0x84, 0x15];

/// File holding the balance inside the Mensa application.
pub const MENSA_FILE_ID: u8 = 0x01;

/// DESFire application identifiers are always 3 bytes long.
pub const APPLICATION_ID_LENGTH: usize = 3;

// ============================================================================
// Value Encoding
// ============================================================================

/// Size of a DESFire Value file payload in bytes (little-endian `u32`).
pub const VALUE_LENGTH: usize = 4;

/// Raw values count thousandths of a currency unit.
///
/// # Examples
///
/// ```
/// use mensa_core::constants::AMOUNT_SCALE;
///
/// let raw: u32 = 12345;
/// assert_eq!(raw as f64 / AMOUNT_SCALE as f64, 12.345);
/// ```
pub const AMOUNT_SCALE: u32 = 1000;

/// Currency suffix used in reports.
pub const CURRENCY: &str = "EUR";

// ============================================================================
// Physical Identifier
// ============================================================================

/// Largest UID that still fits a `u64` when decoded.
///
/// ISO 14443-3A allows 10 byte UIDs, but the decimal card number printed in
/// the report is built from at most 8 bytes.
pub const MAX_IDENTIFIER_LENGTH: usize = 8;

// ============================================================================
// Report Layout
// ============================================================================

/// Section header marker understood by the host display (`ESC #`).
///
/// A line starting with this marker is rendered as a bold header.
pub const SECTION_HEADER_MARKER: &str = "\x1b#";

/// Title printed in the report header.
pub const CARD_TITLE: &str = "Mensa Card";

/// Registry name of the Mensa parser.
pub const PARSER_NAME: &str = "mensacard";
