//! Parser for Mensa payment cards used by many German universities.
//!
//! The balance lives in Value file `0x01` of application `0x15845F`. The
//! Value file settings also carry a "limited credit value" which some
//! issuers use to store the last payment; when it equals the upper limit it
//! is treated as unset.

use crate::plugin::{NfcProtocol, SupportedCardParser};
use crate::report::MensaReport;
use mensa_core::constants::{
    MAX_IDENTIFIER_LENGTH, MENSA_APP_ID_BYTES, MENSA_FILE_ID, PARSER_NAME, VALUE_LENGTH,
};
use mensa_core::{Amount, ApplicationId, FileId};
use mensa_desfire::{DesfireData, FileType, ValueSettings};
use tracing::{debug, trace};

/// Application holding the Mensa purse.
pub const MENSA_APP_ID: ApplicationId = ApplicationId::new(MENSA_APP_ID_BYTES);

/// Value file holding the balance.
pub const MENSA_FILE: FileId = FileId::new(MENSA_FILE_ID);

/// Why a card was not recognized as a Mensa card.
///
/// Every variant means the same thing to the host: this is not a Mensa
/// card and nothing should be shown. The reason is kept for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NotRecognized {
    #[error("application {0} not present")]
    ApplicationMissing(ApplicationId),

    #[error("no settings for file {0}")]
    FileMissing(FileId),

    #[error("file {file_id} is a {file_type} file, expected Value")]
    WrongFileType { file_id: FileId, file_type: FileType },

    #[error("no data for file {0}")]
    DataMissing(FileId),

    #[error("file {file_id} holds {len} bytes, expected {}", VALUE_LENGTH)]
    DataTooShort { file_id: FileId, len: usize },
}

/// Decode the Mensa purse from card data.
///
/// Decoding is all or nothing: either every step succeeds and a full report
/// is returned, or the card is reported as not recognized.
///
/// # Panics
///
/// Panics if the card's UID is longer than 8 bytes. [`mensa_desfire::PhysicalIdentifier`]
/// never holds such a UID.
///
/// # Examples
///
/// ```
/// use mensa_core::{Amount, FileId};
/// use mensa_desfire::{ApplicationBuilder, DesfireDataBuilder, ValueSettings};
/// use mensa_parser::mensacard::{MENSA_APP_ID, MENSA_FILE, decode};
///
/// let card = DesfireDataBuilder::new()
///     .application(ApplicationBuilder::new(MENSA_APP_ID).value_file(
///         MENSA_FILE,
///         ValueSettings::default(),
///         Amount::from_raw(1000),
///     ))
///     .build()
///     .unwrap();
///
/// let report = decode(&card).unwrap();
/// assert_eq!(report.to_string(), "Balance: 1.00 EUR\n");
/// ```
pub fn decode(card: &DesfireData) -> Result<MensaReport, NotRecognized> {
    let app = card
        .get_application(&MENSA_APP_ID)
        .ok_or(NotRecognized::ApplicationMissing(MENSA_APP_ID))?;

    let settings = app
        .get_file_settings(MENSA_FILE)
        .ok_or(NotRecognized::FileMissing(MENSA_FILE))?;
    let limits = settings
        .value_settings()
        .ok_or(NotRecognized::WrongFileType {
            file_id: MENSA_FILE,
            file_type: settings.file_type(),
        })?;

    let data = app
        .get_file_data(MENSA_FILE)
        .ok_or(NotRecognized::DataMissing(MENSA_FILE))?;
    let balance = Amount::from_le_bytes(data.as_bytes()).ok_or(NotRecognized::DataTooShort {
        file_id: MENSA_FILE,
        len: data.len(),
    })?;

    let uid = card.uid().map(|uid| decode_identifier(uid.as_bytes()));
    let last_paid = last_paid(limits);

    trace!(
        balance = balance.raw(),
        hi_limit = limits.hi_limit.raw(),
        limited_credit_value = limits.limited_credit_value.raw(),
        "decoded mensa purse"
    );

    Ok(MensaReport {
        uid,
        balance,
        last_paid,
    })
}

/// Turn a little-endian UID into a card number.
///
/// Byte `i` contributes `byte[i] << (8 * i)`.
///
/// # Panics
///
/// Panics if `bytes` is longer than 8 bytes.
///
/// # Examples
///
/// ```
/// use mensa_parser::mensacard::decode_identifier;
///
/// assert_eq!(decode_identifier(&[0x01, 0x02]), 513);
/// assert_eq!(decode_identifier(&[]), 0);
/// ```
pub fn decode_identifier(bytes: &[u8]) -> u64 {
    assert!(
        bytes.len() <= MAX_IDENTIFIER_LENGTH,
        "UID must be at most {MAX_IDENTIFIER_LENGTH} bytes, got {}",
        bytes.len()
    );

    bytes
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, byte)| acc | (u64::from(*byte) << (8 * i)))
}

/// Last payment stored in the limited credit value.
///
/// Not every card sets it; an unset value mirrors `hi_limit`, so equal
/// values are read as "no last payment".
fn last_paid(limits: &ValueSettings) -> Option<Amount> {
    (limits.limited_credit_value != limits.hi_limit).then_some(limits.limited_credit_value)
}

/// Supported-card parser for Mensa cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct MensaCardParser;

impl SupportedCardParser for MensaCardParser {
    fn name(&self) -> &str {
        PARSER_NAME
    }

    fn protocol(&self) -> NfcProtocol {
        NfcProtocol::MfDesfire
    }

    fn parse(&self, card: &DesfireData, out: &mut String) -> bool {
        match decode(card) {
            Ok(report) => {
                report.write_to(out);
                true
            }
            Err(reason) => {
                debug!(parser = PARSER_NAME, %reason, "card not recognized");
                false
            }
        }
    }
}
