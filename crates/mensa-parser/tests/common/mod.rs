//! Common fixtures for the Mensa parser integration tests.
//!
//! The helpers build card data the way a DESFire reader would hand it over:
//!
//! - `mensa_card` - a complete Mensa card with a chosen balance and limits
//! - `card_with_application` - any card from a prepared application
//! - `value_limits` - Value file limits with a given `hi_limit` and limited credit value

#![allow(dead_code)]

use mensa_core::{Amount, ApplicationId, FileId};
use mensa_desfire::{ApplicationBuilder, DesfireData, DesfireDataBuilder, ValueSettings};
use mensa_parser::mensacard::{MENSA_APP_ID, MENSA_FILE};

/// Upper purse limit seen on real cards (150.00 EUR).
pub const HI_LIMIT: u32 = 150_000;

/// UID `[0x01, 0x02]`, card number 513.
pub const SHORT_UID: &[u8] = &[0x01, 0x02];

/// Value file limits.
pub fn value_limits(hi_limit: u32, limited_credit_value: u32) -> ValueSettings {
    ValueSettings {
        lo_limit: Amount::from_raw(0),
        hi_limit: Amount::from_raw(hi_limit),
        limited_credit_value: Amount::from_raw(limited_credit_value),
        limited_credit_enabled: true,
    }
}

/// Mensa application with the balance file.
pub fn mensa_application(balance: u32, limits: ValueSettings) -> ApplicationBuilder {
    ApplicationBuilder::new(MENSA_APP_ID).value_file(MENSA_FILE, limits, Amount::from_raw(balance))
}

/// Complete Mensa card without a UID and without a last payment.
pub fn mensa_card(balance: u32) -> DesfireData {
    card_with_application(mensa_application(balance, value_limits(HI_LIMIT, HI_LIMIT)), None)
}

/// Card holding exactly one application.
pub fn card_with_application(application: ApplicationBuilder, uid: Option<&[u8]>) -> DesfireData {
    let mut builder = DesfireDataBuilder::new().application(application);
    if let Some(uid) = uid {
        builder = builder.uid(uid.to_vec());
    }
    builder.build().expect("fixture card data must be valid")
}

/// Some other DESFire application that shares the card.
pub fn foreign_application() -> ApplicationBuilder {
    ApplicationBuilder::new(ApplicationId::new([0x01, 0x00, 0x00])).value_file(
        FileId::new(0x01),
        value_limits(HI_LIMIT, HI_LIMIT),
        Amount::from_raw(99_999),
    )
}
