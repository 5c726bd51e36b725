//! Decoded Mensa card report and its text layout.
//!
//! The host display renders the report verbatim, so the layout is fixed:
//!
//! ```text
//! \x1b#Mensa Card           header, only with a UID
//! 513                       UID as unsigned decimal, only with a UID
//! Balance: 1.00 EUR
//! Last Paid: 2.50 EUR       only when a last paid amount was detected
//! ```
//!
//! Every line ends with `\n`.

use mensa_core::Amount;
use mensa_core::constants::{CARD_TITLE, CURRENCY, SECTION_HEADER_MARKER};
use serde::Serialize;
use std::fmt;

/// Result of a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MensaReport {
    /// Card number derived from the physical UID.
    pub uid: Option<u64>,

    /// Current purse balance.
    pub balance: Amount,

    /// Amount of the last payment, when the card carries one.
    pub last_paid: Option<Amount>,
}

impl MensaReport {
    /// Replace the contents of `out` with the rendered report.
    ///
    /// # Examples
    ///
    /// ```
    /// use mensa_core::Amount;
    /// use mensa_parser::MensaReport;
    ///
    /// let report = MensaReport {
    ///     uid: None,
    ///     balance: Amount::from_raw(1000),
    ///     last_paid: None,
    /// };
    ///
    /// let mut out = String::from("stale");
    /// report.write_to(&mut out);
    /// assert_eq!(out, "Balance: 1.00 EUR\n");
    /// ```
    pub fn write_to(&self, out: &mut String) {
        out.clear();
        out.push_str(&self.to_string());
    }
}

impl fmt::Display for MensaReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(uid) = self.uid {
            writeln!(f, "{SECTION_HEADER_MARKER}{CARD_TITLE}")?;
            writeln!(f, "{uid}")?;
        }
        writeln!(f, "Balance: {} {CURRENCY}", self.balance)?;
        if let Some(last_paid) = self.last_paid {
            writeln!(f, "Last Paid: {last_paid} {CURRENCY}")?;
        }
        Ok(())
    }
}
