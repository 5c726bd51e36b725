use crate::{
    Result,
    constants::{AMOUNT_SCALE, APPLICATION_ID_LENGTH, VALUE_LENGTH},
    error::Error,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// DESFire application identifier (3 bytes, transmission order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId([u8; APPLICATION_ID_LENGTH]);

impl ApplicationId {
    /// Create an application ID from bytes in transmission order.
    #[must_use]
    pub const fn new(bytes: [u8; APPLICATION_ID_LENGTH]) -> Self {
        ApplicationId(bytes)
    }

    /// Create an application ID from its numeric value.
    ///
    /// # Errors
    /// Returns `Error::InvalidApplicationId` if the value does not fit in 24 bits.
    pub fn from_u32(value: u32) -> Result<Self> {
        if value > 0x00FF_FFFF {
            return Err(Error::InvalidApplicationId(format!(
                "AID must fit in 24 bits, got {value:#X}"
            )));
        }
        let [b0, b1, b2, _] = value.to_le_bytes();
        Ok(ApplicationId([b0, b1, b2]))
    }

    /// Get the numeric value of the AID.
    #[must_use]
    pub fn as_u32(&self) -> u32 {
        let [b0, b1, b2] = self.0;
        u32::from_le_bytes([b0, b1, b2, 0])
    }

    /// Get the raw bytes in transmission order.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; APPLICATION_ID_LENGTH] {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:06X}", self.as_u32())
    }
}

/// DESFire file identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(u8);

impl FileId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        FileId(id)
    }

    #[must_use]
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

/// Fixed-point currency amount counted in thousandths of a unit.
///
/// The card stores `12.345 EUR` as the raw value `12345`. Formatting rounds
/// half up to two decimals on the raw value, so no floating point is involved
/// in what ends up on screen.
///
/// # Examples
///
/// ```
/// use mensa_core::Amount;
///
/// let amount = Amount::from_le_bytes(&[0x39, 0x30, 0x00, 0x00]).unwrap();
/// assert_eq!(amount.raw(), 12345);
/// assert_eq!(amount.to_string(), "12.35");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u32);

impl Amount {
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Amount(raw)
    }

    /// Decode a little-endian value from the first 4 bytes of `bytes`.
    ///
    /// Returns `None` when fewer than 4 bytes are available.
    #[must_use]
    pub fn from_le_bytes(bytes: &[u8]) -> Option<Self> {
        let word: [u8; VALUE_LENGTH] = bytes.get(..VALUE_LENGTH)?.try_into().ok()?;
        Some(Amount(u32::from_le_bytes(word)))
    }

    /// Raw value in thousandths.
    #[must_use]
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Value in whole currency units.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / f64::from(AMOUNT_SCALE)
    }

    /// Value in hundredths, rounded half up.
    #[must_use]
    pub fn cents(&self) -> u64 {
        (u64::from(self.0) + 5) / 10
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cents = self.cents();
        write!(f, "{}.{:02}", cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MENSA_APP_ID, MENSA_APP_ID_BYTES};
    use rstest::rstest;

    #[test]
    fn test_application_id_from_u32() {
        let aid = ApplicationId::from_u32(MENSA_APP_ID).unwrap();
        assert_eq!(aid.as_bytes(), &MENSA_APP_ID_BYTES);
        assert_eq!(aid.as_u32(), MENSA_APP_ID);
        assert_eq!(aid.to_string(), "15845F");
    }

    #[test]
    fn test_application_id_too_large() {
        assert!(ApplicationId::from_u32(0x0100_0000).is_err());
    }

    #[rstest]
    #[case(0x15_845F, [0x5F, 0x84, 0x15])]
    #[case(0x00_0001, [0x01, 0x00, 0x00])]
    #[case(0xFF_FFFF, [0xFF, 0xFF, 0xFF])]
    fn test_application_id_byte_order(#[case] value: u32, #[case] expected: [u8; 3]) {
        assert_eq!(ApplicationId::from_u32(value).unwrap(), ApplicationId::new(expected));
    }

    #[test]
    fn test_file_id_display() {
        assert_eq!(FileId::new(0x01).to_string(), "01");
        assert_eq!(FileId::new(0x1F).to_string(), "1F");
    }

    #[rstest]
    #[case(&[0xE8, 0x03, 0x00, 0x00], 1000)]
    #[case(&[0x39, 0x30, 0x00, 0x00], 12345)]
    #[case(&[0xFF, 0xFF, 0xFF, 0xFF], u32::MAX)]
    #[case(&[0x01, 0x00, 0x00, 0x00, 0xAA], 1)]
    fn test_amount_from_le_bytes(#[case] bytes: &[u8], #[case] expected: u32) {
        assert_eq!(Amount::from_le_bytes(bytes), Some(Amount::from_raw(expected)));
    }

    #[rstest]
    #[case(&[])]
    #[case(&[0x01])]
    #[case(&[0x01, 0x02, 0x03])]
    fn test_amount_from_short_buffer(#[case] bytes: &[u8]) {
        assert_eq!(Amount::from_le_bytes(bytes), None);
    }

    #[rstest]
    #[case(0, "0.00")]
    #[case(4, "0.00")]
    #[case(5, "0.01")]
    #[case(1000, "1.00")]
    #[case(12345, "12.35")]
    #[case(12344, "12.34")]
    #[case(2995, "3.00")]
    #[case(u32::MAX, "4294967.30")]
    fn test_amount_display_rounds_half_up(#[case] raw: u32, #[case] expected: &str) {
        assert_eq!(Amount::from_raw(raw).to_string(), expected);
    }

    #[test]
    fn test_amount_as_f64() {
        assert_eq!(Amount::from_raw(12345).as_f64(), 12.345);
        assert_eq!(Amount::from_raw(1000).as_f64(), 1.0);
    }

    #[test]
    fn test_amount_serializes_as_raw_value() {
        let json = serde_json::to_string(&Amount::from_raw(1000)).unwrap();
        assert_eq!(json, "1000");
    }
}
