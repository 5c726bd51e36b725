//! File-level types of the DESFire data model.
//!
//! These mirror what the protocol layer reports for a file: its settings
//! (type, communication mode, access rights and type-specific limits), its
//! raw content, and the physical UID of the card that carried it.

use mensa_core::{
    Amount, Error, Result,
    constants::MAX_IDENTIFIER_LENGTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// DESFire file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileType {
    /// Plain data file.
    Standard,

    /// Data file with transactional backup.
    Backup,

    /// Unsigned 32-bit purse value with limits.
    Value,

    /// Linear record file.
    LinearRecord,

    /// Cyclic record file.
    CyclicRecord,
}

impl FileType {
    /// Get a human-readable name for the file type.
    pub fn name(&self) -> &str {
        match self {
            Self::Standard => "Standard",
            Self::Backup => "Backup",
            Self::Value => "Value",
            Self::LinearRecord => "Linear Record",
            Self::CyclicRecord => "Cyclic Record",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Communication mode the file is read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CommunicationSettings {
    /// Plain communication.
    #[default]
    Plain,

    /// Plain data secured by a MAC.
    Mac,

    /// Fully enciphered.
    Enciphered,
}

/// Limits of a Value file.
///
/// All amounts use the same fixed-point encoding as the file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValueSettings {
    /// Lower limit of the purse.
    pub lo_limit: Amount,

    /// Upper limit of the purse.
    pub hi_limit: Amount,

    /// Amount available to `LimitedCredit`.
    pub limited_credit_value: Amount,

    /// Whether `LimitedCredit` is allowed.
    pub limited_credit_enabled: bool,
}

/// Geometry of a record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordSettings {
    /// Size of a single record in bytes.
    pub size: u32,

    /// Maximum number of records.
    pub max: u32,

    /// Number of records currently written.
    pub cur: u32,
}

/// Type-specific part of the file settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileKind {
    Standard { size: u32 },
    Backup { size: u32 },
    Value(ValueSettings),
    LinearRecord(RecordSettings),
    CyclicRecord(RecordSettings),
}

impl FileKind {
    /// The file type this payload belongs to.
    pub fn file_type(&self) -> FileType {
        match self {
            Self::Standard { .. } => FileType::Standard,
            Self::Backup { .. } => FileType::Backup,
            Self::Value(_) => FileType::Value,
            Self::LinearRecord(_) => FileType::LinearRecord,
            Self::CyclicRecord(_) => FileType::CyclicRecord,
        }
    }
}

/// Settings of a single file as reported by `GetFileSettings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Communication mode.
    #[serde(default)]
    pub communication_settings: CommunicationSettings,

    /// Packed access rights (read, write, read/write, change keys).
    #[serde(default)]
    pub access_rights: u16,

    /// Type and type-specific settings.
    pub kind: FileKind,
}

impl FileSettings {
    /// Create settings with plain communication and free access.
    pub fn new(kind: FileKind) -> Self {
        Self {
            communication_settings: CommunicationSettings::Plain,
            access_rights: 0xEEEE,
            kind,
        }
    }

    /// Settings for a Value file.
    pub fn value(settings: ValueSettings) -> Self {
        Self::new(FileKind::Value(settings))
    }

    /// Settings for a Standard file of `size` bytes.
    pub fn standard(size: u32) -> Self {
        Self::new(FileKind::Standard { size })
    }

    /// Set the communication mode.
    pub fn with_communication_settings(mut self, settings: CommunicationSettings) -> Self {
        self.communication_settings = settings;
        self
    }

    /// Set the packed access rights.
    pub fn with_access_rights(mut self, access_rights: u16) -> Self {
        self.access_rights = access_rights;
        self
    }

    /// The file type.
    pub fn file_type(&self) -> FileType {
        self.kind.file_type()
    }

    /// Value limits, if this is a Value file.
    pub fn value_settings(&self) -> Option<&ValueSettings> {
        match &self.kind {
            FileKind::Value(settings) => Some(settings),
            _ => None,
        }
    }
}

/// Raw content of a file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileData(Vec<u8>);

impl FileData {
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for FileData {
    fn from(data: Vec<u8>) -> Self {
        Self(data)
    }
}

/// Physical UID of the card as reported by the ISO 14443-3A layer.
///
/// Bytes are kept in little-endian significance order: byte `i` weighs
/// `256^i` when the UID is turned into a card number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct PhysicalIdentifier(Vec<u8>);

impl PhysicalIdentifier {
    /// Create an identifier from raw UID bytes.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIdentifierLength` if more than 8 bytes are given.
    ///
    /// # Examples
    ///
    /// ```
    /// use mensa_desfire::PhysicalIdentifier;
    ///
    /// let uid = PhysicalIdentifier::new(vec![0x01, 0x02]).unwrap();
    /// assert_eq!(uid.len(), 2);
    /// assert!(PhysicalIdentifier::new(vec![0; 10]).is_err());
    /// ```
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() > MAX_IDENTIFIER_LENGTH {
            return Err(Error::InvalidIdentifierLength {
                max: MAX_IDENTIFIER_LENGTH,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Declared length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the UID as a hexadecimal string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02X}", b)).collect()
    }
}

impl TryFrom<Vec<u8>> for PhysicalIdentifier {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::new(bytes)
    }
}

impl From<PhysicalIdentifier> for Vec<u8> {
    fn from(uid: PhysicalIdentifier) -> Self {
        uid.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FileKind::Standard { size: 32 }, FileType::Standard)]
    #[case(FileKind::Backup { size: 32 }, FileType::Backup)]
    #[case(FileKind::Value(ValueSettings::default()), FileType::Value)]
    #[case(FileKind::LinearRecord(RecordSettings::default()), FileType::LinearRecord)]
    #[case(FileKind::CyclicRecord(RecordSettings::default()), FileType::CyclicRecord)]
    fn test_file_kind_type(#[case] kind: FileKind, #[case] expected: FileType) {
        assert_eq!(FileSettings::new(kind).file_type(), expected);
    }

    #[test]
    fn test_value_settings_only_for_value_files() {
        let limits = ValueSettings {
            hi_limit: Amount::from_raw(100_000),
            ..ValueSettings::default()
        };
        assert_eq!(FileSettings::value(limits).value_settings(), Some(&limits));
        assert_eq!(FileSettings::standard(16).value_settings(), None);
    }

    #[test]
    fn test_file_settings_builder() {
        let settings = FileSettings::standard(16)
            .with_communication_settings(CommunicationSettings::Enciphered)
            .with_access_rights(0x1234);
        assert_eq!(
            settings.communication_settings,
            CommunicationSettings::Enciphered
        );
        assert_eq!(settings.access_rights, 0x1234);
    }

    #[test]
    fn test_file_type_display() {
        assert_eq!(FileType::Value.to_string(), "Value");
        assert_eq!(FileType::CyclicRecord.to_string(), "Cyclic Record");
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    #[case(7)]
    #[case(8)]
    fn test_identifier_valid_lengths(#[case] len: usize) {
        let uid = PhysicalIdentifier::new(vec![0xAB; len]).unwrap();
        assert_eq!(uid.len(), len);
    }

    #[rstest]
    #[case(9)]
    #[case(10)]
    fn test_identifier_too_long(#[case] len: usize) {
        let result = PhysicalIdentifier::new(vec![0xAB; len]);
        assert!(matches!(
            result,
            Err(Error::InvalidIdentifierLength { max: 8, actual }) if actual == len
        ));
    }

    #[test]
    fn test_identifier_hex() {
        let uid = PhysicalIdentifier::new(vec![0x04, 0xAB, 0xCD, 0xEF]).unwrap();
        assert_eq!(uid.to_hex(), "04ABCDEF");
    }

    #[test]
    fn test_identifier_deserialize_rejects_long_uid() {
        let result: std::result::Result<PhysicalIdentifier, _> =
            serde_json::from_str("[1,2,3,4,5,6,7,8,9,10]");
        assert!(result.is_err());

        let uid: PhysicalIdentifier = serde_json::from_str("[1,2]").unwrap();
        assert_eq!(uid.as_bytes(), &[1, 2]);
    }

    #[test]
    fn test_file_settings_json_shape() {
        let settings = FileSettings::value(ValueSettings {
            lo_limit: Amount::from_raw(0),
            hi_limit: Amount::from_raw(150_000),
            limited_credit_value: Amount::from_raw(2_500),
            limited_credit_enabled: true,
        });
        let json = serde_json::to_value(settings).unwrap();
        assert_eq!(json["kind"]["type"], "value");
        assert_eq!(json["kind"]["hi_limit"], 150_000);
        assert_eq!(json["kind"]["limited_credit_value"], 2_500);
    }
}
