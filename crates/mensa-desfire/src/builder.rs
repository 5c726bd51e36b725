//! Builders for assembling card data.
//!
//! The protocol layer, test fixtures and card dumps all build a
//! [`DesfireData`] the same way: applications first, then files, then
//! validation of the whole tree in [`DesfireDataBuilder::build`]. Card dumps
//! run the same checks through [`DesfireData::validate`] when deserialized.

use crate::card::{Application, DesfireData, FileDataEntry, FileSettingsEntry};
use crate::types::{FileData, FileSettings, PhysicalIdentifier, ValueSettings};
use mensa_core::{Amount, ApplicationId, FileId, Result};

/// Builder for a single [`Application`].
///
/// # Examples
///
/// ```
/// use mensa_core::{Amount, ApplicationId, FileId};
/// use mensa_desfire::{ApplicationBuilder, ValueSettings};
///
/// let app = ApplicationBuilder::new(ApplicationId::new([0x5F, 0x84, 0x15]))
///     .value_file(FileId::new(0x01), ValueSettings::default(), Amount::from_raw(1000))
///     .build()
///     .unwrap();
///
/// assert!(app.get_file_data(FileId::new(0x01)).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ApplicationBuilder {
    id: ApplicationId,
    file_settings: Vec<FileSettingsEntry>,
    file_data: Vec<FileDataEntry>,
}

impl ApplicationBuilder {
    pub fn new(id: ApplicationId) -> Self {
        Self {
            id,
            file_settings: Vec::new(),
            file_data: Vec::new(),
        }
    }

    /// Add settings for a file.
    pub fn file_settings(mut self, id: FileId, settings: FileSettings) -> Self {
        self.file_settings.push(FileSettingsEntry { id, settings });
        self
    }

    /// Add content for a file.
    pub fn file_data(mut self, id: FileId, data: impl Into<FileData>) -> Self {
        self.file_data.push(FileDataEntry {
            id,
            data: data.into(),
        });
        self
    }

    /// Add a Value file holding `value`.
    pub fn value_file(self, id: FileId, limits: ValueSettings, value: Amount) -> Self {
        self.file_settings(id, FileSettings::value(limits))
            .file_data(id, value.raw().to_le_bytes().to_vec())
    }

    /// Build the application.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateFile` if a file ID appears twice in the
    /// settings or twice in the data.
    pub fn build(self) -> Result<Application> {
        let app = Application {
            id: self.id,
            file_settings: self.file_settings,
            file_data: self.file_data,
        };
        app.validate()?;
        Ok(app)
    }
}

/// Builder for [`DesfireData`].
///
/// # Examples
///
/// ```
/// use mensa_core::ApplicationId;
/// use mensa_desfire::{ApplicationBuilder, DesfireDataBuilder};
///
/// let card = DesfireDataBuilder::new()
///     .uid(vec![0x01, 0x02])
///     .application(ApplicationBuilder::new(ApplicationId::new([0x5F, 0x84, 0x15])))
///     .build()
///     .unwrap();
///
/// assert_eq!(card.uid().unwrap().as_bytes(), &[0x01, 0x02]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DesfireDataBuilder {
    applications: Vec<ApplicationBuilder>,
    uid: Option<Vec<u8>>,
}

impl DesfireDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the physical UID bytes.
    pub fn uid(mut self, uid: Vec<u8>) -> Self {
        self.uid = Some(uid);
        self
    }

    /// Add an application.
    pub fn application(mut self, application: ApplicationBuilder) -> Self {
        self.applications.push(application);
        self
    }

    /// Build the card data with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the UID is longer than 8 bytes
    /// - an application ID appears twice
    /// - any application fails [`ApplicationBuilder::build`]
    pub fn build(self) -> Result<DesfireData> {
        let uid = self.uid.map(PhysicalIdentifier::new).transpose()?;
        let applications = self
            .applications
            .into_iter()
            .map(ApplicationBuilder::build)
            .collect::<Result<Vec<_>>>()?;

        let card = DesfireData::new(applications, uid);
        card.validate()?;
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensa_core::Error;

    const AID: ApplicationId = ApplicationId::new([0x5F, 0x84, 0x15]);

    #[test]
    fn test_value_file_stores_little_endian() {
        let app = ApplicationBuilder::new(AID)
            .value_file(FileId::new(0x01), ValueSettings::default(), Amount::from_raw(12345))
            .build()
            .unwrap();

        assert_eq!(
            app.get_file_data(FileId::new(0x01)).unwrap().as_bytes(),
            &[0x39, 0x30, 0x00, 0x00]
        );
    }

    #[test]
    fn test_duplicate_file_rejected() {
        let result = ApplicationBuilder::new(AID)
            .file_settings(FileId::new(0x01), FileSettings::standard(4))
            .file_settings(FileId::new(0x01), FileSettings::standard(8))
            .build();
        assert!(matches!(result, Err(Error::DuplicateFile { .. })));
    }

    #[test]
    fn test_settings_without_data_allowed() {
        let app = ApplicationBuilder::new(AID)
            .file_settings(FileId::new(0x01), FileSettings::standard(4))
            .build()
            .unwrap();
        assert!(app.get_file_data(FileId::new(0x01)).is_none());
    }

    #[test]
    fn test_duplicate_application_rejected() {
        let result = DesfireDataBuilder::new()
            .application(ApplicationBuilder::new(AID))
            .application(ApplicationBuilder::new(AID))
            .build();
        assert!(matches!(result, Err(Error::DuplicateApplication(_))));
    }

    #[test]
    fn test_long_uid_rejected() {
        let result = DesfireDataBuilder::new().uid(vec![0x01; 10]).build();
        assert!(matches!(
            result,
            Err(Error::InvalidIdentifierLength { max: 8, actual: 10 })
        ));
    }

    #[test]
    fn test_build_without_uid() {
        let card = DesfireDataBuilder::new()
            .application(ApplicationBuilder::new(AID))
            .build()
            .unwrap();
        assert!(card.uid().is_none());
        assert_eq!(card.application_count(), 1);
    }
}
