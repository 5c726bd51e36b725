//! Application tree of a DESFire card and its lookup operations.

use crate::types::{FileData, FileSettings, PhysicalIdentifier};
use mensa_core::{ApplicationId, Error, FileId, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// A file entry: identifier plus settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettingsEntry {
    pub id: FileId,
    pub settings: FileSettings,
}

/// A file entry: identifier plus content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDataEntry {
    pub id: FileId,
    pub data: FileData,
}

/// One DESFire application with its files.
///
/// Settings and data are kept in separate lists because a reader may be
/// allowed to query the settings of a file without being allowed to read it.
///
/// Deserialization runs [`Application::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ApplicationRecord")]
pub struct Application {
    pub id: ApplicationId,
    pub file_settings: Vec<FileSettingsEntry>,
    pub file_data: Vec<FileDataEntry>,
}

/// Unvalidated form of [`Application`] as it appears in a dump.
#[derive(Deserialize)]
struct ApplicationRecord {
    id: ApplicationId,

    #[serde(default)]
    file_settings: Vec<FileSettingsEntry>,

    #[serde(default)]
    file_data: Vec<FileDataEntry>,
}

impl TryFrom<ApplicationRecord> for Application {
    type Error = Error;

    fn try_from(record: ApplicationRecord) -> Result<Self> {
        let app = Self {
            id: record.id,
            file_settings: record.file_settings,
            file_data: record.file_data,
        };
        app.validate()?;
        Ok(app)
    }
}

impl Application {
    /// Create an empty application.
    pub fn new(id: ApplicationId) -> Self {
        Self {
            id,
            file_settings: Vec::new(),
            file_data: Vec::new(),
        }
    }

    /// Look up the settings of a file.
    pub fn get_file_settings(&self, file_id: FileId) -> Option<&FileSettings> {
        self.file_settings
            .iter()
            .find(|entry| entry.id == file_id)
            .map(|entry| &entry.settings)
    }

    /// Look up the content of a file.
    pub fn get_file_data(&self, file_id: FileId) -> Option<&FileData> {
        self.file_data
            .iter()
            .find(|entry| entry.id == file_id)
            .map(|entry| &entry.data)
    }

    /// Check that no file ID appears twice in the settings or in the data.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateFile` naming the first repeated file.
    pub fn validate(&self) -> Result<()> {
        let settings = self.file_settings.iter().map(|entry| entry.id);
        let data = self.file_data.iter().map(|entry| entry.id);
        if let Some(file_id) = first_duplicate(settings).or_else(|| first_duplicate(data)) {
            return Err(Error::DuplicateFile {
                application: self.id.to_string(),
                file_id: file_id.to_string(),
            });
        }
        Ok(())
    }
}

fn first_duplicate<T: Copy + Eq + Hash>(mut ids: impl Iterator<Item = T>) -> Option<T> {
    let mut seen = HashSet::new();
    ids.find(|id| !seen.insert(*id))
}

/// Everything the protocol layer read from one card.
///
/// # Examples
///
/// ```
/// use mensa_core::ApplicationId;
/// use mensa_desfire::{Application, DesfireData};
///
/// let aid = ApplicationId::new([0x5F, 0x84, 0x15]);
/// let card = DesfireData::new(vec![Application::new(aid)], None);
///
/// assert!(card.get_application(&aid).is_some());
/// assert!(card.uid().is_none());
/// ```
///
/// Deserialization runs [`DesfireData::validate`], so a dump that repeats an
/// application or a file is rejected:
///
/// ```
/// use mensa_desfire::DesfireData;
///
/// let dump = r#"{ "applications": [{ "id": [95, 132, 21] }, { "id": [95, 132, 21] }] }"#;
/// assert!(serde_json::from_str::<DesfireData>(dump).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DesfireDataRecord")]
pub struct DesfireData {
    pub applications: Vec<Application>,

    /// UID from the ISO 14443-3A layer, when the reader exposed it.
    pub uid: Option<PhysicalIdentifier>,
}

/// Unvalidated form of [`DesfireData`] as it appears in a dump.
#[derive(Deserialize)]
struct DesfireDataRecord {
    #[serde(default)]
    applications: Vec<Application>,

    #[serde(default)]
    uid: Option<PhysicalIdentifier>,
}

impl TryFrom<DesfireDataRecord> for DesfireData {
    type Error = Error;

    fn try_from(record: DesfireDataRecord) -> Result<Self> {
        let card = Self::new(record.applications, record.uid);
        card.validate()?;
        Ok(card)
    }
}

impl DesfireData {
    pub fn new(applications: Vec<Application>, uid: Option<PhysicalIdentifier>) -> Self {
        Self { applications, uid }
    }

    /// Look up an application by AID.
    pub fn get_application(&self, id: &ApplicationId) -> Option<&Application> {
        self.applications.iter().find(|app| &app.id == id)
    }

    /// Physical UID of the card, if available.
    pub fn uid(&self) -> Option<&PhysicalIdentifier> {
        self.uid.as_ref()
    }

    /// Number of applications on the card.
    pub fn application_count(&self) -> usize {
        self.applications.len()
    }

    /// Check the whole tree: application IDs are unique and every
    /// application passes [`Application::validate`].
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateApplication` or `Error::DuplicateFile`.
    pub fn validate(&self) -> Result<()> {
        if let Some(id) = first_duplicate(self.applications.iter().map(|app| app.id)) {
            return Err(Error::DuplicateApplication(id.to_string()));
        }
        self.applications.iter().try_for_each(Application::validate)
    }
}
