//! Read-only DESFire card data model.
//!
//! This crate holds what the DESFire protocol layer produces after a card has
//! been read: a tree of applications, each with file settings and file
//! contents, plus the physical UID of the card. Card parsers only query this
//! tree; they never mutate it.
//!
//! # Lookups
//!
//! ```
//! use mensa_core::{Amount, ApplicationId, FileId};
//! use mensa_desfire::{ApplicationBuilder, DesfireDataBuilder, FileType, ValueSettings};
//!
//! let aid = ApplicationId::new([0x5F, 0x84, 0x15]);
//! let card = DesfireDataBuilder::new()
//!     .application(
//!         ApplicationBuilder::new(aid)
//!             .value_file(FileId::new(0x01), ValueSettings::default(), Amount::from_raw(1000)),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let app = card.get_application(&aid).unwrap();
//! let settings = app.get_file_settings(FileId::new(0x01)).unwrap();
//! assert_eq!(settings.file_type(), FileType::Value);
//! ```
//!
//! # Card Dumps
//!
//! All types implement `serde` traits, so a card read elsewhere can be
//! stored as JSON and replayed through the parsers. UID length limits are
//! enforced while deserializing.

pub mod builder;
pub mod card;
pub mod types;

pub use builder::{ApplicationBuilder, DesfireDataBuilder};
pub use card::{Application, DesfireData, FileDataEntry, FileSettingsEntry};
pub use types::{
    CommunicationSettings, FileData, FileKind, FileSettings, FileType, PhysicalIdentifier,
    RecordSettings, ValueSettings,
};
