//! Shared building blocks for the Mensa card decoder.
//!
//! Holds the error type, card layout constants and the small value types
//! (`ApplicationId`, `FileId`, `Amount`) used by the data model and the parser.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
