use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Card data errors
    #[error("Invalid identifier length: expected at most {max} bytes, got {actual}")]
    InvalidIdentifierLength { max: usize, actual: usize },

    #[error("Invalid application identifier: {0}")]
    InvalidApplicationId(String),

    #[error("Duplicate file {file_id} in application {application}")]
    DuplicateFile { application: String, file_id: String },

    #[error("Duplicate application: {0}")]
    DuplicateApplication(String),
}

pub type Result<T> = std::result::Result<T, Error>;
