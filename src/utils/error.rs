use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File formatting error: missing parameters (line {line})")]
    MalformedRecord { line: usize },

    #[error("{identifier} does not exist in course list")]
    UnknownPrerequisite { identifier: String },

    #[error("Course not found: {identifier}")]
    NotFound { identifier: String },

    #[error("Configuration error: {field}: {message}")]
    ConfigError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
