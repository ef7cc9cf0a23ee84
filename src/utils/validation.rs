use crate::utils::error::{AdvisorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AdvisorError::ConfigError {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AdvisorError::ConfigError {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Record delimiters are single characters; the file format has no quoting,
/// so a multi-character separator cannot be represented.
pub fn validate_delimiter(field_name: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(delimiter), None) => Ok(delimiter),
        _ => Err(AdvisorError::ConfigError {
            field: field_name.to_string(),
            message: format!("Delimiter must be a single character, got {:?}", value),
        }),
    }
}
