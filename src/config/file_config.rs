use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::utils::error::{AdvisorError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub catalog: CatalogSection,
    pub lookup: Option<LookupSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub file: Option<String>,
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupSection {
    pub uppercase_input: Option<bool>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| AdvisorError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` with the value from the environment; unknown
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}
