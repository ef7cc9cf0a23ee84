#[cfg(feature = "cli")]
pub mod cli;
pub mod file_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use file_config::FileConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_DELIMITER: char = ',';

/// Effective configuration after layering command line arguments over the
/// optional TOML config file.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub catalog_file: String,
    pub delimiter: char,
    pub uppercase_lookup: bool,
}

#[cfg(feature = "cli")]
impl AdvisorConfig {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file_config = cli
            .config
            .as_deref()
            .map(FileConfig::from_file)
            .transpose()?;
        Self::merge(cli, file_config.as_ref())
    }

    fn merge(cli: &CliConfig, file: Option<&FileConfig>) -> Result<Self> {
        let catalog_file = cli
            .catalog_file
            .clone()
            .or_else(|| file.and_then(|f| f.catalog.file.clone()))
            .ok_or_else(|| crate::utils::error::AdvisorError::ConfigError {
                field: "catalog_file".to_string(),
                message: "No catalog file given on the command line or in the config file"
                    .to_string(),
            })?;

        let delimiter = match cli
            .delimiter
            .as_deref()
            .or_else(|| file.and_then(|f| f.catalog.delimiter.as_deref()))
        {
            Some(raw) => validation::validate_delimiter("delimiter", raw)?,
            None => DEFAULT_DELIMITER,
        };

        let uppercase_lookup = if cli.no_uppercase {
            false
        } else {
            file.and_then(|f| f.lookup.as_ref())
                .and_then(|l| l.uppercase_input)
                .unwrap_or(true)
        };

        Ok(Self {
            catalog_file,
            delimiter,
            uppercase_lookup,
        })
    }
}

impl ConfigProvider for AdvisorConfig {
    fn catalog_file(&self) -> &str {
        &self.catalog_file
    }

    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn uppercase_lookup(&self) -> bool {
        self.uppercase_lookup
    }
}

impl Validate for AdvisorConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("catalog_file", &self.catalog_file)?;
        Ok(())
    }
}
