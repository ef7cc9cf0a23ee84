use std::fs;
use std::path::Path;

use clap::Parser;

use crate::domain::ports::Storage;
use crate::utils::error::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "course-advisor")]
#[command(about = "Academic advising tool: load, validate, and browse a course catalog")]
pub struct CliConfig {
    /// Path to the course catalog file
    pub catalog_file: Option<String>,

    /// Field delimiter (single character)
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<String>,

    /// Do not uppercase course numbers entered at the lookup prompt
    #[arg(long)]
    pub no_uppercase: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Log memory and timing for each load stage
    #[arg(long)]
    pub monitor: bool,
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &str) -> Result<String> {
        // Path::join replaces the base when `path` is absolute, so both
        // relative and absolute catalog paths work.
        let full_path = Path::new(&self.base_path).join(path);
        let content = fs::read_to_string(full_path)?;
        Ok(content)
    }
}
