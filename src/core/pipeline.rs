use std::collections::HashSet;

use crate::core::parser;
use crate::domain::model::{Catalog, Course};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{AdvisorError, Result};

/// Loads a course catalog through a `Storage` backend: whole-file extract,
/// two-pass validation, then materialization in input order.
pub struct CatalogPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CatalogPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CatalogPipeline<S, C> {
    fn extract(&self) -> Result<Vec<String>> {
        let content = self.storage.read_to_string(self.config.catalog_file())?;
        Ok(content.lines().map(str::to_owned).collect())
    }

    fn validate(&self, lines: &[String]) -> Result<()> {
        let delimiter = self.config.delimiter();

        // Pass 1: structural check per line while collecting the declared
        // identifiers and every referenced prerequisite. The name field is
        // not needed here.
        let mut declared: HashSet<String> = HashSet::new();
        let mut referenced: Vec<String> = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            let record = parser::parse_record(line, delimiter, index + 1)?;
            declared.insert(record.identifier);
            referenced.extend(record.prerequisites);
        }

        // Pass 2: referential integrity. First unmatched reference wins;
        // existence is the only check, so duplicates and self-references
        // pass through.
        for prerequisite in referenced {
            if !declared.contains(&prerequisite) {
                return Err(AdvisorError::UnknownPrerequisite {
                    identifier: prerequisite,
                });
            }
        }

        Ok(())
    }

    fn build(&self, lines: &[String]) -> Result<Catalog> {
        let delimiter = self.config.delimiter();

        let mut courses = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            let record = parser::parse_record(line, delimiter, index + 1)?;
            courses.push(Course::from(record));
        }

        Ok(Catalog::new(courses))
    }
}
