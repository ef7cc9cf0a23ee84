use crate::domain::model::Catalog;
use crate::utils::error::Result;

pub trait Storage {
    fn read_to_string(&self, path: &str) -> Result<String>;
}

pub trait ConfigProvider {
    fn catalog_file(&self) -> &str;
    fn delimiter(&self) -> char;
    fn uppercase_lookup(&self) -> bool;
}

/// The catalog load pipeline. `validate` must pass before `build` is
/// called; `build` re-walks the same lines and materializes the catalog.
pub trait Pipeline {
    fn extract(&self) -> Result<Vec<String>>;
    fn validate(&self, lines: &[String]) -> Result<()>;
    fn build(&self, lines: &[String]) -> Result<Catalog>;
}
