pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::config::AdvisorConfig;
pub use crate::core::{engine::LoadEngine, pipeline::CatalogPipeline};
pub use crate::domain::model::{Catalog, Course};
pub use crate::utils::error::{AdvisorError, Result};
