pub mod engine;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{Catalog, Course, CourseRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
