use serde::{Deserialize, Serialize};

use crate::utils::error::{AdvisorError, Result};

/// One record parsed from a catalog line, before referential checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub identifier: String,
    pub name: String,
    pub prerequisites: Vec<String>,
}

/// A validated course. `identifier` is the short course code ("CS101"),
/// stored case-sensitively; any normalization happens at the prompt, not
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub identifier: String,
    pub name: String,
    pub prerequisites: Vec<String>,
}

impl From<CourseRecord> for Course {
    fn from(record: CourseRecord) -> Self {
        Self {
            identifier: record.identifier,
            name: record.name,
            prerequisites: record.prerequisites,
        }
    }
}

/// The full course set from one successful load, in input order. Every
/// prerequisite of every course names some course in the same catalog;
/// the load pipeline checks this before a `Catalog` is materialized.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    // Only the load pipeline materializes catalogs; a failed load never
    // exposes a partial one.
    pub(crate) fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Exact-match lookup in input order; the first match wins.
    pub fn find(&self, identifier: &str) -> Result<&Course> {
        self.courses
            .iter()
            .find(|course| course.identifier == identifier)
            .ok_or_else(|| AdvisorError::NotFound {
                identifier: identifier.to_string(),
            })
    }

    /// Courses in ascending identifier order (lexicographic by code point).
    /// The sort is stable: equal identifiers keep their input order.
    pub fn sorted(&self) -> Vec<&Course> {
        let mut courses: Vec<&Course> = self.courses.iter().collect();
        courses.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        courses
    }
}
