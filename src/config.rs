//! Registry capacities.
//!
//! Stored as a JSON object on disk, every field optional:
//! ```json
//! { "max_students": 1000, "max_courses": 200 }
//! ```
//! `GRADEBOOK_MAX_STUDENTS` and `GRADEBOOK_MAX_COURSES` override the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::registry::{CourseRegistry, DEFAULT_MAX_COURSES, DEFAULT_MAX_STUDENTS, StudentRegistry};

pub const MAX_STUDENTS_VAR: &str = "GRADEBOOK_MAX_STUDENTS";
pub const MAX_COURSES_VAR: &str = "GRADEBOOK_MAX_COURSES";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_students: usize,
    pub max_courses: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_students: DEFAULT_MAX_STUDENTS,
            max_courses: DEFAULT_MAX_COURSES,
        }
    }
}

impl Config {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Builds the effective config: `path` if given, else defaults, then env overrides.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides looked up by variable name.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(value) = lookup(MAX_STUDENTS_VAR) {
            self.max_students = value
                .trim()
                .parse()
                .with_context(|| format!("{MAX_STUDENTS_VAR} must be an integer, got {value:?}"))?;
        }
        if let Some(value) = lookup(MAX_COURSES_VAR) {
            self.max_courses = value
                .trim()
                .parse()
                .with_context(|| format!("{MAX_COURSES_VAR} must be an integer, got {value:?}"))?;
        }
        Ok(self)
    }

    pub fn student_registry(&self) -> StudentRegistry {
        StudentRegistry::new(self.max_students)
    }

    pub fn course_registry(&self) -> CourseRegistry {
        CourseRegistry::new(self.max_courses)
    }
}
