//! Course records and the registry that holds them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::registry::{IdentityStore, Record};

pub const DEFAULT_MAX_COURSES: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: String,
    pub name: String,
    pub credit: f64,
    pub teacher: String,
    pub schedule: String,
}

impl Record for Course {
    fn id(&self) -> &str {
        &self.course_id
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({:.1} credits, {}, {})",
            self.course_id, self.name, self.credit, self.teacher, self.schedule
        )
    }
}

/// Teaching load and credit totals of a [`CourseRegistry`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummary {
    pub total: usize,
    pub by_teacher: BTreeMap<String, usize>,
    /// `None` when no course is registered.
    pub average_credit: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct CourseRegistry(IdentityStore<Course>);

impl CourseRegistry {
    pub fn new(capacity: usize) -> Self {
        Self(IdentityStore::new(capacity))
    }

    pub fn by_teacher(&self, teacher: &str) -> Vec<&Course> {
        self.filter(|c| c.teacher == teacher)
    }

    pub fn summary(&self) -> CourseSummary {
        let mut by_teacher = BTreeMap::new();
        let mut total_credit = 0.0;

        for course in self.list() {
            *by_teacher.entry(course.teacher.clone()).or_insert(0) += 1;
            total_credit += course.credit;
        }

        let average_credit = (!self.is_empty()).then(|| total_credit / self.len() as f64);

        CourseSummary {
            total: self.len(),
            by_teacher,
            average_credit,
        }
    }
}

impl Default for CourseRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COURSES)
    }
}

impl Deref for CourseRegistry {
    type Target = IdentityStore<Course>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CourseRegistry {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, credit: f64, teacher: &str) -> Course {
        Course {
            course_id: id.to_string(),
            name: format!("Course {id}"),
            credit,
            teacher: teacher.to_string(),
            schedule: "Mon 08:00".to_string(),
        }
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(CourseRegistry::default().capacity(), 200);
    }

    #[test]
    fn test_by_teacher() {
        let mut registry = CourseRegistry::default();
        registry.add(course("C1", 3.0, "Wang")).unwrap();
        registry.add(course("C2", 2.0, "Li")).unwrap();
        registry.add(course("C3", 4.0, "Wang")).unwrap();

        let ids: Vec<_> = registry
            .by_teacher("Wang")
            .into_iter()
            .map(|c| c.course_id.as_str())
            .collect();
        assert_eq!(ids, vec!["C1", "C3"]);
    }

    #[test]
    fn test_summary() {
        let mut registry = CourseRegistry::default();
        registry.add(course("C1", 3.0, "Wang")).unwrap();
        registry.add(course("C2", 2.0, "Li")).unwrap();
        registry.add(course("C3", 4.0, "Wang")).unwrap();

        let summary = registry.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_teacher["Wang"], 2);
        assert_eq!(summary.average_credit, Some(3.0));
    }

    #[test]
    fn test_summary_empty_has_no_average() {
        let summary = CourseRegistry::default().summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_credit, None);
    }
}
