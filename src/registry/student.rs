//! Student records and the registry that holds them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::registry::{IdentityStore, Record};

pub const DEFAULT_MAX_STUDENTS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub department: String,
}

impl Record for Student {
    fn id(&self) -> &str {
        &self.student_id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (age {}, {}, {})",
            self.student_id, self.name, self.age, self.gender, self.department
        )
    }
}

/// Head counts of a [`StudentRegistry`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub total: usize,
    pub by_department: BTreeMap<String, usize>,
    pub by_gender: BTreeMap<String, usize>,
}

#[derive(Debug, Clone)]
pub struct StudentRegistry(IdentityStore<Student>);

impl StudentRegistry {
    pub fn new(capacity: usize) -> Self {
        Self(IdentityStore::new(capacity))
    }

    pub fn by_department(&self, department: &str) -> Vec<&Student> {
        self.filter(|s| s.department == department)
    }

    pub fn summary(&self) -> StudentSummary {
        let mut by_department = BTreeMap::new();
        let mut by_gender = BTreeMap::new();

        for student in self.list() {
            *by_department.entry(student.department.clone()).or_insert(0) += 1;
            *by_gender.entry(student.gender.clone()).or_insert(0) += 1;
        }

        StudentSummary {
            total: self.len(),
            by_department,
            by_gender,
        }
    }
}

impl Default for StudentRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STUDENTS)
    }
}

impl Deref for StudentRegistry {
    type Target = IdentityStore<Student>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for StudentRegistry {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
