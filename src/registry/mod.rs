//! Student and course registries.
//!
//! [`IdentityStore`] is a bounded map from a unique string id to a record.
//! [`StudentRegistry`] and [`CourseRegistry`] add the attribute filters and
//! summaries used by reports. The grade ledger never consults these stores.

mod course;
mod student;

pub use course::{Course, CourseRegistry, CourseSummary, DEFAULT_MAX_COURSES};
pub use student::{DEFAULT_MAX_STUDENTS, Student, StudentRegistry, StudentSummary};

use std::collections::BTreeMap;
use tracing::debug;

use crate::error::RegistryError;

/// A record addressable by a unique string id.
pub trait Record {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct IdentityStore<T> {
    records: BTreeMap<String, T>,
    capacity: usize,
}

impl<T: Record> IdentityStore<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: BTreeMap::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Registers a new record.
    ///
    /// # Errors
    ///
    /// [`RegistryError::CapacityReached`] when the store is full,
    /// [`RegistryError::DuplicateId`] when the id is already taken.
    pub fn add(&mut self, record: T) -> Result<(), RegistryError> {
        if self.records.len() >= self.capacity {
            return Err(RegistryError::CapacityReached {
                capacity: self.capacity,
            });
        }
        if self.records.contains_key(record.id()) {
            return Err(RegistryError::DuplicateId(record.id().to_string()));
        }

        debug!(id = record.id(), "Record added");
        self.records.insert(record.id().to_string(), record);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<T, RegistryError> {
        let removed = self
            .records
            .remove(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        debug!(id, "Record removed");
        Ok(removed)
    }

    /// Replaces the record that has the same id as `record`.
    pub fn update(&mut self, record: T) -> Result<(), RegistryError> {
        let slot = self
            .records
            .get_mut(record.id())
            .ok_or_else(|| RegistryError::NotFound(record.id().to_string()))?;
        *slot = record;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// All records ordered by id.
    pub fn list(&self) -> Vec<&T> {
        self.records.values().collect()
    }

    /// Records matching `predicate`, ordered by id.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<&T> {
        self.records.values().filter(|r| predicate(*r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        id: String,
        colour: &'static str,
    }

    impl Record for Tag {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn tag(id: &str, colour: &'static str) -> Tag {
        Tag {
            id: id.to_string(),
            colour,
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut store = IdentityStore::new(4);
        store.add(tag("b", "red")).unwrap();
        store.add(tag("a", "blue")).unwrap();

        assert!(store.exists("a"));
        assert!(!store.exists("z"));
        assert_eq!(store.get("b"), Some(&tag("b", "red")));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut store = IdentityStore::new(4);
        store.add(tag("a", "red")).unwrap();

        assert_eq!(
            store.add(tag("a", "blue")),
            Err(RegistryError::DuplicateId("a".into()))
        );
        assert_eq!(store.get("a").unwrap().colour, "red");
    }

    #[test]
    fn test_capacity_enforced() {
        let mut store = IdentityStore::new(1);
        store.add(tag("a", "red")).unwrap();

        assert_eq!(
            store.add(tag("b", "red")),
            Err(RegistryError::CapacityReached { capacity: 1 })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_and_update() {
        let mut store = IdentityStore::new(4);
        store.add(tag("a", "red")).unwrap();

        store.update(tag("a", "green")).unwrap();
        assert_eq!(store.get("a").unwrap().colour, "green");
        assert_eq!(
            store.update(tag("x", "green")),
            Err(RegistryError::NotFound("x".into()))
        );

        assert_eq!(store.remove("a"), Ok(tag("a", "green")));
        assert_eq!(store.remove("a"), Err(RegistryError::NotFound("a".into())));
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_and_filter_sorted_by_id() {
        let mut store = IdentityStore::new(4);
        store.add(tag("c", "red")).unwrap();
        store.add(tag("a", "red")).unwrap();
        store.add(tag("b", "blue")).unwrap();

        let all: Vec<_> = store.list().into_iter().map(|t| t.id.as_str()).collect();
        assert_eq!(all, vec!["a", "b", "c"]);

        let red: Vec<_> = store
            .filter(|t| t.colour == "red")
            .into_iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(red, vec!["a", "c"]);
    }
}
