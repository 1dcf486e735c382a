//! Lock-guarded ledger handle for multi-threaded callers.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::error::LedgerError;
use crate::ledger::{GradeLedger, LedgerObserver, TracingObserver};

/// Cloneable handle to one [`GradeLedger`] guarded by a single lock.
///
/// Every call holds the lock for its whole duration, so the empty-student
/// cleanup in `remove_grade` cannot interleave with a concurrent `record_grade`.
pub struct SharedLedger<O = TracingObserver> {
    inner: Arc<Mutex<GradeLedger<O>>>,
}

impl<O> Clone for SharedLedger<O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<O: LedgerObserver> SharedLedger<O> {
    pub fn new(ledger: GradeLedger<O>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn record_grade(
        &self,
        student_id: &str,
        course_id: &str,
        score: f64,
    ) -> Result<(), LedgerError> {
        self.inner.lock().record_grade(student_id, course_id, score)
    }

    pub fn remove_grade(&self, student_id: &str, course_id: &str) -> Result<f64, LedgerError> {
        self.inner.lock().remove_grade(student_id, course_id)
    }

    /// Runs a read-only query under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&GradeLedger<O>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Runs several mutations as one atomic step.
    pub fn write<R>(&self, f: impl FnOnce(&mut GradeLedger<O>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::SilentObserver;
    use std::thread;

    #[test]
    fn test_concurrent_record_and_remove_keep_invariant() {
        let shared = SharedLedger::new(GradeLedger::with_observer(SilentObserver));

        thread::scope(|scope| {
            for worker in 0..8 {
                let shared = shared.clone();
                scope.spawn(move || {
                    let course = format!("C{worker}");
                    for round in 0..200 {
                        shared
                            .record_grade("S1", &course, (round % 101) as f64)
                            .unwrap();
                        shared.remove_grade("S1", &course).unwrap();
                    }
                });
            }
        });

        shared.read(|ledger| {
            assert!(ledger.is_empty());
            assert!(ledger.student_grades("S1").is_empty());
            assert_eq!(ledger.students().count(), 0);
        });
    }

    #[test]
    fn test_write_batches_mutations() {
        let shared = SharedLedger::new(GradeLedger::with_observer(SilentObserver));

        let recorded = shared.write(|ledger| {
            ledger.record_grade("S1", "C1", 90.0).unwrap();
            ledger.record_grade("S2", "C1", 80.0).unwrap();
            ledger.len()
        });

        assert_eq!(recorded, 2);
        assert_eq!(shared.read(|ledger| ledger.ranking("C1")), vec!["S1", "S2"]);
    }
}
