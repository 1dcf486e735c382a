//! The grade ledger: every (student, course) score and the statistics derived from them.
//!
//! [`GradeLedger`] stores scores as `student_id -> (course_id -> score)` in
//! ordered maps, so every enumeration it hands out is sorted by id. It does not
//! check ids against the student or course registries.
//!
//! Status notifications (recorded, rejected, removed, missing) go to an
//! injected [`LedgerObserver`]; the default forwards them to `tracing`.
//! [`SharedLedger`] wraps a ledger behind a single lock for multi-threaded use.

mod observer;
mod shared;

pub use observer::{LedgerEvent, LedgerObserver, SilentObserver, TracingObserver};
pub use shared::SharedLedger;

use chrono::Utc;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::LedgerError;
use crate::statistics::utility::mean;
use crate::statistics::{CourseStatistics, LedgerReport, StudentStanding};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Whether `score` lies in the closed range `MIN_SCORE..=MAX_SCORE`. NaN never does.
pub fn is_valid_score(score: f64) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

#[derive(Debug)]
pub struct GradeLedger<O = TracingObserver> {
    // Invariant: no student maps to an empty course map.
    grades: BTreeMap<String, BTreeMap<String, f64>>,
    observer: O,
}

impl GradeLedger {
    pub fn new() -> Self {
        Self::with_observer(TracingObserver)
    }
}

impl Default for GradeLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: LedgerObserver> GradeLedger<O> {
    pub fn with_observer(observer: O) -> Self {
        Self {
            grades: BTreeMap::new(),
            observer,
        }
    }

    /// Inserts or overwrites the score for `(student_id, course_id)`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ScoreOutOfRange`] if `score` is not within
    /// `0..=100`; the ledger is left untouched.
    pub fn record_grade(
        &mut self,
        student_id: &str,
        course_id: &str,
        score: f64,
    ) -> Result<(), LedgerError> {
        if !is_valid_score(score) {
            self.observer.notify(&LedgerEvent::Rejected {
                student_id: student_id.to_string(),
                course_id: course_id.to_string(),
                score,
            });
            return Err(LedgerError::ScoreOutOfRange { score });
        }
        // Folds -0.0 into 0.0.
        let score = score + 0.0;

        let previous = self
            .grades
            .entry(student_id.to_string())
            .or_default()
            .insert(course_id.to_string(), score);

        self.observer.notify(&LedgerEvent::Recorded {
            student_id: student_id.to_string(),
            course_id: course_id.to_string(),
            score,
            previous,
        });
        Ok(())
    }

    /// Removes the score for `(student_id, course_id)` and returns it.
    ///
    /// A student whose last score is removed disappears from the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::GradeNotFound`] if no score is recorded for the pair.
    pub fn remove_grade(&mut self, student_id: &str, course_id: &str) -> Result<f64, LedgerError> {
        let removed = match self.grades.get_mut(student_id) {
            Some(courses) => {
                let removed = courses.remove(course_id);
                if courses.is_empty() {
                    self.grades.remove(student_id);
                }
                removed
            }
            None => None,
        };

        let Some(score) = removed else {
            self.observer.notify(&LedgerEvent::Missing {
                student_id: student_id.to_string(),
                course_id: course_id.to_string(),
            });
            return Err(LedgerError::GradeNotFound {
                student_id: student_id.to_string(),
                course_id: course_id.to_string(),
            });
        };

        self.observer.notify(&LedgerEvent::Removed {
            student_id: student_id.to_string(),
            course_id: course_id.to_string(),
            score,
        });
        Ok(score)
    }

    pub fn grade(&self, student_id: &str, course_id: &str) -> Option<f64> {
        self.grades.get(student_id)?.get(course_id).copied()
    }

    /// All scores of one student keyed by course id. Empty if the student has none.
    pub fn student_grades(&self, student_id: &str) -> BTreeMap<String, f64> {
        self.grades.get(student_id).cloned().unwrap_or_default()
    }

    /// All scores recorded for one course keyed by student id.
    pub fn course_grades(&self, course_id: &str) -> BTreeMap<String, f64> {
        self.grades
            .iter()
            .filter_map(|(student_id, courses)| {
                courses
                    .get(course_id)
                    .map(|&score| (student_id.clone(), score))
            })
            .collect()
    }

    pub fn student_average(&self, student_id: &str) -> Option<f64> {
        let scores: Vec<f64> = self.grades.get(student_id)?.values().copied().collect();
        mean(&scores)
    }

    pub fn course_average(&self, course_id: &str) -> Option<f64> {
        let scores: Vec<f64> = self.course_grades(course_id).into_values().collect();
        mean(&scores)
    }

    /// Students graded in `course_id`, best score first.
    ///
    /// Equal scores are ordered by student id ascending. Students without a
    /// score for the course are left out.
    pub fn ranking(&self, course_id: &str) -> Vec<String> {
        self.ranked_scores(course_id)
            .into_iter()
            .map(|(student_id, _)| student_id)
            .collect()
    }

    /// Same order as [`ranking`](Self::ranking), paired with each score.
    pub fn ranked_scores(&self, course_id: &str) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> = self.course_grades(course_id).into_iter().collect();
        entries.sort_by(|a, b| descending(a.1, b.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Mean, extremes and histogram for one course; `None` when it has no records.
    pub fn course_statistics(&self, course_id: &str) -> Option<CourseStatistics> {
        let scores: Vec<f64> = self.course_grades(course_id).into_values().collect();
        CourseStatistics::from_scores(course_id, &scores)
    }

    /// Ids of every student with at least one score, ascending.
    pub fn students(&self) -> impl Iterator<Item = &str> {
        self.grades.keys().map(String::as_str)
    }

    /// Ids of every course with at least one score, ascending.
    pub fn courses(&self) -> BTreeSet<&str> {
        self.grades
            .values()
            .flat_map(|courses| courses.keys().map(String::as_str))
            .collect()
    }

    /// Number of recorded (student, course) scores.
    pub fn len(&self) -> usize {
        self.grades.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Every graded student ordered by average score, best first; ties by id.
    pub fn standings(&self) -> Vec<StudentStanding> {
        let mut standings: Vec<StudentStanding> = self
            .grades
            .iter()
            .filter_map(|(student_id, courses)| {
                let scores: Vec<f64> = courses.values().copied().collect();
                mean(&scores).map(|average| StudentStanding {
                    student_id: student_id.clone(),
                    average,
                    courses: courses.len(),
                })
            })
            .collect();

        standings.sort_by(|a, b| {
            descending(a.average, b.average).then_with(|| a.student_id.cmp(&b.student_id))
        });
        standings
    }

    /// Statistics for every graded course plus the student standings.
    pub fn report(&self) -> LedgerReport {
        let courses = self
            .courses()
            .into_iter()
            .filter_map(|course_id| self.course_statistics(course_id))
            .collect();

        LedgerReport {
            generated_at: Utc::now(),
            courses,
            standings: self.standings(),
        }
    }
}

// Stored scores are never NaN, so partial_cmp only falls back for unreachable input.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
