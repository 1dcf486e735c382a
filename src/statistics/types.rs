//! Data types produced by the statistics pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One fixed-width score range of a course histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub lower: u8,
    pub upper: u8,
    pub count: usize,
    pub percentage: f64,
}

impl Bucket {
    /// Range label, e.g. `"40-49"` or `"90-100"`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.lower, self.upper)
    }
}

/// Summary of every score recorded for a single course.
#[derive(Debug, Clone, Serialize)]
pub struct CourseStatistics {
    pub course_id: String,
    pub generated_at: DateTime<Utc>,
    pub count: usize,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub stddev: f64,
    pub histogram: Vec<Bucket>,
}

/// A student's position in the ledger-wide ranking by average score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentStanding {
    pub student_id: String,
    pub average: f64,
    pub courses: usize,
}

/// Full-ledger report: statistics for every graded course plus the student ranking.
#[derive(Debug, Serialize)]
pub struct LedgerReport {
    pub generated_at: DateTime<Utc>,
    pub courses: Vec<CourseStatistics>,
    pub standings: Vec<StudentStanding>,
}
