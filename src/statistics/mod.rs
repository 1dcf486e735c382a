//! Score aggregation for reporting.
//!
//! Builds [`CourseStatistics`] (mean, extremes, spread and a ten-bucket
//! histogram) from the raw scores of one course, and renders it as text.

pub mod histogram;
pub mod types;
pub mod utility;

pub use types::{Bucket, CourseStatistics, LedgerReport, StudentStanding};

use chrono::Utc;
use std::fmt;

use crate::statistics::histogram::histogram;
use crate::statistics::utility::{mean, stddev};

impl CourseStatistics {
    /// Aggregates the scores of `course_id`.
    ///
    /// Returns `None` when `scores` is empty; nothing is computed in that case.
    pub fn from_scores(course_id: &str, scores: &[f64]) -> Option<Self> {
        let average = mean(scores)?;
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(CourseStatistics {
            course_id: course_id.to_string(),
            generated_at: Utc::now(),
            count: scores.len(),
            average,
            min,
            max,
            stddev: stddev(scores, average),
            histogram: histogram(scores),
        })
    }
}

impl fmt::Display for CourseStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Course statistics =====")?;
        writeln!(f, "Course:  {}", self.course_id)?;
        writeln!(f, "Graded:  {}", self.count)?;
        writeln!(f, "Average: {:.1}", self.average)?;
        writeln!(f, "Highest: {:.1}", self.max)?;
        writeln!(f, "Lowest:  {:.1}", self.min)?;
        writeln!(f, "Std dev: {:.1}", self.stddev)?;
        writeln!(f, "Distribution:")?;
        for bucket in &self.histogram {
            writeln!(
                f,
                "  {:>6}: {} ({:.1}%)",
                bucket.label(),
                bucket.count,
                bucket.percentage
            )?;
        }
        Ok(())
    }
}
