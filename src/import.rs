//! CSV loading for grades, students and courses.
//!
//! Rows go through the same operations an interactive caller would use, so a
//! score out of range or a duplicate id is skipped and counted rather than
//! aborting the load. A row that does not parse aborts it.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::ledger::{GradeLedger, LedgerObserver};
use crate::registry::{Course, CourseRegistry, Student, StudentRegistry};

/// A single row of a grades CSV (`student_id,course_id,score`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRow {
    pub student_id: String,
    pub course_id: String,
    pub score: f64,
}

/// Outcome of loading one file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// Reads every row of a headed CSV file into `T`.
pub fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: T = result.with_context(|| format!("parsing {}", path.display()))?;
        rows.push(record);
    }

    Ok(rows)
}

/// Records every row of a grades CSV into `ledger`.
#[tracing::instrument(skip(ledger))]
pub fn load_grades<O: LedgerObserver>(
    path: &Path,
    ledger: &mut GradeLedger<O>,
) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for row in read_rows::<GradeRow>(path)? {
        match ledger.record_grade(&row.student_id, &row.course_id, row.score) {
            Ok(()) => summary.loaded += 1,
            Err(e) => {
                warn!(
                    student_id = %row.student_id,
                    course_id = %row.course_id,
                    error = %e,
                    "Skipping grade row"
                );
                summary.skipped += 1;
            }
        }
    }

    info!(loaded = summary.loaded, skipped = summary.skipped, "Grades loaded");
    Ok(summary)
}

/// Registers every row of a students CSV.
#[tracing::instrument(skip(registry))]
pub fn load_students(path: &Path, registry: &mut StudentRegistry) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for student in read_rows::<Student>(path)? {
        match registry.add(student) {
            Ok(()) => summary.loaded += 1,
            Err(e) => {
                warn!(error = %e, "Skipping student row");
                summary.skipped += 1;
            }
        }
    }

    info!(loaded = summary.loaded, skipped = summary.skipped, "Students loaded");
    Ok(summary)
}

/// Registers every row of a courses CSV.
#[tracing::instrument(skip(registry))]
pub fn load_courses(path: &Path, registry: &mut CourseRegistry) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for course in read_rows::<Course>(path)? {
        match registry.add(course) {
            Ok(()) => summary.loaded += 1,
            Err(e) => {
                warn!(error = %e, "Skipping course row");
                summary.skipped += 1;
            }
        }
    }

    info!(loaded = summary.loaded, skipped = summary.skipped, "Courses loaded");
    Ok(summary)
}
