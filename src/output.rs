//! Output formatting for ledger and registry reports.
//!
//! Supports plain-text rendering and pretty JSON serialization.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::registry::{CourseSummary, StudentSummary};
use crate::statistics::StudentStanding;

/// Printed when a course or student has no recorded grades.
pub const NO_RECORDS: &str = "No grade records.";

/// Serializes any report as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One line per ranked student: position, id and score.
pub fn render_ranking(course_id: &str, ranked: &[(String, f64)]) -> String {
    if ranked.is_empty() {
        return format!("{course_id}: {NO_RECORDS}\n");
    }

    let mut out = format!("Ranking for {course_id}:\n");
    for (position, (student_id, score)) in ranked.iter().enumerate() {
        out.push_str(&format!("{:>3}. {student_id} {score:.1}\n", position + 1));
    }
    out
}

/// A keyed list of scores followed by their average.
pub fn render_grades(title: &str, grades: &BTreeMap<String, f64>, average: Option<f64>) -> String {
    let Some(average) = average else {
        return format!("{title}: {NO_RECORDS}\n");
    };

    let mut out = format!("{title}:\n");
    for (id, score) in grades {
        out.push_str(&format!("  {id}: {score:.1}\n"));
    }
    out.push_str(&format!("  average: {average:.1}\n"));
    out
}

pub fn render_standings(standings: &[StudentStanding]) -> String {
    if standings.is_empty() {
        return format!("{NO_RECORDS}\n");
    }

    let mut out = String::from("Students by average:\n");
    for (position, standing) in standings.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {} {:.1} ({} courses)\n",
            position + 1,
            standing.student_id,
            standing.average,
            standing.courses
        ));
    }
    out
}

pub fn render_student_summary(summary: &StudentSummary) -> String {
    let mut out = format!("Total students: {}\n", summary.total);
    out.push_str("By department:\n");
    for (department, count) in &summary.by_department {
        out.push_str(&format!("  {department}: {count}\n"));
    }
    out.push_str("By gender:\n");
    for (gender, count) in &summary.by_gender {
        out.push_str(&format!("  {gender}: {count}\n"));
    }
    out
}

pub fn render_course_summary(summary: &CourseSummary) -> String {
    let mut out = format!("Total courses: {}\n", summary.total);
    out.push_str("By teacher:\n");
    for (teacher, count) in &summary.by_teacher {
        out.push_str(&format!("  {teacher}: {count}\n"));
    }
    match summary.average_credit {
        Some(avg) => out.push_str(&format!("Average credit: {avg:.1}\n")),
        None => out.push_str("Average credit: n/a\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::CourseStatistics;

    #[test]
    fn test_render_ranking() {
        let ranked = vec![("A".to_string(), 90.0), ("B".to_string(), 72.5)];
        let text = render_ranking("C1", &ranked);

        assert_eq!(text, "Ranking for C1:\n  1. A 90.0\n  2. B 72.5\n");
        assert_eq!(render_ranking("C2", &[]), "C2: No grade records.\n");
    }

    #[test]
    fn test_render_grades_with_average() {
        let grades = BTreeMap::from([("C1".to_string(), 85.0), ("C2".to_string(), 78.0)]);
        let text = render_grades("S1", &grades, Some(81.5));

        assert_eq!(text, "S1:\n  C1: 85.0\n  C2: 78.0\n  average: 81.5\n");
        assert_eq!(render_grades("S9", &BTreeMap::new(), None), "S9: No grade records.\n");
    }

    #[test]
    fn test_render_course_summary_without_courses() {
        let summary = CourseSummary {
            total: 0,
            by_teacher: BTreeMap::new(),
            average_credit: None,
        };
        assert!(render_course_summary(&summary).contains("Average credit: n/a"));
    }

    #[test]
    fn test_render_standings_one_line_each() {
        let standings = vec![
            StudentStanding {
                student_id: "S3".to_string(),
                average: 95.0,
                courses: 2,
            },
            StudentStanding {
                student_id: "S1".to_string(),
                average: 81.5,
                courses: 2,
            },
        ];

        assert_eq!(
            render_standings(&standings),
            "Students by average:\n  1. S3 95.0 (2 courses)\n  2. S1 81.5 (2 courses)\n"
        );
        assert_eq!(render_standings(&[]), "No grade records.\n");
    }

    #[test]
    fn test_render_summaries_line_per_entry() {
        let students = StudentSummary {
            total: 3,
            by_department: BTreeMap::from([("History".to_string(), 1), ("Physics".to_string(), 2)]),
            by_gender: BTreeMap::from([("F".to_string(), 3)]),
        };
        assert_eq!(
            render_student_summary(&students),
            "Total students: 3\nBy department:\n  History: 1\n  Physics: 2\nBy gender:\n  F: 3\n"
        );

        let courses = CourseSummary {
            total: 2,
            by_teacher: BTreeMap::from([("Wang".to_string(), 2)]),
            average_credit: Some(3.5),
        };
        assert_eq!(
            render_course_summary(&courses),
            "Total courses: 2\nBy teacher:\n  Wang: 2\nAverage credit: 3.5\n"
        );
    }

    #[test]
    fn test_to_json_statistics() {
        let stats = CourseStatistics::from_scores("C1", &[100.0, 40.0]).unwrap();
        let json = to_json(&stats).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["course_id"], "C1");
        assert_eq!(value["average"], 70.0);
        assert_eq!(value["histogram"].as_array().unwrap().len(), 10);
        assert_eq!(value["histogram"][9]["upper"], 100);
    }
}
