use thiserror::Error;

/// Failures returned by [`GradeLedger`](crate::ledger::GradeLedger) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error(
        "score {score} is outside the range {min}..={max}",
        min = crate::ledger::MIN_SCORE,
        max = crate::ledger::MAX_SCORE
    )]
    ScoreOutOfRange { score: f64 },
    #[error("no grade recorded for student {student_id} in course {course_id}")]
    GradeNotFound {
        student_id: String,
        course_id: String,
    },
}

/// Failures returned by [`IdentityStore`](crate::registry::IdentityStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("registry is full ({capacity} records)")]
    CapacityReached { capacity: usize },
    #[error("id {0} is already registered")]
    DuplicateId(String),
    #[error("id {0} is not registered")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_keys() {
        let err = LedgerError::GradeNotFound {
            student_id: "S1".into(),
            course_id: "C9".into(),
        };
        assert_eq!(
            err.to_string(),
            "no grade recorded for student S1 in course C9"
        );

        let err = LedgerError::ScoreOutOfRange { score: 101.5 };
        assert_eq!(err.to_string(), "score 101.5 is outside the range 0..=100");

        assert_eq!(
            RegistryError::CapacityReached { capacity: 2 }.to_string(),
            "registry is full (2 records)"
        );
    }
}
