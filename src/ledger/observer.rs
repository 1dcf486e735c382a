//! Status notifications emitted by the ledger.

use tracing::{debug, warn};

/// Something that happened to the ledger, reported to its [`LedgerObserver`].
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEvent {
    /// A score was stored. `previous` is set when it overwrote an earlier score.
    Recorded {
        student_id: String,
        course_id: String,
        score: f64,
        previous: Option<f64>,
    },
    /// A score outside the valid range was refused.
    Rejected {
        student_id: String,
        course_id: String,
        score: f64,
    },
    /// A score was removed.
    Removed {
        student_id: String,
        course_id: String,
        score: f64,
    },
    /// Removal targeted a pair with no recorded score.
    Missing {
        student_id: String,
        course_id: String,
    },
}

/// Receives ledger notifications. Implementations must not call back into the ledger.
pub trait LedgerObserver: Send {
    fn notify(&self, event: &LedgerEvent);
}

/// Default observer: successes at `debug`, refusals at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl LedgerObserver for TracingObserver {
    fn notify(&self, event: &LedgerEvent) {
        match event {
            LedgerEvent::Recorded {
                student_id,
                course_id,
                score,
                previous,
            } => debug!(
                student_id = %student_id,
                course_id = %course_id,
                score,
                previous = ?previous,
                "Grade recorded"
            ),
            LedgerEvent::Rejected {
                student_id,
                course_id,
                score,
            } => warn!(
                student_id = %student_id,
                course_id = %course_id,
                score,
                "Grade rejected: score out of range"
            ),
            LedgerEvent::Removed {
                student_id,
                course_id,
                score,
            } => debug!(
                student_id = %student_id,
                course_id = %course_id,
                score,
                "Grade removed"
            ),
            LedgerEvent::Missing {
                student_id,
                course_id,
            } => warn!(
                student_id = %student_id,
                course_id = %course_id,
                "Grade not found"
            ),
        }
    }
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl LedgerObserver for SilentObserver {
    fn notify(&self, _event: &LedgerEvent) {}
}
