// crates/molecular-gate-core/src/runtime/audit.rs
// ============================================================================
// Module: Criterion Audit Logging
// Description: Structured audit events for criterion evaluations.
// Purpose: Emit redacted evaluation records without a logging framework.
// Dependencies: crate::core, graded-logic, serde, serde_json
// ============================================================================

//! ## Overview
//! Each evaluation can emit one [`CriterionAuditEvent`] to an
//! [`EvaluationAuditSink`]. Events carry identifiers, grades, and a canonical
//! hash of the evaluated history, never the findings themselves, so they can
//! be shipped to ordinary log pipelines.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use graded_logic::Grade;
use graded_logic::GradeCounts;
use graded_logic::Verdict;
use serde::Serialize;
use time::Date;

use crate::core::CriterionId;
use crate::core::HashError;
use crate::core::HistoryDigest;
use crate::core::TestId;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Grade produced against one selected test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestGradeRecord {
    /// Test identifier.
    pub test_id: TestId,
    /// Grade produced against the test.
    pub grade: Grade,
}

/// Criterion evaluation audit event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Criterion identifier.
    pub criterion_id: CriterionId,
    /// Criterion phrase.
    pub rule: String,
    /// Caller-supplied evaluation date.
    pub as_of: String,
    /// Canonical hash of the evaluated history, when enabled.
    pub history_hash: Option<HistoryDigest>,
    /// Reason the history could not be hashed, when hashing was attempted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_hash_error: Option<String>,
    /// Tests chosen by the selector, in evaluation order.
    pub selected_tests: Vec<TestId>,
    /// Grades produced per evaluated test.
    pub test_grades: Vec<TestGradeRecord>,
    /// Tally of per-test grades.
    pub grade_counts: GradeCounts,
    /// Final combined grade.
    pub grade: Grade,
    /// Final missing-genes flag.
    pub missing_genes_for_sufficient_evaluation: bool,
    /// Final missing-molecular-result flag.
    pub missing_molecular_result_for_evaluation: bool,
}

/// Inputs required to construct an audit event.
pub struct CriterionAuditEventParams<'a> {
    /// Criterion identifier.
    pub criterion_id: CriterionId,
    /// Criterion phrase.
    pub rule: String,
    /// Caller-supplied evaluation date.
    pub as_of: Date,
    /// Outcome of hashing the evaluated history; `None` when disabled.
    pub history_hash: Option<Result<HistoryDigest, HashError>>,
    /// Tests chosen by the selector.
    pub selected_tests: Vec<TestId>,
    /// Grades produced per evaluated test.
    pub test_grades: Vec<TestGradeRecord>,
    /// Final verdict.
    pub verdict: &'a Verdict,
}

impl CriterionAuditEvent {
    /// Creates a new criterion audit event.
    #[must_use]
    pub fn new(params: CriterionAuditEventParams<'_>) -> Self {
        let grade_counts = params.test_grades.iter().map(|record| record.grade).collect();
        let (history_hash, history_hash_error) = match params.history_hash {
            Some(Ok(digest)) => (Some(digest), None),
            Some(Err(err)) => (None, Some(err.to_string())),
            None => (None, None),
        };
        Self {
            event: "criterion_evaluation",
            criterion_id: params.criterion_id,
            rule: params.rule,
            as_of: params.as_of.to_string(),
            history_hash,
            history_hash_error,
            selected_tests: params.selected_tests,
            test_grades: params.test_grades,
            grade_counts,
            grade: params.verdict.grade(),
            missing_genes_for_sufficient_evaluation: params
                .verdict
                .is_missing_genes_for_sufficient_evaluation(),
            missing_molecular_result_for_evaluation: params
                .verdict
                .is_missing_molecular_result_for_evaluation(),
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for criterion evaluation events.
pub trait EvaluationAuditSink: Send + Sync {
    /// Records an audit event.
    fn record(&self, event: &CriterionAuditEvent);
}

impl<T: EvaluationAuditSink + ?Sized> EvaluationAuditSink for Box<T> {
    fn record(&self, event: &CriterionAuditEvent) {
        (**self).record(event);
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl EvaluationAuditSink for StderrAuditSink {
    fn record(&self, event: &CriterionAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl EvaluationAuditSink for FileAuditSink {
    fn record(&self, event: &CriterionAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// Audit sink that keeps events in memory.
#[derive(Default)]
pub struct MemoryAuditSink {
    /// Captured events in record order.
    events: Mutex<Vec<CriterionAuditEvent>>,
}

impl MemoryAuditSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the captured events.
    #[must_use]
    pub fn events(&self) -> Vec<CriterionAuditEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl EvaluationAuditSink for MemoryAuditSink {
    fn record(&self, event: &CriterionAuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// No-op audit sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuditSink;

impl EvaluationAuditSink for NoopAuditSink {
    fn record(&self, _event: &CriterionAuditEvent) {}
}
