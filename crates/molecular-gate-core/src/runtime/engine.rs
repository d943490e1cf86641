// crates/molecular-gate-core/src/runtime/engine.rs
// ============================================================================
// Module: Criterion Evaluation Engine
// Description: Orchestrates selection, guarding, evaluation, and combination.
// Purpose: Provide the single entry point for molecular criterion evaluation.
// Dependencies: crate::{core, interfaces, rules, runtime}, graded-logic, time
// ============================================================================

//! ## Overview
//! [`CriterionEngine::evaluate`] turns criterion parameters, a validated
//! history, and an as-of date into one [`Verdict`]:
//!
//! - no selected tests: `Undetermined` with the missing-result flag;
//! - a required gene never assayed: `Undetermined` with the missing-genes
//!   flag, without running the rule;
//! - otherwise every supported test is evaluated (panels through the
//!   coverage guard) and the verdicts are combined; when none was produced,
//!   the rule's default or `Undetermined` with the missing-result flag.
//!
//! The engine is stateless apart from its audit sink and never reads the
//! wall clock.

// ============================================================================
// SECTION: Imports
// ============================================================================

use graded_logic::Verdict;
use time::Date;

use crate::core::Criterion;
use crate::core::CriterionId;
use crate::core::EvaluationSettings;
use crate::core::MolecularHistory;
use crate::core::MolecularTest;
use crate::core::hash_history;
use crate::interfaces::EvaluationContext;
use crate::interfaces::MolecularRule;
use crate::rules;
use crate::runtime::audit::CriterionAuditEvent;
use crate::runtime::audit::CriterionAuditEventParams;
use crate::runtime::audit::EvaluationAuditSink;
use crate::runtime::audit::NoopAuditSink;
use crate::runtime::audit::TestGradeRecord;
use crate::runtime::combiner::TestVerdict;
use crate::runtime::combiner::combine_test_verdicts;
use crate::runtime::guard::evaluate_guarded;
use crate::runtime::selector::SelectionPolicy;
use crate::runtime::selector::select;

// ============================================================================
// SECTION: Messages
// ============================================================================

/// Message used when the history holds no tests.
pub const NO_MOLECULAR_RESULTS: &str = "No molecular results";
/// Message used when no selected test produced a verdict.
pub const INSUFFICIENT_MOLECULAR_DATA: &str = "Insufficient molecular data";

// ============================================================================
// SECTION: Engine
// ============================================================================

/// Molecular criterion evaluation engine.
///
/// # Invariants
/// - Evaluation is a pure function of its inputs and the settings; the sink
///   only observes results.
pub struct CriterionEngine<S = NoopAuditSink> {
    /// Evaluation settings.
    settings: EvaluationSettings,
    /// Audit sink receiving one event per evaluation.
    sink: S,
    /// Whether audit events carry a canonical history hash.
    hash_history: bool,
}

impl CriterionEngine<NoopAuditSink> {
    /// Creates an engine without auditing.
    #[must_use]
    pub const fn new(settings: EvaluationSettings) -> Self {
        Self {
            settings,
            sink: NoopAuditSink,
            hash_history: false,
        }
    }
}

impl Default for CriterionEngine<NoopAuditSink> {
    fn default() -> Self {
        Self::new(EvaluationSettings::default())
    }
}

impl<S: EvaluationAuditSink> CriterionEngine<S> {
    /// Returns an engine that records events to `sink`.
    #[must_use]
    pub fn with_audit_sink<T: EvaluationAuditSink>(
        self,
        sink: T,
        hash_history: bool,
    ) -> CriterionEngine<T> {
        CriterionEngine {
            settings: self.settings,
            sink,
            hash_history,
        }
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn settings(&self) -> &EvaluationSettings {
        &self.settings
    }

    /// Returns the audit sink.
    #[must_use]
    pub const fn audit_sink(&self) -> &S {
        &self.sink
    }

    /// Evaluates a catalogue criterion.
    #[must_use]
    pub fn evaluate(
        &self,
        criterion: &Criterion,
        history: &MolecularHistory,
        as_of: Date,
    ) -> Verdict {
        let rule = rules::instantiate(&criterion.parameters);
        self.evaluate_rule(&criterion.id, rule.as_ref(), history, as_of)
    }

    /// Evaluates an arbitrary rule.
    #[must_use]
    pub fn evaluate_rule(
        &self,
        criterion_id: &CriterionId,
        rule: &dyn MolecularRule,
        history: &MolecularHistory,
        as_of: Date,
    ) -> Verdict {
        let policy = SelectionPolicy {
            max_test_age_days: self.settings.max_test_age_days,
            most_recent_only: self.settings.most_recent_only,
        };
        let selected = select(history, as_of, policy);
        let (verdict, test_grades) = self.run(rule, &selected);

        let history_hash = self.hash_history.then(|| hash_history(history));
        let event = CriterionAuditEvent::new(CriterionAuditEventParams {
            criterion_id: criterion_id.clone(),
            rule: rule.label(),
            as_of,
            history_hash,
            selected_tests: selected.iter().map(|test| test.test_id.clone()).collect(),
            test_grades,
            verdict: &verdict,
        });
        self.sink.record(&event);
        verdict
    }

    /// Runs the evaluation state machine over the selected tests.
    fn run(
        &self,
        rule: &dyn MolecularRule,
        selected: &[&MolecularTest],
    ) -> (Verdict, Vec<TestGradeRecord>) {
        if selected.is_empty() {
            let verdict = Verdict::undetermined(NO_MOLECULAR_RESULTS, NO_MOLECULAR_RESULTS)
                .with_missing_molecular_result(true);
            return (verdict, Vec::new());
        }

        let untested: Vec<String> = rule
            .required_genes(&self.settings)
            .into_iter()
            .filter(|gene| !selected.iter().any(|test| test.covers_gene(gene)))
            .collect();
        if !untested.is_empty() {
            let message = format!("Gene(s) {} not tested", untested.join(", "));
            let verdict = Verdict::undetermined(message.clone(), message).with_missing_genes(true);
            return (verdict, Vec::new());
        }

        let mut comprehensive = Vec::new();
        let mut panels = Vec::new();
        let mut test_grades = Vec::new();
        for test in selected.iter().copied().filter(|test| rule.supports(test.experiment)) {
            let ctx = EvaluationContext::new(test, &self.settings);
            let verdict = if test.experiment.is_comprehensive() {
                rule.evaluate(&ctx)
            } else {
                evaluate_guarded(rule, &ctx)
            };
            test_grades.push(TestGradeRecord {
                test_id: test.test_id.clone(),
                grade: verdict.grade(),
            });
            if test.experiment.is_comprehensive() {
                comprehensive.push(TestVerdict::new(test, verdict));
            } else {
                panels.push(TestVerdict::new(test, verdict));
            }
        }

        let verdict = combine_test_verdicts(comprehensive, panels, &self.settings.precedence)
            .or_else(|| rule.no_comprehensive_default())
            .unwrap_or_else(|| {
                Verdict::undetermined(INSUFFICIENT_MOLECULAR_DATA, INSUFFICIENT_MOLECULAR_DATA)
                    .with_missing_molecular_result(true)
            });
        (verdict, test_grades)
    }
}
