// crates/molecular-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Molecular Gate Runtime
// Description: Selection, tiered grading, coverage guard, combination, engine.
// Purpose: Evaluate molecular criteria against validated histories.
// Dependencies: crate::{core, interfaces, rules}, graded-logic
// ============================================================================

//! ## Overview
//! Runtime modules implement the one-way flow from history to verdict:
//! selector, guarded per-test evaluation, combiner. All entry points go
//! through [`CriterionEngine`] so auditing sees every evaluation.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod audit;
pub mod combiner;
pub mod engine;
pub mod guard;
pub mod selector;
pub mod tiered;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::CriterionAuditEvent;
pub use audit::EvaluationAuditSink;
pub use audit::FileAuditSink;
pub use audit::MemoryAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use audit::TestGradeRecord;
pub use combiner::TestVerdict;
pub use combiner::combine_test_verdicts;
pub use engine::CriterionEngine;
pub use engine::INSUFFICIENT_MOLECULAR_DATA;
pub use engine::NO_MOLECULAR_RESULTS;
pub use guard::coverage_gap_message;
pub use guard::evaluate_guarded;
pub use selector::SelectionPolicy;
pub use selector::select;
pub use tiered::Candidate;
pub use tiered::TieredAssessment;
pub use tiered::Weakness;
