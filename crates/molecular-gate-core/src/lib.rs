// crates/molecular-gate-core/src/lib.rs
// ============================================================================
// Module: Molecular Gate Core Library
// Description: Public API surface for molecular criterion evaluation.
// Purpose: Expose core types, rule interfaces, the rule catalogue, and runtime.
// Dependencies: crate::{core, interfaces, rules, runtime}
// ============================================================================

//! ## Overview
//! Molecular Gate decides whether a patient's molecular tests satisfy a
//! clinical-trial criterion. Each criterion is graded per test with tiered
//! confidence, panels are guarded against coverage gaps, and the per-test
//! verdicts are combined into one graded verdict with deterministic
//! messages.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod rules;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use graded_logic::Grade;
pub use graded_logic::PrecedenceMode;
pub use graded_logic::Verdict;
pub use interfaces::EvaluationContext;
pub use interfaces::MolecularRule;
pub use rules::instantiate;
pub use runtime::CriterionAuditEvent;
pub use runtime::CriterionEngine;
pub use runtime::EvaluationAuditSink;
pub use runtime::FileAuditSink;
pub use runtime::MemoryAuditSink;
pub use runtime::NoopAuditSink;
pub use runtime::StderrAuditSink;
