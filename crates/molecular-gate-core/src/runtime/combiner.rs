// crates/molecular-gate-core/src/runtime/combiner.rs
// ============================================================================
// Module: Multi-Test Combiner
// Description: Folds per-test verdicts into one criterion-level verdict.
// Purpose: Make combined messages independent of evaluation order.
// Dependencies: crate::core, graded-logic
// ============================================================================

//! ## Overview
//! Verdicts are ordered comprehensive-first, then panels most-recent-first
//! (ties by test id), and handed to [`graded_logic::combine`]. The source of
//! a verdict never affects the grade, only where its messages appear.

// ============================================================================
// SECTION: Imports
// ============================================================================

use graded_logic::GradePrecedence;
use graded_logic::Verdict;

use crate::core::MolecularTest;
use crate::core::cmp_recency;

// ============================================================================
// SECTION: Sourced Verdicts
// ============================================================================

/// Verdict produced against one test.
#[derive(Debug, Clone)]
pub struct TestVerdict<'a> {
    /// Test the verdict was produced against.
    pub test: &'a MolecularTest,
    /// Verdict produced.
    pub verdict: Verdict,
}

impl<'a> TestVerdict<'a> {
    /// Pairs a verdict with its source test.
    #[must_use]
    pub const fn new(test: &'a MolecularTest, verdict: Verdict) -> Self {
        Self {
            test,
            verdict,
        }
    }
}

// ============================================================================
// SECTION: Combination
// ============================================================================

/// Combines comprehensive and panel verdicts; `None` when both are empty.
#[must_use]
pub fn combine_test_verdicts<L: GradePrecedence>(
    mut comprehensive: Vec<TestVerdict<'_>>,
    mut panels: Vec<TestVerdict<'_>>,
    precedence: &L,
) -> Option<Verdict> {
    comprehensive.sort_by(|lhs, rhs| cmp_recency(lhs.test, rhs.test));
    panels.sort_by(|lhs, rhs| cmp_recency(lhs.test, rhs.test));
    let ordered = comprehensive.into_iter().chain(panels).map(|sourced| sourced.verdict);
    graded_logic::combine(ordered, precedence)
}
