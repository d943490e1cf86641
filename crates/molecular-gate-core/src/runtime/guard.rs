// crates/molecular-gate-core/src/runtime/guard.rs
// ============================================================================
// Module: Gene-Coverage Guard
// Description: Short-circuits panel evaluations the panel cannot answer.
// Purpose: Keep a narrow panel from being read as a negative result.
// Dependencies: crate::{core, interfaces, runtime::tiered}, graded-logic
// ============================================================================

//! ## Overview
//! Before a rule runs against a non-comprehensive test, the guard checks each
//! [`GeneCoverage`] the rule declares against the test's target
//! specification. The first uncovered requirement yields an `Undetermined`
//! verdict naming what was not tested, with the missing-genes flag set.
//! Comprehensive tests cover every gene and bypass the guard.

// ============================================================================
// SECTION: Imports
// ============================================================================

use graded_logic::Verdict;

use crate::core::CoverageGap;
use crate::core::GeneCoverage;
use crate::core::MolecularTest;
use crate::core::TestTarget;
use crate::interfaces::EvaluationContext;
use crate::interfaces::MolecularRule;
use crate::runtime::tiered::capitalize;

// ============================================================================
// SECTION: Guard
// ============================================================================

/// Evaluates `rule` against the context's test, guarding panel coverage.
#[must_use]
pub fn evaluate_guarded(rule: &dyn MolecularRule, ctx: &EvaluationContext<'_>) -> Verdict {
    match coverage_gap_message(&rule.coverage(), ctx.test()) {
        Some(reason) => {
            let label = capitalize(&rule.label());
            Verdict::undetermined(
                format!("{label} undetermined {reason}"),
                format!("{label} undetermined"),
            )
            .with_missing_genes(true)
        }
        None => rule.evaluate(ctx),
    }
}

/// Returns the parenthesized reason for the first uncovered requirement.
#[must_use]
pub fn coverage_gap_message(
    requirements: &[GeneCoverage],
    test: &MolecularTest,
) -> Option<String> {
    if test.experiment.is_comprehensive() {
        return None;
    }
    requirements.iter().find_map(|requirement| {
        let tested = test
            .target_specification
            .as_ref()
            .and_then(|spec| spec.targets_for(&requirement.gene))
            .filter(|targets| !targets.is_empty());
        match tested {
            None => Some(format!("({} not tested)", requirement.gene)),
            Some(targets) => requirement.predicate.missing(targets).map(|gap| gap_reason(&gap)),
        }
    })
}

/// Phrases a coverage gap.
fn gap_reason(gap: &CoverageGap) -> String {
    let names: Vec<&str> = gap.missing.iter().copied().map(TestTarget::plural).collect();
    let phrase = if gap.alternatives {
        join_with(&names, "or")
    } else if names.len() > 1 && names.len() == gap.required {
        format!("any of {}", names.join(", "))
    } else {
        join_with(&names, "and")
    };
    format!("(not tested for {phrase})")
}

/// Joins items as `a, b and c` (or `or`).
fn join_with(items: &[&str], conjunction: &str) -> String {
    match items.split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} {conjunction} {last}", rest.join(", ")),
    }
}
