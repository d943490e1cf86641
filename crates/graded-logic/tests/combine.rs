// crates/graded-logic/tests/combine.rs
// ============================================================================
// Module: Combination Tests
// Description: Tests for precedence-driven verdict combination.
// ============================================================================
//! ## Overview
//! Validates that combination picks the best grade, keeps only that grade's
//! messages, and is idempotent and order-insensitive in grade.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use graded_logic::Grade;
use graded_logic::GradePrecedence;
use graded_logic::PrecedenceMode;
use graded_logic::StandardPrecedence;
use graded_logic::Verdict;
use graded_logic::combine;
use proptest::prelude::*;
use support::TestResult;
use support::ensure;
use support::labelled;

// ============================================================================
// SECTION: Examples
// ============================================================================

/// Empty input produces no verdict.
#[test]
fn combine_empty_is_none() -> TestResult {
    ensure(combine(Vec::new(), &StandardPrecedence).is_none(), "empty input yields none")?;
    Ok(())
}

/// Pass wins over fail and warn, and only pass messages survive.
#[test]
fn combine_prefers_pass() -> TestResult {
    let verdicts = vec![
        labelled(Grade::Fail, "fail"),
        labelled(Grade::Pass, "pass"),
        labelled(Grade::Warn, "warn"),
    ];
    let combined = combine(verdicts, &StandardPrecedence).ok_or("expected a verdict")?;
    ensure(combined.grade() == Grade::Pass, "pass should win")?;
    ensure(
        combined.specific_messages().as_slice() == ["pass specific"],
        "only pass messages should survive",
    )?;
    Ok(())
}

/// Undetermined beats fail by default and loses in fail-first mode.
#[test]
fn combine_respects_precedence_mode() -> TestResult {
    let verdicts =
        vec![labelled(Grade::Fail, "panel"), labelled(Grade::Undetermined, "comprehensive")];
    let standard =
        combine(verdicts.clone(), &PrecedenceMode::Standard).ok_or("expected a verdict")?;
    ensure(standard.grade() == Grade::Undetermined, "undetermined should win by default")?;
    let fail_first = combine(verdicts, &PrecedenceMode::FailBeforeUndetermined)
        .ok_or("expected a verdict")?;
    ensure(fail_first.grade() == Grade::Fail, "fail should win in fail-first mode")?;
    Ok(())
}

/// Same-grade verdicts are merged in input order with flags OR-ed.
#[test]
fn combine_merges_same_grade_in_order() -> TestResult {
    let verdicts = vec![
        labelled(Grade::Warn, "first"),
        labelled(Grade::Fail, "ignored").with_missing_molecular_result(true),
        labelled(Grade::Warn, "second").with_missing_genes(true),
    ];
    let combined = combine(verdicts, &StandardPrecedence).ok_or("expected a verdict")?;
    ensure(
        combined.specific_messages().as_slice() == ["first specific", "second specific"],
        "messages should be merged in order",
    )?;
    ensure(combined.is_missing_genes_for_sufficient_evaluation(), "winner flag should be kept")?;
    ensure(
        !combined.is_missing_molecular_result_for_evaluation(),
        "loser flags should be discarded",
    )?;
    Ok(())
}

/// Combining a verdict with itself yields the verdict.
#[test]
fn combine_is_idempotent() -> TestResult {
    let verdict = labelled(Grade::Undetermined, "only").with_inclusion_event("KRAS G12C");
    let combined = combine([verdict.clone(), verdict.clone()], &StandardPrecedence)
        .ok_or("expected a verdict")?;
    ensure(combined == verdict, "self-combination should be a no-op")?;
    Ok(())
}

// ============================================================================
// SECTION: Properties
// ============================================================================

fn grade_strategy() -> impl Strategy<Value = Grade> {
    prop::sample::select(Grade::ALL.to_vec())
}

fn mode_strategy() -> impl Strategy<Value = PrecedenceMode> {
    prop_oneof![Just(PrecedenceMode::Standard), Just(PrecedenceMode::FailBeforeUndetermined)]
}

proptest! {
    #[test]
    fn combined_grade_is_best_and_order_insensitive(
        grades in prop::collection::vec(grade_strategy(), 1..8),
        mode in mode_strategy(),
    ) {
        let forward: Vec<Verdict> =
            grades.iter().enumerate().map(|(i, g)| labelled(*g, &i.to_string())).collect();
        let mut backward = forward.clone();
        backward.reverse();

        let lhs = combine(forward, &mode).unwrap();
        let rhs = combine(backward, &mode).unwrap();
        prop_assert_eq!(lhs.grade(), rhs.grade());
        for grade in &grades {
            prop_assert!(mode.rank(lhs.grade()) >= mode.rank(*grade));
        }
        let winners = grades.iter().filter(|g| **g == lhs.grade()).count();
        prop_assert_eq!(lhs.specific_messages().len(), winners);
    }
}
