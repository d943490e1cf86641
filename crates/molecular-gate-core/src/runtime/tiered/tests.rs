// crates/molecular-gate-core/src/runtime/tiered/tests.rs
// ============================================================================
// Module: Tiered Evaluation Unit Tests
// Description: Unit tests for tier selection and message formatting.
// Purpose: Pin the message shapes produced for each tier.
// Dependencies: graded-logic
// ============================================================================

//! ## Overview
//! Exercises tier selection and the private message helpers.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

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
    reason = "Test-only assertions."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use graded_logic::Grade;

use super::Candidate;
use super::TieredAssessment;
use super::Weakness;
use super::capitalize;
use super::grade;
use super::warn_message;

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Criterion phrase used throughout.
const LABEL: &str = "amplification of ERBB2";

/// Capitalization handles empty phrases.
#[test]
fn capitalize_handles_empty_and_ascii() {
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize(LABEL), "Amplification of ERBB2");
}

/// Warn messages append the weakness qualifier.
#[test]
fn warn_message_appends_qualifier() {
    let candidate =
        Candidate::new("ERBB2 amplified", "ERBB2 amp").with_weakness(Weakness::Subclonal);
    assert_eq!(warn_message(&candidate), "ERBB2 amplified (subclonal)");
}

/// Repeated weaknesses are stored once.
#[test]
fn duplicate_weaknesses_collapse() {
    let candidate = Candidate::new("x", "y")
        .with_weaknesses([Weakness::NotReportable, Weakness::NotReportable]);
    assert_eq!(candidate.weaknesses, [Weakness::NotReportable]);
}

/// A candidate without weaknesses passes and records its event.
#[test]
fn strong_candidate_passes_with_event() {
    let assessment = TieredAssessment::confirmable()
        .with_candidates([Candidate::new("ERBB2 amplified (8 copies)", "ERBB2 amp")]);
    let verdict = grade(LABEL, &assessment);
    assert_eq!(verdict.grade(), Grade::Pass);
    assert_eq!(verdict.specific_messages().as_slice(), ["ERBB2 amplified (8 copies)"]);
    assert_eq!(verdict.general_messages().as_slice(), ["Amplification of ERBB2"]);
    assert!(verdict.inclusion_events().contains("ERBB2 amp"));
}

/// Only strong candidates contribute to a pass.
#[test]
fn strong_candidate_outranks_weak_one() {
    let assessment = TieredAssessment::confirmable().with_candidates([
        Candidate::new("weak", "weak event").with_weakness(Weakness::PartialMatch),
        Candidate::new("strong", "strong event"),
    ]);
    let verdict = grade(LABEL, &assessment);
    assert_eq!(verdict.grade(), Grade::Pass);
    assert_eq!(verdict.specific_messages().as_slice(), ["strong"]);
    assert!(!verdict.inclusion_events().contains("weak event"));
}

/// A single weakness downgrades to warn.
#[test]
fn single_weakness_warns() {
    let assessment = TieredAssessment::confirmable().with_candidates([Candidate::new(
        "ERBB2 partially amplified",
        "ERBB2 amp",
    )
    .with_weakness(Weakness::PartialMatch)]);
    let verdict = grade(LABEL, &assessment);
    assert_eq!(verdict.grade(), Grade::Warn);
    assert_eq!(
        verdict.specific_messages().as_slice(),
        ["ERBB2 partially amplified (partial match)"]
    );
    assert_eq!(verdict.general_messages().as_slice(), ["Potential amplification of ERBB2"]);
}

/// Two weaknesses disqualify a candidate.
#[test]
fn doubly_weak_candidate_does_not_qualify() {
    let doubly_weak = Candidate::new("ERBB2 amplified", "ERBB2 amp")
        .with_weaknesses([Weakness::NotReportable, Weakness::Subclonal]);
    let confirmable = TieredAssessment::confirmable().with_candidates([doubly_weak.clone()]);
    assert_eq!(grade(LABEL, &confirmable).grade(), Grade::Fail);

    let unconfirmable = TieredAssessment::unconfirmable("insufficient purity or quality")
        .with_candidates([doubly_weak]);
    assert_eq!(grade(LABEL, &unconfirmable).grade(), Grade::Undetermined);
}

/// Absence messages depend on whether absence is confirmable.
#[test]
fn absence_messages() {
    let fail = grade(LABEL, &TieredAssessment::for_quality(true));
    assert_eq!(fail.grade(), Grade::Fail);
    assert_eq!(fail.general_messages().as_slice(), ["No amplification of ERBB2"]);

    let undetermined = grade(LABEL, &TieredAssessment::for_quality(false));
    assert_eq!(undetermined.grade(), Grade::Undetermined);
    assert_eq!(
        undetermined.specific_messages().as_slice(),
        ["Amplification of ERBB2 undetermined (insufficient purity or quality)"]
    );
    assert_eq!(undetermined.general_messages().as_slice(), ["Amplification of ERBB2 undetermined"]);
}
