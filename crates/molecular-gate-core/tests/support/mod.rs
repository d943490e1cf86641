// crates/molecular-gate-core/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers and record fixtures for core tests.
// ============================================================================
//! ## Overview
//! Result-based assertion helpers plus small builders for molecular tests,
//! drivers, and histories.

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
#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::error::Error;
use std::fmt;

use molecular_gate_core::CodingEffect;
use molecular_gate_core::CopyNumber;
use molecular_gate_core::CopyNumberImpact;
use molecular_gate_core::CopyNumberType;
use molecular_gate_core::DriverEvidence;
use molecular_gate_core::ExperimentKind;
use molecular_gate_core::MolecularHistory;
use molecular_gate_core::MolecularTest;
use molecular_gate_core::TargetSpecification;
use molecular_gate_core::TestTarget;
use molecular_gate_core::TranscriptVariantImpact;
use molecular_gate_core::Variant;
use time::Date;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across core integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

// ========================================================================
// Record Fixtures
// ========================================================================

/// Builds a dated whole-genome test with no findings.
pub fn wgs(id: &str, date: Date) -> MolecularTest {
    let mut test = MolecularTest::new(id, ExperimentKind::WholeGenome);
    test.date = Some(date);
    test
}

/// Builds a dated panel assaying `genes` for the listed mechanisms.
pub fn panel(id: &str, date: Option<Date>, genes: &[(&str, &[TestTarget])]) -> MolecularTest {
    let mut test = MolecularTest::new(id, ExperimentKind::TargetedPanel);
    test.date = date;
    let spec = genes.iter().fold(TargetSpecification::new(), |spec, (gene, targets)| {
        spec.with_gene(*gene, targets.iter().copied())
    });
    test.target_specification = Some(spec);
    test
}

/// Builds a reportable full-gain copy number with known bounds.
pub fn amplification(gene: &str, min: Option<u32>, max: Option<u32>) -> CopyNumber {
    CopyNumber {
        evidence: DriverEvidence::reportable(gene),
        canonical_impact: CopyNumberImpact {
            kind: CopyNumberType::FullGain,
            min_copies: min,
            max_copies: max,
        },
        other_impacts: Vec::new(),
    }
}

/// Builds a reportable copy-number deletion.
pub fn deletion(gene: &str) -> CopyNumber {
    CopyNumber {
        evidence: DriverEvidence::reportable(gene),
        canonical_impact: CopyNumberImpact {
            kind: CopyNumberType::Deletion,
            min_copies: Some(0),
            max_copies: Some(0),
        },
        other_impacts: Vec::new(),
    }
}

/// Builds a transcript impact with the given effect and codon.
pub fn impact(effect: CodingEffect, change: &str, codon: u32) -> TranscriptVariantImpact {
    TranscriptVariantImpact {
        transcript_id: "ENST00000000001".to_string(),
        coding_effect: effect,
        protein_change: Some(change.to_string()),
        affected_codon: Some(codon),
        affected_exon: None,
    }
}

/// Builds a reportable missense variant on the canonical transcript.
pub fn missense(gene: &str, change: &str, codon: u32) -> Variant {
    Variant {
        evidence: DriverEvidence::reportable(gene),
        is_biallelic: None,
        canonical_impact: Some(impact(CodingEffect::Missense, change, codon)),
        other_impacts: Vec::new(),
    }
}

/// Builds a validated history, failing the test on invalid records.
pub fn history(tests: Vec<MolecularTest>) -> TestResult<MolecularHistory> {
    Ok(MolecularHistory::new(tests)?)
}
