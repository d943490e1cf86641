// crates/molecular-gate-core/tests/records.rs
// ============================================================================
// Module: Record Validation Tests
// Description: Construction-time validation and canonical hashing of records.
// ============================================================================
//! ## Overview
//! Malformed molecular records must be rejected when a history is built or
//! decoded; well-formed histories hash deterministically.

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

use molecular_gate_core::Fusion;
use molecular_gate_core::HlaAllele;
use molecular_gate_core::HlaRecord;
use molecular_gate_core::MolecularHistory;
use molecular_gate_core::MolecularTest;
use molecular_gate_core::RecordError;
use molecular_gate_core::cmp_recency;
use molecular_gate_core::hash_history;
use support::TestResult;
use support::amplification;
use support::ensure;
use support::history;
use support::missense;
use support::panel;
use support::wgs;
use time::macros::date;

/// Builds a dated whole-genome test.
fn genome(id: &str) -> MolecularTest {
    wgs(id, date!(2025 - 06 - 01))
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Verifies empty gene symbols are rejected for every finding kind.
#[test]
fn empty_gene_is_rejected() -> TestResult {
    let mut variant_test = genome("variant");
    variant_test.drivers.variants.push(missense(" ", "V600E", 600));
    let err = MolecularHistory::new(vec![variant_test]).err().ok_or("expected an error")?;
    ensure(matches!(err, RecordError::EmptyGene { .. }), format!("unexpected error {err}"))?;

    let mut fusion_test = genome("fusion");
    fusion_test.drivers.fusions.push(Fusion {
        five_prime_gene: "EML4".to_string(),
        three_prime_gene: String::new(),
        is_reportable: true,
        driver_likelihood: None,
    });
    let err = MolecularHistory::new(vec![fusion_test]).err().ok_or("expected an error")?;
    ensure(err.to_string() == "test fusion: finding with empty gene symbol", err.to_string())
}

/// Verifies clonal likelihood must lie in the unit interval.
#[test]
fn clonal_likelihood_out_of_range_is_rejected() -> TestResult {
    for value in [1.5, -0.1, f64::NAN] {
        let mut test = genome("wgs");
        let mut variant = missense("BRAF", "V600E", 600);
        variant.evidence.clonal_likelihood = Some(value);
        test.drivers.variants.push(variant);
        let err = MolecularHistory::new(vec![test]).err().ok_or("expected an error")?;
        ensure(
            matches!(err, RecordError::ClonalLikelihood { ref gene, .. } if gene == "BRAF"),
            format!("unexpected error {err}"),
        )?;
    }
    Ok(())
}

/// Verifies inverted copy-number bounds are rejected.
#[test]
fn inverted_copy_number_bounds_are_rejected() -> TestResult {
    let mut test = genome("wgs");
    test.drivers.copy_numbers.push(amplification("ERBB2", Some(9), Some(4)));
    let err = MolecularHistory::new(vec![test]).err().ok_or("expected an error")?;
    ensure(
        matches!(err, RecordError::CopyNumberBounds { min: 9, max: 4, .. }),
        format!("unexpected error {err}"),
    )
}

/// Verifies non-finite scalars are rejected with the field name.
#[test]
fn non_finite_scalars_are_rejected() -> TestResult {
    let mut tmb = genome("wgs");
    tmb.drivers.characteristics.tumor_mutational_burden = Some(f64::INFINITY);
    let err = MolecularHistory::new(vec![tmb]).err().ok_or("expected an error")?;
    ensure(
        err.to_string() == "test wgs: tumor_mutational_burden is not finite",
        format!("unexpected error {err}"),
    )?;

    let mut hla = genome("wgs");
    hla.drivers.hla = Some(HlaRecord {
        is_reliable: true,
        alleles: vec![HlaAllele {
            name: "A*02:01".to_string(),
            tumor_copy_number: f64::NAN,
        }],
    });
    let err = MolecularHistory::new(vec![hla]).err().ok_or("expected an error")?;
    ensure(matches!(err, RecordError::NonFinite { .. }), format!("unexpected error {err}"))
}

/// Verifies duplicate test identifiers are rejected.
#[test]
fn duplicate_test_ids_are_rejected() -> TestResult {
    let err = MolecularHistory::new(vec![genome("same"), genome("same")])
        .err()
        .ok_or("expected an error")?;
    ensure(
        matches!(err, RecordError::DuplicateTestId(ref id) if id == "same"),
        format!("unexpected error {err}"),
    )
}

/// Verifies decoding validates records too.
#[test]
fn decoding_validates_records() -> TestResult {
    let valid = r#"[{
        "test_id": "wgs",
        "experiment": "whole_genome",
        "date": null,
        "has_sufficient_purity": true,
        "has_sufficient_quality": true
    }]"#;
    let decoded: MolecularHistory = serde_json::from_str(valid)?;
    ensure(decoded.len() == 1, "expected one decoded test")?;

    let duplicated = r#"[
        {"test_id": "a", "experiment": "targeted_panel", "date": null,
         "has_sufficient_purity": true, "has_sufficient_quality": true},
        {"test_id": "a", "experiment": "targeted_panel", "date": null,
         "has_sufficient_purity": true, "has_sufficient_quality": false}
    ]"#;
    let result = serde_json::from_str::<MolecularHistory>(duplicated);
    ensure(result.is_err(), "duplicate ids must fail to decode")
}

// ============================================================================
// SECTION: Hashing
// ============================================================================

/// Verifies identical histories hash identically and changes alter the hash.
#[test]
fn history_hash_is_deterministic() -> TestResult {
    let build = |copies: u32| -> TestResult<MolecularHistory> {
        let mut test = genome("wgs");
        test.drivers.copy_numbers.push(amplification("ERBB2", Some(copies), Some(copies)));
        history(vec![test])
    };

    let first = hash_history(&build(8)?)?;
    let second = hash_history(&build(8)?)?;
    let changed = hash_history(&build(9)?)?;

    ensure(first == second, "hash should be deterministic")?;
    ensure(first != changed, "hash should change with content")?;
    ensure(first.tests == 1, "digest should count the hashed tests")?;
    ensure(
        first.sha256.len() == 64
            && first.sha256.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
        "digest should be lowercase sha-256 hex",
    )
}

// ============================================================================
// SECTION: Ordering
// ============================================================================

/// Verifies recency ordering puts newer tests first and undated tests last.
#[test]
fn recency_ordering_is_total() -> TestResult {
    let mut tests = vec![
        panel("undated", None, &[]),
        wgs("older", date!(2024 - 01 - 01)),
        wgs("b-newer", date!(2025 - 01 - 01)),
        wgs("a-newer", date!(2025 - 01 - 01)),
    ];
    tests.sort_by(cmp_recency);
    let order: Vec<&str> = tests.iter().map(|test| test.test_id.as_str()).collect();
    ensure(
        order == ["a-newer", "b-newer", "older", "undated"],
        format!("unexpected order {order:?}"),
    )
}
