//! Config defaults and core validation tests for molecular-gate-config.
// crates/molecular-gate-config/tests/config_defaults.rs
// =============================================================================
// Module: Config Defaults and Core Validation Tests
// Description: Validate default behavior and core config invariants.
// Purpose: Ensure an empty config matches engine defaults and bad values fail.
// =============================================================================

use molecular_gate_config::MolecularGateConfig;
use molecular_gate_core::EvaluationSettings;
use molecular_gate_core::PrecedenceMode;

mod common;

use common::TestResult;
use common::assert_invalid;

#[test]
fn default_config_validates() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn default_config_matches_engine_defaults() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    if config.evaluation_settings() != EvaluationSettings::default() {
        return Err("empty config should produce default evaluation settings".to_string());
    }
    if config.audit.enabled || !config.audit.hash_history || config.audit.path.is_some() {
        return Err("audit defaults should be disabled with history hashing".to_string());
    }
    Ok(())
}

#[test]
fn partial_sections_keep_remaining_defaults() -> TestResult {
    let config = common::config_from_toml(
        r#"
[selection]
max_test_age_days = 365

[gene_sets]
msi_genes = [" MLH1 ", "MSH2"]
"#,
    )
    .map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    let settings = config.evaluation_settings();
    if settings.max_test_age_days != Some(365) || !settings.most_recent_only {
        return Err("selection section not applied".to_string());
    }
    let msi: Vec<&str> = settings.msi_genes.iter().map(String::as_str).collect();
    if msi != ["MLH1", "MSH2"] {
        return Err(format!("unexpected msi genes {msi:?}"));
    }
    if settings.hrd_genes != EvaluationSettings::default().hrd_genes {
        return Err("hrd genes should keep defaults".to_string());
    }
    Ok(())
}

#[test]
fn precedence_mode_parses() -> TestResult {
    let toml_str = "[combination]\nprecedence = \"fail_before_undetermined\"";
    let config = common::config_from_toml(toml_str).map_err(|err| err.to_string())?;
    if config.evaluation_settings().precedence != PrecedenceMode::FailBeforeUndetermined {
        return Err("precedence mode not applied".to_string());
    }
    if common::config_from_toml("[combination]\nprecedence = \"fail_first\"").is_ok() {
        return Err("unknown precedence should fail to parse".to_string());
    }
    Ok(())
}

#[test]
fn zero_max_test_age_is_rejected() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.selection.max_test_age_days = Some(0);
    assert_invalid(config.validate(), "selection.max_test_age_days must be greater than zero")
}

#[test]
fn clonal_cutoff_outside_unit_interval_is_rejected() -> TestResult {
    for value in [1.5, -0.1, f64::NAN] {
        let mut config = common::minimal_config().map_err(|err| err.to_string())?;
        config.thresholds.clonal_cutoff = value;
        assert_invalid(config.validate(), "thresholds.clonal_cutoff must be within [0, 1]")?;
    }
    Ok(())
}

#[test]
fn assumed_full_gain_copies_must_be_positive() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.thresholds.assumed_full_gain_copies = 0;
    assert_invalid(config.validate(), "thresholds.assumed_full_gain_copies must be within")
}

#[test]
fn gene_sets_reject_blank_and_duplicate_symbols() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.gene_sets.hrd_genes = vec!["BRCA1".to_string(), "  ".to_string()];
    assert_invalid(config.validate(), "gene_sets.hrd_genes contains an empty gene symbol")?;

    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.gene_sets.msi_genes = vec!["MLH1".to_string(), " MLH1".to_string()];
    assert_invalid(config.validate(), "gene_sets.msi_genes contains duplicate gene MLH1")
}

#[test]
fn audit_path_requires_enabled_audit() -> TestResult {
    let config = common::config_from_toml("[audit]\npath = \"audit.jsonl\"")
        .map_err(|err| err.to_string())?;
    assert_invalid(config.validate(), "audit.path requires audit.enabled=true")
}

#[test]
fn disabled_audit_builds_a_sink() -> TestResult {
    let config = MolecularGateConfig::default();
    config.build_audit_sink().map_err(|err| err.to_string())?;
    Ok(())
}
