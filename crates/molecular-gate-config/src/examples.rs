// crates/molecular-gate-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic example for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example `molecular-gate.toml`. Every key is spelled out with its
//! default value unless noted, so the example doubles as reference docs.

/// Returns a canonical example `molecular-gate.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[selection]
# Drop tests older than this many days; omit to disable the cutoff.
max_test_age_days = 730
most_recent_only = true

[thresholds]
clonal_cutoff = 0.5
assumed_full_gain_copies = 5

[gene_sets]
hrd_genes = ["BRCA1", "BRCA2", "PALB2", "RAD51B", "RAD51C"]
msi_genes = ["MLH1", "MSH2", "MSH6", "PMS2", "EPCAM"]

[combination]
# "standard" or "fail_before_undetermined"
precedence = "standard"

[audit]
enabled = true
# JSON lines are appended here; omit to log to stderr.
path = "molecular-gate-audit.jsonl"
hash_history = true
"#,
    )
}
