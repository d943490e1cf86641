// crates/molecular-gate-core/src/core/settings.rs
// ============================================================================
// Module: Evaluation Settings
// Description: Thresholds, gene sets, and selection policy for evaluation.
// Purpose: Keep evaluation a pure function of explicit configuration.
// Dependencies: graded-logic, serde
// ============================================================================

//! ## Overview
//! [`EvaluationSettings`] gathers every tunable value the engine reads. The
//! defaults below are also the defaults of the configuration file.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use graded_logic::PrecedenceMode;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default clonal-likelihood cutoff.
pub const DEFAULT_CLONAL_CUTOFF: f64 = 0.5;
/// Default copy number assumed for a full gain of unknown magnitude.
pub const DEFAULT_ASSUMED_FULL_GAIN_COPIES: u32 = 5;
/// Default homologous-recombination gene set.
pub const DEFAULT_HRD_GENES: [&str; 5] = ["BRCA1", "BRCA2", "PALB2", "RAD51B", "RAD51C"];
/// Default mismatch-repair gene set.
pub const DEFAULT_MSI_GENES: [&str; 5] = ["MLH1", "MSH2", "MSH6", "PMS2", "EPCAM"];

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Settings consumed by the criterion engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSettings {
    /// Maximum test age in days; `None` disables the cutoff.
    pub max_test_age_days: Option<u32>,
    /// Evaluate only the latest comprehensive test.
    pub most_recent_only: bool,
    /// Clonal likelihood below this value counts as subclonal.
    pub clonal_cutoff: f64,
    /// Copy number assumed for a full gain whose exact value is unknown.
    pub assumed_full_gain_copies: u32,
    /// Genes whose inactivation supports an HRD call.
    pub hrd_genes: BTreeSet<String>,
    /// Genes whose inactivation supports an MSI call.
    pub msi_genes: BTreeSet<String>,
    /// Grade precedence used when combining verdicts.
    pub precedence: PrecedenceMode,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            max_test_age_days: None,
            most_recent_only: true,
            clonal_cutoff: DEFAULT_CLONAL_CUTOFF,
            assumed_full_gain_copies: DEFAULT_ASSUMED_FULL_GAIN_COPIES,
            hrd_genes: DEFAULT_HRD_GENES.iter().map(ToString::to_string).collect(),
            msi_genes: DEFAULT_MSI_GENES.iter().map(ToString::to_string).collect(),
            precedence: PrecedenceMode::default(),
        }
    }
}
