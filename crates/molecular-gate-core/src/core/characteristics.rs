// crates/molecular-gate-core/src/core/characteristics.rs
// ============================================================================
// Module: Molecular Characteristics
// Description: Scalar tumor-level measurements reported by a test.
// Purpose: Carry TMB, TML, MSI, HRD, ploidy, and purity values.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every field is optional: a missing value means the test did not measure
//! it, which rules treat as "cannot assert absence" rather than as negative.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Characteristics
// ============================================================================

/// Scalar tumor characteristics.
///
/// # Invariants
/// - Numeric fields are finite when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MolecularCharacteristics {
    /// Tumor purity fraction.
    pub purity: Option<f64>,
    /// Average tumor ploidy.
    pub ploidy: Option<f64>,
    /// Tumor mutational burden (mutations per megabase).
    pub tumor_mutational_burden: Option<f64>,
    /// Tumor mutational load (missense count).
    pub tumor_mutational_load: Option<u32>,
    /// Microsatellite instability status.
    pub is_microsatellite_unstable: Option<bool>,
    /// Homologous recombination deficiency status.
    pub is_homologous_recombination_deficient: Option<bool>,
}

impl MolecularCharacteristics {
    /// Returns the name of the first non-finite numeric field, if any.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("purity", self.purity),
            ("ploidy", self.ploidy),
            ("tumor_mutational_burden", self.tumor_mutational_burden),
        ]
        .into_iter()
        .find_map(|(name, value)| value.filter(|value| !value.is_finite()).map(|_| name))
    }
}
