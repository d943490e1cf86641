// crates/molecular-gate-core/src/core/criterion.rs
// ============================================================================
// Module: Criterion Parameters
// Description: Serde-tagged parameters of the supported molecular rules.
// Purpose: Let callers describe a criterion as data and have it instantiated.
// Dependencies: crate::core::{drivers, identifiers}, serde
// ============================================================================

//! ## Overview
//! [`CriterionParameters`] is a closed catalogue: each variant names one leaf
//! rule and carries its parameters. Parameters serialize with a `rule` tag so
//! trial definitions can be stored as JSON or TOML.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::drivers::VirusKind;
use crate::core::identifiers::CriterionId;

// ============================================================================
// SECTION: Parameters
// ============================================================================

/// Parameters of one molecular leaf rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum CriterionParameters {
    /// Gene is amplified, optionally to at least `min_copies`.
    GeneIsAmplified {
        /// Gene symbol.
        gene: String,
        /// Minimum absolute copy number; any full gain qualifies when absent.
        #[serde(default)]
        min_copies: Option<u32>,
    },
    /// Gene is deleted or homozygously disrupted.
    GeneIsDeleted {
        /// Gene symbol.
        gene: String,
    },
    /// Gene carries an activating mutation.
    GeneHasActivatingMutation {
        /// Gene symbol.
        gene: String,
        /// Codons whose mutations do not count.
        #[serde(default)]
        codons_to_ignore: Vec<u32>,
    },
    /// Gene carries a protein-changing variant in one of `codons`.
    GeneHasVariantInCodon {
        /// Gene symbol.
        gene: String,
        /// Target codons.
        codons: Vec<u32>,
    },
    /// Gene carries a protein-changing variant in `exon`.
    GeneHasVariantInExon {
        /// Gene symbol.
        gene: String,
        /// Target exon.
        exon: u32,
    },
    /// Gene is inactivated by loss, disruption, or truncating variants.
    GeneIsInactivated {
        /// Gene symbol.
        gene: String,
    },
    /// Gene takes part in any fusion.
    HasFusionInGene {
        /// Gene symbol.
        gene: String,
    },
    /// A specific five-prime/three-prime fusion is present.
    HasSpecificFusion {
        /// Five-prime partner.
        five_prime: String,
        /// Three-prime partner.
        three_prime: String,
    },
    /// Tumor is homologous-recombination deficient.
    HomologousRecombinationDeficient,
    /// Tumor is microsatellite unstable.
    MicrosatelliteUnstable,
    /// Tumor mutational burden is at least `min_burden`.
    TumorMutationalBurdenAtLeast {
        /// Minimum mutations per megabase.
        min_burden: f64,
    },
    /// Patient carries an HLA allele.
    HasHlaAllele {
        /// Allele name, e.g. `A*02:01`.
        allele: String,
    },
    /// Patient carries a pharmacogenomic haplotype.
    HasPharmacogenomicHaplotype {
        /// Pharmacogene symbol.
        gene: String,
        /// Haplotype name.
        haplotype: String,
    },
    /// Tumor carries a virus of the given family.
    HasViralPresence {
        /// Virus family.
        kind: VirusKind,
    },
}

/// A molecular criterion as referenced by an eligibility tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    /// Criterion identifier.
    pub id: CriterionId,
    /// Rule parameters.
    pub parameters: CriterionParameters,
}

impl Criterion {
    /// Creates a criterion.
    #[must_use]
    pub fn new(id: impl Into<CriterionId>, parameters: CriterionParameters) -> Self {
        Self {
            id: id.into(),
            parameters,
        }
    }
}
