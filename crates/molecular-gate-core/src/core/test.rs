// crates/molecular-gate-core/src/core/test.rs
// ============================================================================
// Module: Molecular Tests
// Description: One performed assay with its findings and quality flags.
// Purpose: Define the immutable record consumed by selection and evaluation.
// Dependencies: crate::core::{coverage, drivers, identifiers}, serde, thiserror, time
// ============================================================================

//! ## Overview
//! A [`MolecularTest`] is one assay: its experiment kind, optional performed
//! date, quality flags, panel target specification, and [`Drivers`].
//! Records are validated once at history construction; evaluation assumes
//! well-formed findings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use time::Date;

use crate::core::coverage::TargetSpecification;
use crate::core::drivers::DriverEvidence;
use crate::core::drivers::Drivers;
use crate::core::identifiers::TestId;

// ============================================================================
// SECTION: Experiment Kind
// ============================================================================

/// Assay modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentKind {
    /// Whole-genome sequencing.
    WholeGenome,
    /// Whole-transcriptome sequencing.
    WholeTranscriptome,
    /// Targeted gene panel.
    TargetedPanel,
    /// Single-marker immunohistochemistry-style test.
    Immunohistochemistry,
}

impl ExperimentKind {
    /// Returns true for whole-genome and whole-transcriptome profiles.
    #[must_use]
    pub const fn is_comprehensive(self) -> bool {
        matches!(self, Self::WholeGenome | Self::WholeTranscriptome)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when a molecular record violates its invariants.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A finding has an empty gene symbol.
    #[error("test {test_id}: finding with empty gene symbol")]
    EmptyGene {
        /// Offending test.
        test_id: String,
    },
    /// Clonal likelihood is outside `[0, 1]` or not finite.
    #[error("test {test_id}: clonal likelihood {value} for {gene} is outside [0, 1]")]
    ClonalLikelihood {
        /// Offending test.
        test_id: String,
        /// Gene of the finding.
        gene: String,
        /// Reported value.
        value: String,
    },
    /// Copy-number bounds are inverted.
    #[error("test {test_id}: min copies {min} above max copies {max} for {gene}")]
    CopyNumberBounds {
        /// Offending test.
        test_id: String,
        /// Gene of the finding.
        gene: String,
        /// Reported minimum.
        min: u32,
        /// Reported maximum.
        max: u32,
    },
    /// A scalar measurement is NaN or infinite.
    #[error("test {test_id}: {field} is not finite")]
    NonFinite {
        /// Offending test.
        test_id: String,
        /// Field name.
        field: String,
    },
    /// Two tests share an identifier.
    #[error("duplicate test id: {0}")]
    DuplicateTestId(String),
}

// ============================================================================
// SECTION: Molecular Test
// ============================================================================

/// One performed molecular assay.
///
/// # Invariants
/// - Validated by [`MolecularTest::validate`] before evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MolecularTest {
    /// Test identifier.
    pub test_id: TestId,
    /// Assay modality.
    pub experiment: ExperimentKind,
    /// Date the test was performed; `None` when unknown.
    pub date: Option<Date>,
    /// Whether tumor purity permits asserting absence of findings.
    pub has_sufficient_purity: bool,
    /// Whether sequencing quality permits asserting absence of findings.
    pub has_sufficient_quality: bool,
    /// Genes and mechanisms assayed (non-comprehensive tests only).
    #[serde(default)]
    pub target_specification: Option<TargetSpecification>,
    /// Reported findings.
    #[serde(default)]
    pub drivers: Drivers,
}

impl MolecularTest {
    /// Creates an undated, good-quality test with no findings.
    #[must_use]
    pub fn new(test_id: impl Into<TestId>, experiment: ExperimentKind) -> Self {
        Self {
            test_id: test_id.into(),
            experiment,
            date: None,
            has_sufficient_purity: true,
            has_sufficient_quality: true,
            target_specification: None,
            drivers: Drivers::default(),
        }
    }

    /// Returns true when a negative result can be trusted.
    #[must_use]
    pub const fn can_assert_absence(&self) -> bool {
        self.has_sufficient_purity && self.has_sufficient_quality
    }

    /// Returns true when the test assayed `gene` for at least one mechanism.
    ///
    /// Comprehensive tests cover every gene; other tests cover only the genes
    /// listed in their target specification.
    #[must_use]
    pub fn covers_gene(&self, gene: &str) -> bool {
        if self.experiment.is_comprehensive() {
            return true;
        }
        self.target_specification.as_ref().is_some_and(|spec| spec.covers_gene(gene))
    }

    /// Checks record invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] describing the first violated invariant.
    pub fn validate(&self) -> Result<(), RecordError> {
        let test_id = self.test_id.as_str();
        for evidence in self.drivers.gene_evidence() {
            validate_evidence(test_id, evidence)?;
        }
        for copy_number in &self.drivers.copy_numbers {
            let impacts = std::iter::once(&copy_number.canonical_impact)
                .chain(copy_number.other_impacts.iter());
            for impact in impacts {
                if let (Some(min), Some(max)) = (impact.min_copies, impact.max_copies)
                    && min > max
                {
                    return Err(RecordError::CopyNumberBounds {
                        test_id: test_id.to_string(),
                        gene: copy_number.evidence.gene.clone(),
                        min,
                        max,
                    });
                }
            }
        }
        let fusion_genes = self
            .drivers
            .fusions
            .iter()
            .flat_map(|fusion| [&fusion.five_prime_gene, &fusion.three_prime_gene])
            .chain(self.drivers.pharmaco.iter().map(|entry| &entry.gene));
        for gene in fusion_genes {
            if gene.trim().is_empty() {
                return Err(RecordError::EmptyGene {
                    test_id: test_id.to_string(),
                });
            }
        }
        if let Some(field) = self.drivers.characteristics.first_non_finite() {
            return Err(RecordError::NonFinite {
                test_id: test_id.to_string(),
                field: field.to_string(),
            });
        }
        if let Some(hla) = &self.drivers.hla
            && let Some(allele) =
                hla.alleles.iter().find(|allele| !allele.tumor_copy_number.is_finite())
        {
            return Err(RecordError::NonFinite {
                test_id: test_id.to_string(),
                field: format!("tumor copy number of HLA-{}", allele.name),
            });
        }
        Ok(())
    }
}

/// Checks the invariants shared by every gene-level finding.
fn validate_evidence(test_id: &str, evidence: &DriverEvidence) -> Result<(), RecordError> {
    if evidence.gene.trim().is_empty() {
        return Err(RecordError::EmptyGene {
            test_id: test_id.to_string(),
        });
    }
    if let Some(value) = evidence.clonal_likelihood
        && !(0.0..=1.0).contains(&value)
    {
        return Err(RecordError::ClonalLikelihood {
            test_id: test_id.to_string(),
            gene: evidence.gene.clone(),
            value: value.to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// SECTION: Ordering
// ============================================================================

/// Orders tests most-recent-first, undated last, ties broken by test id.
#[must_use]
pub fn cmp_recency(lhs: &MolecularTest, rhs: &MolecularTest) -> Ordering {
    let by_date = match (lhs.date, rhs.date) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date.then_with(|| lhs.test_id.cmp(&rhs.test_id))
}
