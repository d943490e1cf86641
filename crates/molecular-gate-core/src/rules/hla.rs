// crates/molecular-gate-core/src/rules/hla.rs
// ============================================================================
// Module: HLA Rule
// Description: HLA class I allele criterion.
// Purpose: Grade typed alleles by typing reliability and tumor retention.
// Dependencies: crate::{core, interfaces, runtime::tiered}, graded-logic
// ============================================================================

//! ## Overview
//! An allele typed with reliable quality and retained in the tumor passes.
//! Unreliable typing or tumor loss reduce the match to a warning; an
//! untyped or unreliable record cannot rule the allele out.

// ============================================================================
// SECTION: Imports
// ============================================================================

use graded_logic::Verdict;

use crate::core::ExperimentKind;
use crate::interfaces::EvaluationContext;
use crate::interfaces::MolecularRule;
use crate::runtime::tiered::Candidate;
use crate::runtime::tiered::TieredAssessment;
use crate::runtime::tiered::Weakness;
use crate::runtime::tiered::grade;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Tumor copy number below which an allele counts as lost.
pub const HLA_TUMOR_LOSS_COPY_NUMBER: f64 = 0.5;

// ============================================================================
// SECTION: Rule
// ============================================================================

/// Patient carries an HLA allele, e.g. `A*02:01`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasHlaAllele {
    /// Allele name.
    allele: String,
}

impl HasHlaAllele {
    /// Creates the rule.
    #[must_use]
    pub fn new(allele: impl Into<String>) -> Self {
        Self {
            allele: allele.into(),
        }
    }
}

impl MolecularRule for HasHlaAllele {
    fn label(&self) -> String {
        format!("HLA allele {}", self.allele)
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict {
        let Some(record) = ctx.drivers().hla.as_ref() else {
            return grade(&self.label(), &TieredAssessment::unconfirmable("HLA not typed"));
        };
        let assessment = if record.is_reliable {
            TieredAssessment::for_quality(ctx.can_assert_absence())
        } else {
            TieredAssessment::unconfirmable("unreliable HLA typing")
        };
        let event = format!("HLA-{}", self.allele);
        let candidates =
            record.alleles.iter().filter(|allele| allele.name == self.allele).map(|allele| {
                Candidate::new(format!("Has HLA-{}", self.allele), event.as_str())
                    .with_weaknesses((!record.is_reliable).then_some(Weakness::IndirectEvidence))
                    .with_weaknesses(
                        (allele.tumor_copy_number < HLA_TUMOR_LOSS_COPY_NUMBER)
                            .then_some(Weakness::TumorLoss),
                    )
            });
        grade(&self.label(), &assessment.with_candidates(candidates))
    }

    fn supports(&self, experiment: ExperimentKind) -> bool {
        experiment.is_comprehensive()
    }
}
