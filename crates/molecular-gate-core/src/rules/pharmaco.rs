// crates/molecular-gate-core/src/rules/pharmaco.rs
// ============================================================================
// Module: Pharmacogenomic Rule
// Description: Haplotype criterion for pharmacogenes.
// Purpose: Grade haplotype calls from pharmacogenomic typing.
// Dependencies: crate::{core, interfaces, runtime::tiered}, graded-logic
// ============================================================================

//! ## Overview
//! A gene absent from the typing result cannot be ruled out.

// ============================================================================
// SECTION: Imports
// ============================================================================

use graded_logic::Verdict;

use crate::core::ExperimentKind;
use crate::interfaces::EvaluationContext;
use crate::interfaces::MolecularRule;
use crate::runtime::tiered::Candidate;
use crate::runtime::tiered::TieredAssessment;
use crate::runtime::tiered::grade;

// ============================================================================
// SECTION: Rule
// ============================================================================

/// Pharmacogene carries a haplotype, e.g. `DPYD *2A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasPharmacogenomicHaplotype {
    /// Pharmacogene symbol.
    gene: String,
    /// Haplotype name.
    haplotype: String,
}

impl HasPharmacogenomicHaplotype {
    /// Creates the rule.
    #[must_use]
    pub fn new(gene: impl Into<String>, haplotype: impl Into<String>) -> Self {
        Self {
            gene: gene.into(),
            haplotype: haplotype.into(),
        }
    }
}

impl MolecularRule for HasPharmacogenomicHaplotype {
    fn label(&self) -> String {
        format!("{} haplotype {}", self.gene, self.haplotype)
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict {
        let mut entries =
            ctx.drivers().pharmaco.iter().filter(|entry| entry.gene == self.gene).peekable();
        if entries.peek().is_none() {
            let assessment = TieredAssessment::unconfirmable(format!("{} not typed", self.gene));
            return grade(&self.label(), &assessment);
        }
        let event = format!("{} {}", self.gene, self.haplotype);
        let candidates = entries
            .flat_map(|entry| entry.haplotypes.iter())
            .filter(|haplotype| haplotype.name == self.haplotype)
            .map(|haplotype| {
                Candidate::new(format!("{event} ({})", haplotype.function), event.as_str())
            });
        let assessment =
            TieredAssessment::for_quality(ctx.can_assert_absence()).with_candidates(candidates);
        grade(&self.label(), &assessment)
    }

    fn supports(&self, experiment: ExperimentKind) -> bool {
        experiment.is_comprehensive()
    }
}
