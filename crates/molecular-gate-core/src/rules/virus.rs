// crates/molecular-gate-core/src/rules/virus.rs
// ============================================================================
// Module: Viral Presence Rule
// Description: Virus-family presence criterion.
// Purpose: Grade viral findings by reportability, likelihood, and integration.
// Dependencies: crate::{core, interfaces, runtime::tiered}, graded-logic
// ============================================================================

//! ## Overview
//! Viral findings of the requested family weaken on reportability, driver
//! likelihood, and missing genomic integrations. Only comprehensive profiles
//! detect viral sequence, so panels are never consulted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use graded_logic::Verdict;

use super::driver_likelihood_weakness;
use crate::core::ExperimentKind;
use crate::core::VirusKind;
use crate::interfaces::EvaluationContext;
use crate::interfaces::MolecularRule;
use crate::runtime::tiered::Candidate;
use crate::runtime::tiered::TieredAssessment;
use crate::runtime::tiered::Weakness;
use crate::runtime::tiered::grade;

// ============================================================================
// SECTION: Rule
// ============================================================================

/// Tumor carries a virus of the given family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasViralPresence {
    /// Virus family.
    kind: VirusKind,
}

impl HasViralPresence {
    /// Creates the rule.
    #[must_use]
    pub const fn new(kind: VirusKind) -> Self {
        Self {
            kind,
        }
    }
}

impl MolecularRule for HasViralPresence {
    fn label(&self) -> String {
        format!("{} presence", self.kind.display())
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict {
        let display = self.kind.display();
        let candidates =
            ctx.drivers().viruses.iter().filter(|virus| virus.kind == self.kind).map(|virus| {
                let finding = format!(
                    "{display} presence ({}, {} integrations)",
                    virus.name, virus.integrations
                );
                Candidate::new(finding, format!("{display} positive"))
                    .with_weaknesses((!virus.is_reportable).then_some(Weakness::NotReportable))
                    .with_weaknesses(driver_likelihood_weakness(virus.driver_likelihood))
                    .with_weaknesses(
                        (virus.integrations == 0).then_some(Weakness::IndirectEvidence),
                    )
            });
        let assessment =
            TieredAssessment::for_quality(ctx.can_assert_absence()).with_candidates(candidates);
        grade(&self.label(), &assessment)
    }

    fn supports(&self, experiment: ExperimentKind) -> bool {
        experiment.is_comprehensive()
    }
}
