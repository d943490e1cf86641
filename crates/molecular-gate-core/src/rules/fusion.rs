// crates/molecular-gate-core/src/rules/fusion.rs
// ============================================================================
// Module: Fusion Rules
// Description: Fusion-partner and specific-fusion criteria.
// Purpose: Grade fusions by reportability and driver likelihood.
// Dependencies: crate::{core, interfaces, runtime::tiered}, graded-logic
// ============================================================================

//! ## Overview
//! Fusions are transcript-agnostic and carry no clonality, so only
//! reportability and driver likelihood weaken them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use graded_logic::Verdict;

use super::driver_likelihood_weakness;
use crate::core::CoveragePredicate;
use crate::core::Fusion;
use crate::core::GeneCoverage;
use crate::core::TestTarget;
use crate::interfaces::EvaluationContext;
use crate::interfaces::MolecularRule;
use crate::runtime::tiered::Candidate;
use crate::runtime::tiered::TieredAssessment;
use crate::runtime::tiered::Weakness;
use crate::runtime::tiered::grade;

// ============================================================================
// SECTION: Shared Walk
// ============================================================================

/// Collects every fusion accepted by `matches` as a candidate.
fn fusion_assessment(
    ctx: &EvaluationContext<'_>,
    matches: impl Fn(&Fusion) -> bool,
) -> TieredAssessment {
    let candidates = ctx.drivers().fusions.iter().filter(|fusion| matches(fusion)).map(|fusion| {
        let event = fusion.event();
        Candidate::new(event.clone(), event)
            .with_weaknesses((!fusion.is_reportable).then_some(Weakness::NotReportable))
            .with_weaknesses(driver_likelihood_weakness(fusion.driver_likelihood))
    });
    TieredAssessment::for_quality(ctx.can_assert_absence()).with_candidates(candidates)
}

/// Coverage requirement for fusions involving `gene`.
fn fusion_coverage(gene: &str) -> GeneCoverage {
    GeneCoverage::new(gene, CoveragePredicate::AtLeast(TestTarget::Fusion))
}

// ============================================================================
// SECTION: Fusion In Gene
// ============================================================================

/// Gene takes part in a fusion with any partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasFusionInGene {
    /// Gene symbol.
    gene: String,
}

impl HasFusionInGene {
    /// Creates the rule.
    #[must_use]
    pub fn new(gene: impl Into<String>) -> Self {
        Self {
            gene: gene.into(),
        }
    }
}

impl MolecularRule for HasFusionInGene {
    fn label(&self) -> String {
        format!("fusion in {}", self.gene)
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict {
        let assessment = fusion_assessment(ctx, |fusion| fusion.involves(&self.gene));
        grade(&self.label(), &assessment)
    }

    fn coverage(&self) -> Vec<GeneCoverage> {
        vec![fusion_coverage(&self.gene)]
    }
}

// ============================================================================
// SECTION: Specific Fusion
// ============================================================================

/// Fusion of a given five-prime partner with a given three-prime partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasSpecificFusion {
    /// Five-prime partner gene.
    five_prime: String,
    /// Three-prime partner gene.
    three_prime: String,
}

impl HasSpecificFusion {
    /// Creates the rule.
    #[must_use]
    pub fn new(five_prime: impl Into<String>, three_prime: impl Into<String>) -> Self {
        Self {
            five_prime: five_prime.into(),
            three_prime: three_prime.into(),
        }
    }
}

impl MolecularRule for HasSpecificFusion {
    fn label(&self) -> String {
        format!("{}::{} fusion", self.five_prime, self.three_prime)
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict {
        let assessment = fusion_assessment(ctx, |fusion| {
            fusion.five_prime_gene == self.five_prime && fusion.three_prime_gene == self.three_prime
        });
        grade(&self.label(), &assessment)
    }

    fn coverage(&self) -> Vec<GeneCoverage> {
        vec![fusion_coverage(&self.five_prime), fusion_coverage(&self.three_prime)]
    }
}
