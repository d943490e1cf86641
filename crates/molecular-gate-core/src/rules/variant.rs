// crates/molecular-gate-core/src/rules/variant.rs
// ============================================================================
// Module: Variant Rules
// Description: Activating-mutation, codon, and exon criteria.
// Purpose: Grade small variants by transcript, driver likelihood, and clonality.
// Dependencies: crate::{core, interfaces, runtime::tiered}, graded-logic
// ============================================================================

//! ## Overview
//! Variant rules look at the canonical-transcript impact first and fall back
//! to other transcripts, which costs one confidence dimension.

// ============================================================================
// SECTION: Imports
// ============================================================================

use graded_logic::Verdict;

use super::EvidenceChecks;
use super::Mechanism;
use super::evidence_weaknesses;
use super::transcript_match;
use crate::core::CoveragePredicate;
use crate::core::GeneCoverage;
use crate::core::TestTarget;
use crate::core::TranscriptVariantImpact;
use crate::core::Variant;
use crate::interfaces::EvaluationContext;
use crate::interfaces::MolecularRule;
use crate::runtime::tiered::Candidate;
use crate::runtime::tiered::TieredAssessment;
use crate::runtime::tiered::grade;

// ============================================================================
// SECTION: Shared Walk
// ============================================================================

/// Collects candidates from every variant of `gene` with a matching impact.
fn variant_assessment(
    ctx: &EvaluationContext<'_>,
    gene: &str,
    checks: EvidenceChecks,
    matches: impl Fn(&TranscriptVariantImpact) -> bool,
    describe: impl Fn(&Variant, &TranscriptVariantImpact) -> String,
) -> TieredAssessment {
    let mut assessment = TieredAssessment::for_quality(ctx.can_assert_absence());
    for variant in ctx.drivers().variants.iter().filter(|variant| variant.evidence.gene == gene) {
        let found = transcript_match(
            variant.canonical_impact.as_ref(),
            &variant.other_impacts,
            |impact| matches(impact).then_some(impact),
        );
        if let Some((impact, transcript)) = found {
            assessment.push(
                Candidate::new(describe(variant, impact), variant.event_for(impact))
                    .with_weaknesses(evidence_weaknesses(&variant.evidence, ctx, checks))
                    .with_weaknesses(transcript),
            );
        }
    }
    assessment
}

/// Coverage requirement shared by variant rules.
fn mutation_coverage(gene: &str) -> Vec<GeneCoverage> {
    vec![GeneCoverage::new(gene, CoveragePredicate::AtLeast(TestTarget::Mutation))]
}

// ============================================================================
// SECTION: Activating Mutation
// ============================================================================

/// Gene carries an activating mutation outside the ignored codons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneHasActivatingMutation {
    /// Gene symbol.
    gene: String,
    /// Codons whose mutations do not count.
    codons_to_ignore: Vec<u32>,
}

impl GeneHasActivatingMutation {
    /// Creates the rule.
    #[must_use]
    pub fn new(gene: impl Into<String>, codons_to_ignore: Vec<u32>) -> Self {
        Self {
            gene: gene.into(),
            codons_to_ignore,
        }
    }
}

impl MolecularRule for GeneHasActivatingMutation {
    fn label(&self) -> String {
        format!("activating mutation in {}", self.gene)
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict {
        let checks = EvidenceChecks {
            mechanism: Some(Mechanism::Activation),
            driver_likelihood: true,
        };
        let assessment = variant_assessment(
            ctx,
            &self.gene,
            checks,
            |impact| {
                impact.coding_effect.changes_protein()
                    && !impact
                        .affected_codon
                        .is_some_and(|codon| self.codons_to_ignore.contains(&codon))
            },
            |variant, impact| format!("{} activating mutation", variant.event_for(impact)),
        );
        grade(&self.label(), &assessment)
    }

    fn coverage(&self) -> Vec<GeneCoverage> {
        mutation_coverage(&self.gene)
    }
}

// ============================================================================
// SECTION: Codon
// ============================================================================

/// Gene carries a protein-changing variant in one of the listed codons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneHasVariantInCodon {
    /// Gene symbol.
    gene: String,
    /// Target codons.
    codons: Vec<u32>,
}

impl GeneHasVariantInCodon {
    /// Creates the rule.
    #[must_use]
    pub fn new(gene: impl Into<String>, codons: Vec<u32>) -> Self {
        Self {
            gene: gene.into(),
            codons,
        }
    }
}

impl MolecularRule for GeneHasVariantInCodon {
    fn label(&self) -> String {
        let codons: Vec<String> = self.codons.iter().map(u32::to_string).collect();
        format!("variant in codon {} of {}", codons.join(" or "), self.gene)
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict {
        let checks = EvidenceChecks {
            mechanism: None,
            driver_likelihood: false,
        };
        let assessment = variant_assessment(
            ctx,
            &self.gene,
            checks,
            |impact| {
                impact.coding_effect.changes_protein()
                    && impact.affected_codon.is_some_and(|codon| self.codons.contains(&codon))
            },
            |variant, impact| match impact.affected_codon {
                Some(codon) => format!("{} in codon {codon}", variant.event_for(impact)),
                None => variant.event_for(impact),
            },
        );
        grade(&self.label(), &assessment)
    }

    fn coverage(&self) -> Vec<GeneCoverage> {
        mutation_coverage(&self.gene)
    }
}

// ============================================================================
// SECTION: Exon
// ============================================================================

/// Gene carries a protein-changing variant in the given exon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneHasVariantInExon {
    /// Gene symbol.
    gene: String,
    /// Target exon.
    exon: u32,
}

impl GeneHasVariantInExon {
    /// Creates the rule.
    #[must_use]
    pub fn new(gene: impl Into<String>, exon: u32) -> Self {
        Self {
            gene: gene.into(),
            exon,
        }
    }
}

impl MolecularRule for GeneHasVariantInExon {
    fn label(&self) -> String {
        format!("variant in exon {} of {}", self.exon, self.gene)
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict {
        let checks = EvidenceChecks {
            mechanism: None,
            driver_likelihood: false,
        };
        let assessment = variant_assessment(
            ctx,
            &self.gene,
            checks,
            |impact| {
                impact.coding_effect.changes_protein() && impact.affected_exon == Some(self.exon)
            },
            |variant, impact| format!("{} in exon {}", variant.event_for(impact), self.exon),
        );
        grade(&self.label(), &assessment)
    }

    fn coverage(&self) -> Vec<GeneCoverage> {
        mutation_coverage(&self.gene)
    }
}
