// crates/molecular-gate-core/src/rules/inactivation.rs
// ============================================================================
// Module: Inactivation Rule
// Description: Loss-of-function criterion across drivers of several kinds.
// Purpose: Grade deletions, disruptions, and inactivating variants together.
// Dependencies: crate::{core, interfaces, runtime::tiered}, graded-logic
// ============================================================================

//! ## Overview
//! A gene counts as inactivated by a deletion, a homozygous disruption, or a
//! truncating or loss-of-function variant. Variants and structural
//! disruptions that hit only one allele are weaker evidence.

// ============================================================================
// SECTION: Imports
// ============================================================================

use graded_logic::Verdict;

use super::EvidenceChecks;
use super::Mechanism;
use super::evidence_weaknesses;
use super::transcript_match;
use crate::core::CopyNumberType;
use crate::core::CoveragePredicate;
use crate::core::GeneCoverage;
use crate::core::ProteinEffect;
use crate::core::TestTarget;
use crate::core::TranscriptVariantImpact;
use crate::core::Variant;
use crate::interfaces::EvaluationContext;
use crate::interfaces::MolecularRule;
use crate::runtime::tiered::Candidate;
use crate::runtime::tiered::TieredAssessment;
use crate::runtime::tiered::Weakness;
use crate::runtime::tiered::grade;

// ============================================================================
// SECTION: Rule
// ============================================================================

/// Gene is inactivated by any loss-of-function mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneIsInactivated {
    /// Gene symbol.
    gene: String,
}

impl GeneIsInactivated {
    /// Creates the rule.
    #[must_use]
    pub fn new(gene: impl Into<String>) -> Self {
        Self {
            gene: gene.into(),
        }
    }

    /// Returns true when a variant impact removes protein function.
    fn is_inactivating(variant: &Variant, impact: &TranscriptVariantImpact) -> bool {
        impact.coding_effect.is_truncating()
            || (impact.coding_effect.changes_protein()
                && variant.evidence.protein_effect == ProteinEffect::LossOfFunction)
    }
}

impl MolecularRule for GeneIsInactivated {
    fn label(&self) -> String {
        format!("inactivation of {}", self.gene)
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict {
        let structural = EvidenceChecks {
            mechanism: Some(Mechanism::Inactivation),
            driver_likelihood: false,
        };
        let variant_checks = EvidenceChecks {
            mechanism: Some(Mechanism::Inactivation),
            driver_likelihood: true,
        };
        let drivers = ctx.drivers();
        let mut assessment = TieredAssessment::for_quality(ctx.can_assert_absence());

        for copy_number in drivers.copy_numbers.iter().filter(|cn| cn.evidence.gene == self.gene) {
            let found = transcript_match(
                Some(&copy_number.canonical_impact),
                &copy_number.other_impacts,
                |impact| (impact.kind == CopyNumberType::Deletion).then_some(()),
            );
            if let Some(((), transcript)) = found {
                let weaknesses = evidence_weaknesses(&copy_number.evidence, ctx, structural);
                assessment.push(
                    Candidate::new(format!("{} deleted", self.gene), format!("{} del", self.gene))
                        .with_weaknesses(weaknesses)
                        .with_weaknesses(transcript),
                );
            }
        }

        for disruption in
            drivers.homozygous_disruptions.iter().filter(|hd| hd.evidence.gene == self.gene)
        {
            assessment.push(
                Candidate::new(
                    format!("{} homozygously disrupted", self.gene),
                    format!("{} hom disruption", self.gene),
                )
                .with_weaknesses(evidence_weaknesses(&disruption.evidence, ctx, structural)),
            );
        }

        for variant in drivers.variants.iter().filter(|variant| variant.evidence.gene == self.gene)
        {
            let found = transcript_match(
                variant.canonical_impact.as_ref(),
                &variant.other_impacts,
                |impact| Self::is_inactivating(variant, impact).then_some(impact),
            );
            let Some((impact, transcript)) = found else {
                continue;
            };
            let event = variant.event_for(impact);
            assessment.push(
                Candidate::new(format!("{event} inactivating"), event)
                    .with_weaknesses(evidence_weaknesses(&variant.evidence, ctx, variant_checks))
                    .with_weaknesses(transcript)
                    .with_weaknesses(
                        (variant.is_biallelic != Some(true)).then_some(Weakness::NotBiallelic),
                    ),
            );
        }

        for disruption in drivers.disruptions.iter().filter(|d| d.evidence.gene == self.gene) {
            assessment.push(
                Candidate::new(
                    format!("{} disrupted", self.gene),
                    format!("{} disruption", self.gene),
                )
                .with_weaknesses(evidence_weaknesses(&disruption.evidence, ctx, structural))
                .with_weakness(Weakness::NotBiallelic),
            );
        }

        grade(&self.label(), &assessment)
    }

    fn coverage(&self) -> Vec<GeneCoverage> {
        vec![GeneCoverage::new(
            &self.gene,
            CoveragePredicate::And(vec![TestTarget::Mutation, TestTarget::Deletion]),
        )]
    }
}
