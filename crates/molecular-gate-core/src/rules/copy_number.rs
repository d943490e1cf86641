// crates/molecular-gate-core/src/rules/copy_number.rs
// ============================================================================
// Module: Copy-Number Rules
// Description: Amplification and deletion criteria.
// Purpose: Grade copy-number events with inclusive thresholds.
// Dependencies: crate::{core, interfaces, runtime::tiered}, graded-logic
// ============================================================================

//! ## Overview
//! Amplification compares copy numbers inclusively (`copies >= required`).
//! A full gain with unknown minimum copies satisfies any threshold at or
//! below the configured assumed full-gain copy number; above it, and for
//! partial gains or straddling bounds, the match is partial.

// ============================================================================
// SECTION: Imports
// ============================================================================

use graded_logic::Verdict;

use super::EvidenceChecks;
use super::Mechanism;
use super::evidence_weaknesses;
use super::transcript_match;
use crate::core::CopyNumberImpact;
use crate::core::CopyNumberType;
use crate::core::CoveragePredicate;
use crate::core::GeneCoverage;
use crate::core::TestTarget;
use crate::interfaces::EvaluationContext;
use crate::interfaces::MolecularRule;
use crate::runtime::tiered::Candidate;
use crate::runtime::tiered::TieredAssessment;
use crate::runtime::tiered::Weakness;
use crate::runtime::tiered::grade;

// ============================================================================
// SECTION: Amplification
// ============================================================================

/// Gene is amplified, optionally to a minimum copy number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneIsAmplified {
    /// Gene symbol.
    gene: String,
    /// Minimum absolute copy number.
    min_copies: Option<u32>,
}

impl GeneIsAmplified {
    /// Creates the rule.
    #[must_use]
    pub fn new(gene: impl Into<String>, min_copies: Option<u32>) -> Self {
        Self {
            gene: gene.into(),
            min_copies,
        }
    }

    /// Classifies one impact; `None` when it is not an amplification.
    fn assess(&self, impact: &CopyNumberImpact, assumed_full_gain: u32) -> Option<AmpMatch> {
        let copies = impact.min_copies;
        match impact.kind {
            CopyNumberType::FullGain => {
                let Some(required) = self.min_copies else {
                    return Some(AmpMatch::full(copies));
                };
                match (impact.min_copies, impact.max_copies) {
                    (Some(min), _) if min >= required => Some(AmpMatch::full(copies)),
                    (Some(_), Some(max)) if max >= required => Some(AmpMatch::partial(copies)),
                    (Some(_), None) => Some(AmpMatch::partial(copies)),
                    (Some(_), Some(_)) => None,
                    (None, _) if required <= assumed_full_gain => Some(AmpMatch::full(None)),
                    (None, _) => Some(AmpMatch::partial(None)),
                }
            }
            CopyNumberType::PartialGain => match (self.min_copies, impact.max_copies) {
                (Some(required), Some(max)) if max < required => None,
                _ => Some(AmpMatch::partial(copies)),
            },
            CopyNumberType::Deletion | CopyNumberType::None => None,
        }
    }
}

/// Structural match of one copy-number impact.
struct AmpMatch {
    /// Known minimum copies, for the message.
    copies: Option<u32>,
    /// Whether the match is only partial.
    partial: bool,
}

impl AmpMatch {
    /// Full structural match.
    const fn full(copies: Option<u32>) -> Self {
        Self {
            copies,
            partial: false,
        }
    }

    /// Partial structural match.
    const fn partial(copies: Option<u32>) -> Self {
        Self {
            copies,
            partial: true,
        }
    }
}

impl MolecularRule for GeneIsAmplified {
    fn label(&self) -> String {
        match self.min_copies {
            Some(copies) => {
                format!("amplification of {} with at least {copies} copies", self.gene)
            }
            None => format!("amplification of {}", self.gene),
        }
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict {
        let assumed = ctx.settings().assumed_full_gain_copies;
        let checks = EvidenceChecks {
            mechanism: Some(Mechanism::Activation),
            driver_likelihood: false,
        };
        let mut assessment = TieredAssessment::for_quality(ctx.can_assert_absence());
        let copy_numbers = ctx.drivers().copy_numbers.iter();
        for copy_number in copy_numbers.filter(|cn| cn.evidence.gene == self.gene) {
            let found = transcript_match(
                Some(&copy_number.canonical_impact),
                &copy_number.other_impacts,
                |impact| self.assess(impact, assumed),
            );
            let Some((matched, transcript)) = found else {
                continue;
            };
            let finding = match (matched.partial, matched.copies) {
                (false, Some(copies)) => format!("{} amplified ({copies} copies)", self.gene),
                (false, None) => format!("{} amplified", self.gene),
                (true, Some(copies)) => {
                    format!("{} partially amplified ({copies} copies)", self.gene)
                }
                (true, None) => format!("{} partially amplified", self.gene),
            };
            let candidate = Candidate::new(finding, format!("{} amp", self.gene))
                .with_weaknesses(evidence_weaknesses(&copy_number.evidence, ctx, checks))
                .with_weaknesses(transcript)
                .with_weaknesses(matched.partial.then_some(Weakness::PartialMatch));
            assessment.push(candidate);
        }
        grade(&self.label(), &assessment)
    }

    fn coverage(&self) -> Vec<GeneCoverage> {
        vec![GeneCoverage::new(&self.gene, CoveragePredicate::AtLeast(TestTarget::Amplification))]
    }
}

// ============================================================================
// SECTION: Deletion
// ============================================================================

/// Gene is deleted or homozygously disrupted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneIsDeleted {
    /// Gene symbol.
    gene: String,
}

impl GeneIsDeleted {
    /// Creates the rule.
    #[must_use]
    pub fn new(gene: impl Into<String>) -> Self {
        Self {
            gene: gene.into(),
        }
    }
}

impl MolecularRule for GeneIsDeleted {
    fn label(&self) -> String {
        format!("deletion of {}", self.gene)
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict {
        let checks = EvidenceChecks {
            mechanism: Some(Mechanism::Inactivation),
            driver_likelihood: false,
        };
        let mut assessment = TieredAssessment::for_quality(ctx.can_assert_absence());
        let copy_numbers = ctx.drivers().copy_numbers.iter();
        for copy_number in copy_numbers.filter(|cn| cn.evidence.gene == self.gene) {
            let found = transcript_match(
                Some(&copy_number.canonical_impact),
                &copy_number.other_impacts,
                |impact| (impact.kind == CopyNumberType::Deletion).then_some(()),
            );
            if let Some(((), transcript)) = found {
                assessment.push(
                    Candidate::new(format!("{} deleted", self.gene), format!("{} del", self.gene))
                        .with_weaknesses(evidence_weaknesses(&copy_number.evidence, ctx, checks))
                        .with_weaknesses(transcript),
                );
            }
        }
        for disruption in ctx
            .drivers()
            .homozygous_disruptions
            .iter()
            .filter(|disruption| disruption.evidence.gene == self.gene)
        {
            assessment.push(
                Candidate::new(
                    format!("{} homozygously disrupted", self.gene),
                    format!("{} hom disruption", self.gene),
                )
                .with_weaknesses(evidence_weaknesses(&disruption.evidence, ctx, checks)),
            );
        }
        grade(&self.label(), &assessment)
    }

    fn coverage(&self) -> Vec<GeneCoverage> {
        vec![GeneCoverage::new(&self.gene, CoveragePredicate::AtLeast(TestTarget::Deletion))]
    }
}
