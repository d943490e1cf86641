// crates/molecular-gate-core/src/rules/characteristics.rs
// ============================================================================
// Module: Tumor Characteristic Rules
// Description: HRD, MSI, and tumor mutational burden criteria.
// Purpose: Grade genome-wide status calls, backed by causal drivers when known.
// Dependencies: crate::{core, interfaces, runtime::tiered}, graded-logic
// ============================================================================

//! ## Overview
//! Characteristic rules read scalar calls that only whole-genome analyses
//! produce, so they never run on panels. An unknown status is
//! `Undetermined`. A positive HRD or MSI status passes when a biallelic
//! driver in one of the configured genes explains it and warns otherwise.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use graded_logic::Verdict;

use crate::core::CopyNumberType;
use crate::core::Drivers;
use crate::core::ExperimentKind;
use crate::interfaces::EvaluationContext;
use crate::interfaces::MolecularRule;
use crate::runtime::tiered::Candidate;
use crate::runtime::tiered::TieredAssessment;
use crate::runtime::tiered::Weakness;
use crate::runtime::tiered::grade;

// ============================================================================
// SECTION: Shared Status Walk
// ============================================================================

/// Returns the sorted genes of `genes` hit by a reportable biallelic driver.
fn biallelic_driver_genes<'a>(drivers: &'a Drivers, genes: &BTreeSet<String>) -> Vec<&'a str> {
    let deletions = drivers
        .copy_numbers
        .iter()
        .filter(|cn| cn.canonical_impact.kind == CopyNumberType::Deletion)
        .map(|cn| &cn.evidence);
    let disruptions = drivers.homozygous_disruptions.iter().map(|hd| &hd.evidence);
    let variants = drivers
        .variants
        .iter()
        .filter(|variant| variant.is_biallelic == Some(true))
        .map(|variant| &variant.evidence);

    let hits: BTreeSet<&str> = deletions
        .chain(disruptions)
        .chain(variants)
        .filter(|evidence| evidence.is_reportable && genes.contains(&evidence.gene))
        .map(|evidence| evidence.gene.as_str())
        .collect();
    hits.into_iter().collect()
}

/// Builds the assessment for a boolean genome-wide status.
fn status_assessment(
    ctx: &EvaluationContext<'_>,
    status: Option<bool>,
    genes: &BTreeSet<String>,
    name: &str,
    event: &str,
) -> TieredAssessment {
    match status {
        None => TieredAssessment::unconfirmable(format!("unknown {name} status")),
        Some(false) => TieredAssessment::for_quality(ctx.can_assert_absence()),
        Some(true) => {
            let hits = biallelic_driver_genes(ctx.drivers(), genes);
            let candidate = if hits.is_empty() {
                Candidate::new(format!("{event} status"), event)
                    .with_weakness(Weakness::IndirectEvidence)
            } else {
                Candidate::new(
                    format!("{event} status with biallelic driver in {}", hits.join(", ")),
                    event,
                )
            };
            TieredAssessment::for_quality(ctx.can_assert_absence()).with_candidates([candidate])
        }
    }
}

// ============================================================================
// SECTION: HRD
// ============================================================================

/// Tumor is homologous recombination deficient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomologousRecombinationDeficient;

impl MolecularRule for HomologousRecombinationDeficient {
    fn label(&self) -> String {
        "homologous recombination deficiency".to_string()
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict {
        let assessment = status_assessment(
            ctx,
            ctx.characteristics().is_homologous_recombination_deficient,
            &ctx.settings().hrd_genes,
            "homologous recombination",
            "HRD",
        );
        grade(&self.label(), &assessment)
    }

    fn supports(&self, experiment: ExperimentKind) -> bool {
        experiment.is_comprehensive()
    }
}

// ============================================================================
// SECTION: MSI
// ============================================================================

/// Tumor is microsatellite unstable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MicrosatelliteUnstable;

impl MolecularRule for MicrosatelliteUnstable {
    fn label(&self) -> String {
        "microsatellite instability".to_string()
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict {
        let assessment = status_assessment(
            ctx,
            ctx.characteristics().is_microsatellite_unstable,
            &ctx.settings().msi_genes,
            "microsatellite",
            "MSI",
        );
        grade(&self.label(), &assessment)
    }

    fn supports(&self, experiment: ExperimentKind) -> bool {
        experiment.is_comprehensive()
    }
}

// ============================================================================
// SECTION: TMB
// ============================================================================

/// Tumor mutational burden is at least a threshold (inclusive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TumorMutationalBurdenAtLeast {
    /// Minimum burden in mutations per megabase.
    min_burden: f64,
}

impl TumorMutationalBurdenAtLeast {
    /// Creates the rule.
    #[must_use]
    pub const fn new(min_burden: f64) -> Self {
        Self {
            min_burden,
        }
    }
}

impl MolecularRule for TumorMutationalBurdenAtLeast {
    fn label(&self) -> String {
        format!("tumor mutational burden of at least {}", self.min_burden)
    }

    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict {
        let assessment = match ctx.characteristics().tumor_mutational_burden {
            None => TieredAssessment::unconfirmable("unknown tumor mutational burden"),
            Some(burden) => {
                let assessment = TieredAssessment::for_quality(ctx.can_assert_absence());
                if burden >= self.min_burden {
                    assessment
                        .with_candidates([Candidate::new(format!("TMB of {burden}"), "TMB high")])
                } else {
                    assessment
                }
            }
        };
        grade(&self.label(), &assessment)
    }

    fn supports(&self, experiment: ExperimentKind) -> bool {
        experiment.is_comprehensive()
    }
}
