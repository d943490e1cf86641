// crates/molecular-gate-core/src/rules/mod.rs
// ============================================================================
// Module: Molecular Rule Catalogue
// Description: Representative leaf rules and their instantiation.
// Purpose: Map criterion parameters to rule implementations.
// Dependencies: crate::{core, interfaces, runtime::tiered}
// ============================================================================

//! ## Overview
//! Each rule is a small struct implementing [`MolecularRule`]. Rules collect
//! candidate findings and their weaknesses and defer grading to
//! [`crate::runtime::tiered::grade`]. The helpers here derive the weaknesses
//! shared by all gene-level findings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::CriterionParameters;
use crate::core::DriverEvidence;
use crate::core::DriverLikelihood;
use crate::core::GeneRole;
use crate::core::ProteinEffect;
use crate::interfaces::EvaluationContext;
use crate::interfaces::MolecularRule;
use crate::runtime::tiered::Weakness;

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod characteristics;
pub mod copy_number;
pub mod fusion;
pub mod hla;
pub mod inactivation;
pub mod pharmaco;
pub mod variant;
pub mod virus;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use characteristics::HomologousRecombinationDeficient;
pub use characteristics::MicrosatelliteUnstable;
pub use characteristics::TumorMutationalBurdenAtLeast;
pub use copy_number::GeneIsAmplified;
pub use copy_number::GeneIsDeleted;
pub use fusion::HasFusionInGene;
pub use fusion::HasSpecificFusion;
pub use hla::HasHlaAllele;
pub use inactivation::GeneIsInactivated;
pub use pharmaco::HasPharmacogenomicHaplotype;
pub use variant::GeneHasActivatingMutation;
pub use variant::GeneHasVariantInCodon;
pub use variant::GeneHasVariantInExon;
pub use virus::HasViralPresence;

// ============================================================================
// SECTION: Instantiation
// ============================================================================

/// Builds the rule named by `parameters`.
#[must_use]
pub fn instantiate(parameters: &CriterionParameters) -> Box<dyn MolecularRule> {
    match parameters {
        CriterionParameters::GeneIsAmplified {
            gene,
            min_copies,
        } => Box::new(GeneIsAmplified::new(gene, *min_copies)),
        CriterionParameters::GeneIsDeleted {
            gene,
        } => Box::new(GeneIsDeleted::new(gene)),
        CriterionParameters::GeneHasActivatingMutation {
            gene,
            codons_to_ignore,
        } => Box::new(GeneHasActivatingMutation::new(gene, codons_to_ignore.clone())),
        CriterionParameters::GeneHasVariantInCodon {
            gene,
            codons,
        } => Box::new(GeneHasVariantInCodon::new(gene, codons.clone())),
        CriterionParameters::GeneHasVariantInExon {
            gene,
            exon,
        } => Box::new(GeneHasVariantInExon::new(gene, *exon)),
        CriterionParameters::GeneIsInactivated {
            gene,
        } => Box::new(GeneIsInactivated::new(gene)),
        CriterionParameters::HasFusionInGene {
            gene,
        } => Box::new(HasFusionInGene::new(gene)),
        CriterionParameters::HasSpecificFusion {
            five_prime,
            three_prime,
        } => Box::new(HasSpecificFusion::new(five_prime, three_prime)),
        CriterionParameters::HomologousRecombinationDeficient => {
            Box::new(HomologousRecombinationDeficient)
        }
        CriterionParameters::MicrosatelliteUnstable => Box::new(MicrosatelliteUnstable),
        CriterionParameters::TumorMutationalBurdenAtLeast {
            min_burden,
        } => Box::new(TumorMutationalBurdenAtLeast::new(*min_burden)),
        CriterionParameters::HasHlaAllele {
            allele,
        } => Box::new(HasHlaAllele::new(allele)),
        CriterionParameters::HasPharmacogenomicHaplotype {
            gene,
            haplotype,
        } => Box::new(HasPharmacogenomicHaplotype::new(gene, haplotype)),
        CriterionParameters::HasViralPresence {
            kind,
        } => Box::new(HasViralPresence::new(*kind)),
    }
}

// ============================================================================
// SECTION: Shared Weaknesses
// ============================================================================

/// Direction of the biological mechanism a rule looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mechanism {
    /// Gain of function (amplification, activating mutation).
    Activation,
    /// Loss of function (deletion, inactivation).
    Inactivation,
}

impl Mechanism {
    /// Returns true when the gene role contradicts the mechanism.
    const fn conflicts_with_role(self, role: GeneRole) -> bool {
        matches!(
            (self, role),
            (Self::Activation, GeneRole::TumorSuppressor) | (Self::Inactivation, GeneRole::Oncogene)
        )
    }

    /// Returns true when the protein effect contradicts the mechanism.
    const fn conflicts_with_effect(self, effect: ProteinEffect) -> bool {
        matches!(
            (self, effect),
            (Self::Activation, ProteinEffect::LossOfFunction | ProteinEffect::NoEffect)
                | (Self::Inactivation, ProteinEffect::GainOfFunction | ProteinEffect::NoEffect)
        )
    }
}

/// Which evidence attributes a rule inspects.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EvidenceChecks {
    /// Mechanism used for role and effect checks; `None` skips both.
    pub(crate) mechanism: Option<Mechanism>,
    /// Whether a non-high driver likelihood is a weakness.
    pub(crate) driver_likelihood: bool,
}

/// Returns the confidence dimensions `evidence` fails.
pub(crate) fn evidence_weaknesses(
    evidence: &DriverEvidence,
    ctx: &EvaluationContext<'_>,
    checks: EvidenceChecks,
) -> Vec<Weakness> {
    let mut weaknesses = Vec::new();
    if !evidence.is_reportable {
        weaknesses.push(Weakness::NotReportable);
    }
    if !ctx.is_clonal(evidence.clonal_likelihood) {
        weaknesses.push(Weakness::Subclonal);
    }
    if checks.driver_likelihood {
        weaknesses.extend(driver_likelihood_weakness(evidence.driver_likelihood));
    }
    if let Some(mechanism) = checks.mechanism {
        if mechanism.conflicts_with_role(evidence.gene_role) {
            weaknesses.push(Weakness::GeneRoleMismatch);
        }
        if mechanism.conflicts_with_effect(evidence.protein_effect) {
            weaknesses.push(Weakness::ConflictingProteinEffect);
        }
    }
    weaknesses
}

/// Returns the weakness for a non-high driver likelihood.
pub(crate) const fn driver_likelihood_weakness(
    likelihood: Option<DriverLikelihood>,
) -> Option<Weakness> {
    match likelihood {
        Some(DriverLikelihood::High) => None,
        Some(DriverLikelihood::Medium | DriverLikelihood::Low) | None => {
            Some(Weakness::NonHighDriverLikelihood)
        }
    }
}

/// Returns the first match on the canonical transcript, else on another one.
///
/// Matches found only on another transcript carry
/// [`Weakness::NonCanonicalTranscript`].
pub(crate) fn transcript_match<'a, T, R>(
    canonical: Option<&'a T>,
    others: &'a [T],
    mut assess: impl FnMut(&'a T) -> Option<R>,
) -> Option<(R, Option<Weakness>)> {
    if let Some(result) = canonical.and_then(&mut assess) {
        return Some((result, None));
    }
    others.iter().find_map(assess).map(|result| (result, Some(Weakness::NonCanonicalTranscript)))
}
