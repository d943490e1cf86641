// crates/molecular-gate-core/src/core/drivers.rs
// ============================================================================
// Module: Molecular Drivers
// Description: Typed genomic findings reported by one molecular test.
// Purpose: Give rules a uniform view of driver attributes across finding kinds.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`Drivers`] bundle holds every finding reported by one test: variants,
//! copy-number events, disruptions, fusions, viral findings, pharmacogenomic
//! haplotypes, HLA typing, and scalar characteristics.
//!
//! Gene-level findings share a [`DriverEvidence`] block carrying the
//! attributes that tiered evaluation inspects. Variants and copy numbers
//! separate the canonical-transcript impact from impacts on other
//! transcripts; the canonical impact is authoritative and a match found only
//! on another transcript is weaker evidence.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::characteristics::MolecularCharacteristics;

// ============================================================================
// SECTION: Shared Attributes
// ============================================================================

/// Categorical confidence that a finding is cancer-causing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverLikelihood {
    /// Likely driver.
    High,
    /// Possible driver.
    Medium,
    /// Unlikely driver.
    Low,
}

/// Functional role of a gene in cancer biology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneRole {
    /// Gain of function drives tumor growth.
    Oncogene,
    /// Loss of function drives tumor growth.
    TumorSuppressor,
    /// Acts as both, depending on context.
    Both,
    /// Role not annotated.
    #[default]
    Unknown,
}

/// Predicted effect of a finding on the encoded protein.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProteinEffect {
    /// Protein function is increased or constitutively active.
    GainOfFunction,
    /// Protein function is reduced or abolished.
    LossOfFunction,
    /// No change in protein function.
    NoEffect,
    /// Effect not annotated.
    #[default]
    Unknown,
}

/// Attributes shared by every gene-level finding.
///
/// # Invariants
/// - `gene` is non-empty.
/// - `clonal_likelihood`, when present, lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverEvidence {
    /// Gene symbol.
    pub gene: String,
    /// Whether the finding passed reporting filters.
    pub is_reportable: bool,
    /// Driver-likelihood tier; `None` when unknown.
    pub driver_likelihood: Option<DriverLikelihood>,
    /// Fraction of tumor cells carrying the finding; `None` when unknown.
    pub clonal_likelihood: Option<f64>,
    /// Annotated gene role.
    pub gene_role: GeneRole,
    /// Predicted protein effect.
    pub protein_effect: ProteinEffect,
}

impl DriverEvidence {
    /// Creates reportable evidence for a gene with high driver likelihood.
    #[must_use]
    pub fn reportable(gene: impl Into<String>) -> Self {
        Self {
            gene: gene.into(),
            is_reportable: true,
            driver_likelihood: Some(DriverLikelihood::High),
            clonal_likelihood: None,
            gene_role: GeneRole::Unknown,
            protein_effect: ProteinEffect::Unknown,
        }
    }
}

// ============================================================================
// SECTION: Variants
// ============================================================================

/// Coding consequence of a variant on one transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodingEffect {
    /// Amino-acid substitution or in-frame change.
    Missense,
    /// Premature stop codon.
    Nonsense,
    /// Splice-site disruption.
    Splice,
    /// Reading-frame shift.
    Frameshift,
    /// No amino-acid change.
    Synonymous,
    /// Outside the coding sequence.
    #[default]
    None,
}

impl CodingEffect {
    /// Returns true when the effect changes the protein sequence.
    #[must_use]
    pub const fn changes_protein(self) -> bool {
        matches!(self, Self::Missense | Self::Nonsense | Self::Splice | Self::Frameshift)
    }

    /// Returns true when the effect is expected to abolish protein function.
    #[must_use]
    pub const fn is_truncating(self) -> bool {
        matches!(self, Self::Nonsense | Self::Splice | Self::Frameshift)
    }
}

/// Impact of a variant on one transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptVariantImpact {
    /// Transcript identifier.
    pub transcript_id: String,
    /// Coding consequence.
    pub coding_effect: CodingEffect,
    /// Protein-level notation, e.g. `V600E`.
    pub protein_change: Option<String>,
    /// Affected codon number.
    pub affected_codon: Option<u32>,
    /// Affected exon number.
    pub affected_exon: Option<u32>,
}

/// Small variant (SNV, MNV, indel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Shared driver attributes.
    pub evidence: DriverEvidence,
    /// Whether all alleles are affected; `None` when unknown.
    pub is_biallelic: Option<bool>,
    /// Impact on the canonical transcript, when the variant hits it.
    pub canonical_impact: Option<TranscriptVariantImpact>,
    /// Impacts on other transcripts.
    #[serde(default)]
    pub other_impacts: Vec<TranscriptVariantImpact>,
}

impl Variant {
    /// Returns a short event label such as `BRAF V600E`.
    #[must_use]
    pub fn event_for(&self, impact: &TranscriptVariantImpact) -> String {
        match &impact.protein_change {
            Some(change) => format!("{} {change}", self.evidence.gene),
            None => format!("{} variant", self.evidence.gene),
        }
    }
}

// ============================================================================
// SECTION: Copy Numbers
// ============================================================================

/// Classification of a copy-number event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyNumberType {
    /// Gain over the whole gene.
    FullGain,
    /// Gain over part of the gene.
    PartialGain,
    /// Complete loss of all copies.
    Deletion,
    /// Copy number not altered.
    #[default]
    None,
}

/// Copy-number impact on one transcript.
///
/// # Invariants
/// - `min_copies <= max_copies` when both are known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyNumberImpact {
    /// Event classification.
    pub kind: CopyNumberType,
    /// Minimum copy number over the transcript.
    pub min_copies: Option<u32>,
    /// Maximum copy number over the transcript.
    pub max_copies: Option<u32>,
}

/// Copy-number event for one gene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyNumber {
    /// Shared driver attributes.
    pub evidence: DriverEvidence,
    /// Impact on the canonical transcript.
    pub canonical_impact: CopyNumberImpact,
    /// Impacts on other transcripts.
    #[serde(default)]
    pub other_impacts: Vec<CopyNumberImpact>,
}

// ============================================================================
// SECTION: Disruptions
// ============================================================================

/// Structural event disrupting every copy of a gene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomozygousDisruption {
    /// Shared driver attributes.
    pub evidence: DriverEvidence,
}

/// Structural event disrupting some copies of a gene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disruption {
    /// Shared driver attributes.
    pub evidence: DriverEvidence,
}

// ============================================================================
// SECTION: Fusions
// ============================================================================

/// Gene fusion joining a five-prime and a three-prime partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fusion {
    /// Five-prime partner gene.
    pub five_prime_gene: String,
    /// Three-prime partner gene.
    pub three_prime_gene: String,
    /// Whether the fusion passed reporting filters.
    pub is_reportable: bool,
    /// Driver-likelihood tier; `None` when unknown.
    pub driver_likelihood: Option<DriverLikelihood>,
}

impl Fusion {
    /// Returns the event label, e.g. `EML4::ALK fusion`.
    #[must_use]
    pub fn event(&self) -> String {
        format!("{}::{} fusion", self.five_prime_gene, self.three_prime_gene)
    }

    /// Returns true when either partner is `gene`.
    #[must_use]
    pub fn involves(&self, gene: &str) -> bool {
        self.five_prime_gene == gene || self.three_prime_gene == gene
    }
}

// ============================================================================
// SECTION: Viruses
// ============================================================================

/// Virus families screened for integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VirusKind {
    /// Human papillomavirus.
    HumanPapillomavirus,
    /// Epstein-Barr virus.
    EpsteinBarrVirus,
    /// Hepatitis B virus.
    HepatitisBVirus,
    /// Merkel cell polyomavirus.
    MerkelCellVirus,
    /// Any other virus.
    Other,
}

impl VirusKind {
    /// Returns a display label for the virus family.
    #[must_use]
    pub const fn display(self) -> &'static str {
        match self {
            Self::HumanPapillomavirus => "HPV",
            Self::EpsteinBarrVirus => "EBV",
            Self::HepatitisBVirus => "HBV",
            Self::MerkelCellVirus => "MCV",
            Self::Other => "other virus",
        }
    }
}

/// Viral finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Virus {
    /// Virus name as reported.
    pub name: String,
    /// Virus family.
    pub kind: VirusKind,
    /// Whether the finding passed reporting filters.
    pub is_reportable: bool,
    /// Driver-likelihood tier; `None` when unknown.
    pub driver_likelihood: Option<DriverLikelihood>,
    /// Number of detected integration sites.
    pub integrations: u32,
}

// ============================================================================
// SECTION: Pharmacogenomics and HLA
// ============================================================================

/// Haplotype call for a pharmacogene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Haplotype {
    /// Haplotype name, e.g. `*2`.
    pub name: String,
    /// Number of alleles carrying the haplotype.
    pub allele_count: u32,
    /// Reported function, e.g. `Normal Function`.
    pub function: String,
}

/// Pharmacogenomic typing of one gene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacoEntry {
    /// Pharmacogene symbol, e.g. `DPYD`.
    pub gene: String,
    /// Called haplotypes.
    pub haplotypes: Vec<Haplotype>,
}

/// HLA class I allele.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HlaAllele {
    /// Allele name, e.g. `A*02:01`.
    pub name: String,
    /// Estimated copies of the allele in the tumor.
    pub tumor_copy_number: f64,
}

/// HLA typing result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HlaRecord {
    /// Whether typing quality permits interpretation.
    pub is_reliable: bool,
    /// Typed alleles.
    pub alleles: Vec<HlaAllele>,
}

// ============================================================================
// SECTION: Drivers Bundle
// ============================================================================

/// All findings reported by one molecular test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Drivers {
    /// Small variants.
    pub variants: Vec<Variant>,
    /// Copy-number events.
    pub copy_numbers: Vec<CopyNumber>,
    /// Homozygous disruptions.
    pub homozygous_disruptions: Vec<HomozygousDisruption>,
    /// Non-homozygous structural disruptions.
    pub disruptions: Vec<Disruption>,
    /// Fusions.
    pub fusions: Vec<Fusion>,
    /// Viral findings.
    pub viruses: Vec<Virus>,
    /// Pharmacogenomic typing.
    pub pharmaco: Vec<PharmacoEntry>,
    /// HLA typing, when performed.
    pub hla: Option<HlaRecord>,
    /// Scalar tumor characteristics.
    pub characteristics: MolecularCharacteristics,
}

impl Drivers {
    /// Iterates the evidence blocks of every gene-level finding.
    pub fn gene_evidence(&self) -> impl Iterator<Item = &DriverEvidence> {
        self.variants
            .iter()
            .map(|variant| &variant.evidence)
            .chain(self.copy_numbers.iter().map(|copy_number| &copy_number.evidence))
            .chain(self.homozygous_disruptions.iter().map(|disruption| &disruption.evidence))
            .chain(self.disruptions.iter().map(|disruption| &disruption.evidence))
    }
}
