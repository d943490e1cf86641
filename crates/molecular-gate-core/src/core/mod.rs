// crates/molecular-gate-core/src/core/mod.rs
// ============================================================================
// Module: Molecular Gate Core Types
// Description: Molecular records, criteria, coverage, and settings.
// Purpose: Provide stable, serializable inputs for criterion evaluation.
// Dependencies: graded-logic, serde, time
// ============================================================================

//! ## Overview
//! Core types describe what the engine reads: validated molecular histories,
//! criterion parameters, panel coverage, and evaluation settings. Nothing in
//! this module performs evaluation.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod characteristics;
pub mod coverage;
pub mod criterion;
pub mod drivers;
pub mod hashing;
pub mod history;
pub mod identifiers;
pub mod settings;
pub mod test;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use characteristics::MolecularCharacteristics;
pub use coverage::CoverageGap;
pub use coverage::CoveragePredicate;
pub use coverage::GeneCoverage;
pub use coverage::TargetSpecification;
pub use coverage::TestTarget;
pub use criterion::Criterion;
pub use criterion::CriterionParameters;
pub use drivers::CodingEffect;
pub use drivers::CopyNumber;
pub use drivers::CopyNumberImpact;
pub use drivers::CopyNumberType;
pub use drivers::Disruption;
pub use drivers::DriverEvidence;
pub use drivers::DriverLikelihood;
pub use drivers::Drivers;
pub use drivers::Fusion;
pub use drivers::GeneRole;
pub use drivers::Haplotype;
pub use drivers::HlaAllele;
pub use drivers::HlaRecord;
pub use drivers::HomozygousDisruption;
pub use drivers::PharmacoEntry;
pub use drivers::ProteinEffect;
pub use drivers::TranscriptVariantImpact;
pub use drivers::Variant;
pub use drivers::Virus;
pub use drivers::VirusKind;
pub use hashing::HashError;
pub use hashing::HistoryDigest;
pub use hashing::hash_history;
pub use history::MolecularHistory;
pub use identifiers::CriterionId;
pub use identifiers::TestId;
pub use settings::EvaluationSettings;
pub use test::ExperimentKind;
pub use test::MolecularTest;
pub use test::RecordError;
pub use test::cmp_recency;
