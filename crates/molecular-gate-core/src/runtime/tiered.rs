// crates/molecular-gate-core/src/runtime/tiered.rs
// ============================================================================
// Module: Tiered Confidence Evaluation
// Description: Shared grading skeleton for findings of decreasing confidence.
// Purpose: Map candidate findings and their weaknesses to one graded verdict.
// Dependencies: graded-logic
// ============================================================================

//! ## Overview
//! Rules collect [`Candidate`] findings that meet their structural condition
//! and tag each with the confidence dimensions it fails ([`Weakness`]).
//! [`grade`] then returns the first applicable tier:
//!
//! 1. `Pass` when some candidate has no weakness.
//! 2. `Warn` when some candidate has exactly one weakness.
//! 3. `Undetermined` when absence cannot be asserted.
//! 4. `Fail` otherwise.
//!
//! Candidates failing two or more dimensions do not qualify for any tier.
//! Adding a weakness to a candidate therefore never improves the grade.

// ============================================================================
// SECTION: Imports
// ============================================================================

use graded_logic::Grade;
use graded_logic::Verdict;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Weaknesses
// ============================================================================

/// Confidence dimension a finding fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weakness {
    /// Finding did not pass reporting filters.
    NotReportable,
    /// Finding matches only on a non-canonical transcript.
    NonCanonicalTranscript,
    /// Structural condition is only partially met.
    PartialMatch,
    /// Clonal likelihood is below the cutoff.
    Subclonal,
    /// Gene role does not fit the mechanism.
    GeneRoleMismatch,
    /// Predicted protein effect contradicts the mechanism.
    ConflictingProteinEffect,
    /// Driver likelihood is not high.
    NonHighDriverLikelihood,
    /// Only some alleles are affected where all must be.
    NotBiallelic,
    /// Evidence is indirect (e.g. a status call without a causal driver).
    IndirectEvidence,
    /// Allele is lost in the tumor.
    TumorLoss,
}

impl Weakness {
    /// Returns the qualifier appended to warn messages.
    #[must_use]
    pub const fn qualifier(self) -> &'static str {
        match self {
            Self::NotReportable => "(not reportable)",
            Self::NonCanonicalTranscript => "(non-canonical transcript)",
            Self::PartialMatch => "(partial match)",
            Self::Subclonal => "(subclonal)",
            Self::GeneRoleMismatch => "(gene role mismatch)",
            Self::ConflictingProteinEffect => "(conflicting protein effect)",
            Self::NonHighDriverLikelihood => "(no high driver likelihood)",
            Self::NotBiallelic => "(not biallelic)",
            Self::IndirectEvidence => "(indirect evidence)",
            Self::TumorLoss => "(lost in tumor)",
        }
    }
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Finding that meets a rule's structural condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Specific message describing the finding.
    finding: String,
    /// Inclusion event recorded when the finding drives the verdict.
    event: String,
    /// Confidence dimensions the finding fails.
    weaknesses: Vec<Weakness>,
}

impl Candidate {
    /// Creates a candidate with no weaknesses.
    #[must_use]
    pub fn new(finding: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            finding: finding.into(),
            event: event.into(),
            weaknesses: Vec::new(),
        }
    }

    /// Returns a copy that also fails `weakness`.
    #[must_use]
    pub fn with_weakness(mut self, weakness: Weakness) -> Self {
        if !self.weaknesses.contains(&weakness) {
            self.weaknesses.push(weakness);
        }
        self
    }

    /// Returns a copy that also fails every listed weakness.
    #[must_use]
    pub fn with_weaknesses(self, weaknesses: impl IntoIterator<Item = Weakness>) -> Self {
        weaknesses.into_iter().fold(self, Self::with_weakness)
    }
}

// ============================================================================
// SECTION: Assessment
// ============================================================================

/// Candidates found in one test plus whether absence can be asserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TieredAssessment {
    /// Candidate findings.
    candidates: Vec<Candidate>,
    /// Reason absence cannot be asserted; `None` when it can.
    unconfirmable: Option<String>,
}

impl TieredAssessment {
    /// Creates an assessment whose negative result can be trusted.
    #[must_use]
    pub fn confirmable() -> Self {
        Self::default()
    }

    /// Creates an assessment whose negative result cannot be trusted.
    #[must_use]
    pub fn unconfirmable(reason: impl Into<String>) -> Self {
        Self {
            candidates: Vec::new(),
            unconfirmable: Some(reason.into()),
        }
    }

    /// Creates an assessment from test quality.
    #[must_use]
    pub fn for_quality(can_assert_absence: bool) -> Self {
        if can_assert_absence {
            Self::confirmable()
        } else {
            Self::unconfirmable("insufficient purity or quality")
        }
    }

    /// Adds a candidate.
    pub fn push(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    /// Returns a copy with additional candidates.
    #[must_use]
    pub fn with_candidates(mut self, candidates: impl IntoIterator<Item = Candidate>) -> Self {
        self.candidates.extend(candidates);
        self
    }
}

// ============================================================================
// SECTION: Grading
// ============================================================================

/// Grades an assessment for a criterion phrase such as `amplification of ERBB2`.
#[must_use]
pub fn grade(label: &str, assessment: &TieredAssessment) -> Verdict {
    let strong: Vec<&Candidate> =
        assessment.candidates.iter().filter(|candidate| candidate.weaknesses.is_empty()).collect();
    if !strong.is_empty() {
        return tier_verdict(
            Grade::Pass,
            strong.iter().map(|candidate| candidate.finding.clone()),
            capitalize(label),
            &strong,
        );
    }

    let weak: Vec<&Candidate> =
        assessment.candidates.iter().filter(|candidate| candidate.weaknesses.len() == 1).collect();
    if !weak.is_empty() {
        return tier_verdict(
            Grade::Warn,
            weak.iter().copied().map(warn_message),
            format!("Potential {label}"),
            &weak,
        );
    }

    match &assessment.unconfirmable {
        Some(reason) => Verdict::undetermined(
            format!("{} undetermined ({reason})", capitalize(label)),
            format!("{} undetermined", capitalize(label)),
        ),
        None => Verdict::fail(format!("No {label}"), format!("No {label}")),
    }
}

/// Builds a pass or warn verdict from qualifying candidates.
fn tier_verdict(
    grade: Grade,
    specific: impl Iterator<Item = String>,
    general: String,
    candidates: &[&Candidate],
) -> Verdict {
    let verdict = Verdict::new(grade)
        .with_specific_messages(specific.collect())
        .with_general_message(general);
    candidates
        .iter()
        .fold(verdict, |verdict, candidate| verdict.with_inclusion_event(candidate.event.as_str()))
}

/// Formats the warn message of a single-weakness candidate.
fn warn_message(candidate: &Candidate) -> String {
    match candidate.weaknesses.first() {
        Some(weakness) => format!("{} {}", candidate.finding, weakness.qualifier()),
        None => candidate.finding.clone(),
    }
}

/// Uppercases the first character of a phrase.
pub(crate) fn capitalize(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests;
