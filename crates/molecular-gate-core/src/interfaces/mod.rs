// crates/molecular-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Molecular Gate Interfaces
// Description: Contract between the criterion engine and leaf rules.
// Purpose: Let catalogue rules plug into selection, guarding, and combination.
// Dependencies: crate::core, graded-logic
// ============================================================================

//! ## Overview
//! A [`MolecularRule`] evaluates one criterion against one test through an
//! [`EvaluationContext`] and declares the coverage it needs from panels.
//! Rules must be deterministic and total: missing data is an `Undetermined`
//! verdict, never an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use graded_logic::Verdict;

use crate::core::Drivers;
use crate::core::EvaluationSettings;
use crate::core::ExperimentKind;
use crate::core::GeneCoverage;
use crate::core::MolecularCharacteristics;
use crate::core::MolecularTest;

// ============================================================================
// SECTION: Evaluation Context
// ============================================================================

/// Read-only view of one test and the active settings.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    /// Test under evaluation.
    test: &'a MolecularTest,
    /// Active settings.
    settings: &'a EvaluationSettings,
}

impl<'a> EvaluationContext<'a> {
    /// Creates a context for one test.
    #[must_use]
    pub const fn new(test: &'a MolecularTest, settings: &'a EvaluationSettings) -> Self {
        Self {
            test,
            settings,
        }
    }

    /// Returns the test under evaluation.
    #[must_use]
    pub const fn test(&self) -> &'a MolecularTest {
        self.test
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn settings(&self) -> &'a EvaluationSettings {
        self.settings
    }

    /// Returns the test's findings.
    #[must_use]
    pub const fn drivers(&self) -> &'a Drivers {
        &self.test.drivers
    }

    /// Returns the test's scalar characteristics.
    #[must_use]
    pub const fn characteristics(&self) -> &'a MolecularCharacteristics {
        &self.test.drivers.characteristics
    }

    /// Returns true when a negative result from this test can be trusted.
    #[must_use]
    pub const fn can_assert_absence(&self) -> bool {
        self.test.can_assert_absence()
    }

    /// Returns true when a clonal likelihood counts as clonal.
    ///
    /// Unknown clonality counts as clonal.
    #[must_use]
    pub fn is_clonal(&self, clonal_likelihood: Option<f64>) -> bool {
        clonal_likelihood.is_none_or(|value| value >= self.settings.clonal_cutoff)
    }
}

// ============================================================================
// SECTION: Molecular Rule
// ============================================================================

/// Leaf rule evaluating one molecular criterion.
pub trait MolecularRule {
    /// Returns the lowercase criterion phrase, e.g. `amplification of ERBB2`.
    fn label(&self) -> String;

    /// Evaluates the rule against one test.
    fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Verdict;

    /// Returns the coverage a panel must have for its result to be trusted.
    fn coverage(&self) -> Vec<GeneCoverage> {
        Vec::new()
    }

    /// Returns genes that at least one selected test must have assayed.
    fn required_genes(&self, _settings: &EvaluationSettings) -> Vec<String> {
        self.coverage().into_iter().map(|coverage| coverage.gene).collect()
    }

    /// Returns true when tests of this kind can answer the rule.
    fn supports(&self, _experiment: ExperimentKind) -> bool {
        true
    }

    /// Returns the verdict used when no selected test produced one.
    fn no_comprehensive_default(&self) -> Option<Verdict> {
        None
    }
}
