// crates/graded-logic/src/verdict.rs
// ============================================================================
// Module: Graded Verdicts
// Description: Grade plus messages, inclusion events, and sufficiency flags.
// Purpose: Represent the result of evaluating one criterion against one source.
// Dependencies: crate::{grade, message}, serde
// ============================================================================

//! ## Overview
//! A [`Verdict`] couples a [`Grade`] with two message granularities: specific
//! messages tied to the exact finding and general messages tied to the
//! criterion. Messages are stored against the verdict's own grade, so a
//! verdict can never carry pass messages while reporting a fail.
//!
//! Verdicts are values: `with_*` methods consume and return a modified copy.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::grade::Grade;
use crate::message::MessageSet;

// ============================================================================
// SECTION: Verdict
// ============================================================================

/// Graded result of one criterion evaluation
///
/// # Invariants
/// - All messages describe `grade`; there is no storage for other grades.
/// - Side flags only ever widen when verdicts are combined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Outcome grade.
    grade: Grade,
    /// Messages tied to the concrete finding.
    specific_messages: MessageSet,
    /// Messages tied to the criterion as a whole.
    general_messages: MessageSet,
    /// Molecular events that drove the outcome (e.g. `ERBB2 amp`).
    inclusion_events: MessageSet,
    /// Set when the evaluated data did not cover the genes the criterion needs.
    missing_genes_for_sufficient_evaluation: bool,
    /// Set when no usable molecular result was available.
    missing_molecular_result_for_evaluation: bool,
}

impl Verdict {
    /// Creates a verdict with the given grade and no messages
    #[must_use]
    pub fn new(grade: Grade) -> Self {
        Self {
            grade,
            specific_messages: MessageSet::new(),
            general_messages: MessageSet::new(),
            inclusion_events: MessageSet::new(),
            missing_genes_for_sufficient_evaluation: false,
            missing_molecular_result_for_evaluation: false,
        }
    }

    /// Creates a verdict with one specific and one general message
    #[must_use]
    pub fn with_messages(
        grade: Grade,
        specific: impl Into<String>,
        general: impl Into<String>,
    ) -> Self {
        Self::new(grade).with_specific_message(specific).with_general_message(general)
    }

    /// Creates a `Pass` verdict
    #[must_use]
    pub fn pass(specific: impl Into<String>, general: impl Into<String>) -> Self {
        Self::with_messages(Grade::Pass, specific, general)
    }

    /// Creates a `Warn` verdict
    #[must_use]
    pub fn warn(specific: impl Into<String>, general: impl Into<String>) -> Self {
        Self::with_messages(Grade::Warn, specific, general)
    }

    /// Creates an `Undetermined` verdict
    #[must_use]
    pub fn undetermined(specific: impl Into<String>, general: impl Into<String>) -> Self {
        Self::with_messages(Grade::Undetermined, specific, general)
    }

    /// Creates a `Fail` verdict
    #[must_use]
    pub fn fail(specific: impl Into<String>, general: impl Into<String>) -> Self {
        Self::with_messages(Grade::Fail, specific, general)
    }

    /// Creates a `NotEvaluated` verdict
    #[must_use]
    pub fn not_evaluated() -> Self {
        Self::new(Grade::NotEvaluated)
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Returns the verdict grade
    #[must_use]
    pub const fn grade(&self) -> Grade {
        self.grade
    }

    /// Returns the specific messages
    #[must_use]
    pub const fn specific_messages(&self) -> &MessageSet {
        &self.specific_messages
    }

    /// Returns the general messages
    #[must_use]
    pub const fn general_messages(&self) -> &MessageSet {
        &self.general_messages
    }

    /// Returns the inclusion events
    #[must_use]
    pub const fn inclusion_events(&self) -> &MessageSet {
        &self.inclusion_events
    }

    /// Returns true when more genes must be tested for a confident answer
    #[must_use]
    pub const fn is_missing_genes_for_sufficient_evaluation(&self) -> bool {
        self.missing_genes_for_sufficient_evaluation
    }

    /// Returns true when no usable molecular result was available
    #[must_use]
    pub const fn is_missing_molecular_result_for_evaluation(&self) -> bool {
        self.missing_molecular_result_for_evaluation
    }

    // ------------------------------------------------------------------------
    // Copy-with-modification
    // ------------------------------------------------------------------------

    /// Returns a copy with an additional specific message
    #[must_use]
    pub fn with_specific_message(mut self, message: impl Into<String>) -> Self {
        self.specific_messages.insert(message);
        self
    }

    /// Returns a copy with an additional general message
    #[must_use]
    pub fn with_general_message(mut self, message: impl Into<String>) -> Self {
        self.general_messages.insert(message);
        self
    }

    /// Returns a copy whose specific messages are replaced
    #[must_use]
    pub fn with_specific_messages(mut self, messages: MessageSet) -> Self {
        self.specific_messages = messages;
        self
    }

    /// Returns a copy with an additional inclusion event
    #[must_use]
    pub fn with_inclusion_event(mut self, event: impl Into<String>) -> Self {
        self.inclusion_events.insert(event);
        self
    }

    /// Returns a copy with the missing-genes flag set to `value`
    #[must_use]
    pub fn with_missing_genes(mut self, value: bool) -> Self {
        self.missing_genes_for_sufficient_evaluation = value;
        self
    }

    /// Returns a copy with the missing-molecular-result flag set to `value`
    #[must_use]
    pub fn with_missing_molecular_result(mut self, value: bool) -> Self {
        self.missing_molecular_result_for_evaluation = value;
        self
    }

    // ------------------------------------------------------------------------
    // Combination
    // ------------------------------------------------------------------------

    /// Unions messages, events, and flags without checking grades.
    pub(crate) fn absorb(&mut self, other: &Self) {
        self.specific_messages.union_with(&other.specific_messages);
        self.general_messages.union_with(&other.general_messages);
        self.inclusion_events.union_with(&other.inclusion_events);
        self.missing_genes_for_sufficient_evaluation |=
            other.missing_genes_for_sufficient_evaluation;
        self.missing_molecular_result_for_evaluation |=
            other.missing_molecular_result_for_evaluation;
    }
}
