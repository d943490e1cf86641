// crates/graded-logic/src/grade.rs
// ============================================================================
// Module: Graded Values
// Description: Five-valued grades and configurable precedence tables.
// Purpose: Provide deterministic grade ranking for verdict combination.
// Dependencies: serde::{Deserialize, Serialize}
// ============================================================================

//! ## Overview
//! Defines the graded truth values (`pass/warn/undetermined/fail/not_evaluated`)
//! and precedence tables that decide which grade wins when several sources
//! disagree. The default table ranks `Undetermined` above `Fail`, so a source
//! that cannot assert absence is never silently overruled by one that can.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Grade Value
// ============================================================================

/// Graded outcome of evaluating one criterion against one data source
///
/// # Invariants
/// - Represents a closed set of outcomes; every evaluation maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// Criterion is met with full confidence
    Pass,
    /// Criterion is met with reduced confidence
    Warn,
    /// Data is insufficient to decide
    Undetermined,
    /// Criterion is definitively not met
    Fail,
    /// Criterion was not evaluated against this source
    NotEvaluated,
}

impl Grade {
    /// All grades in declaration order
    pub const ALL: [Self; 5] =
        [Self::Pass, Self::Warn, Self::Undetermined, Self::Fail, Self::NotEvaluated];

    /// Returns a stable lowercase label for the grade
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Undetermined => "undetermined",
            Self::Fail => "fail",
            Self::NotEvaluated => "not_evaluated",
        }
    }
}

// ============================================================================
// SECTION: Grade Counts
// ============================================================================

/// Per-grade tallies for a collection of verdicts
///
/// # Invariants
/// - The counts sum to the number of grades tallied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCounts {
    /// Number of `Pass` grades
    pub pass: usize,
    /// Number of `Warn` grades
    pub warn: usize,
    /// Number of `Undetermined` grades
    pub undetermined: usize,
    /// Number of `Fail` grades
    pub fail: usize,
    /// Number of `NotEvaluated` grades
    pub not_evaluated: usize,
}

impl GradeCounts {
    /// Records one grade
    pub const fn record(&mut self, grade: Grade) {
        match grade {
            Grade::Pass => self.pass += 1,
            Grade::Warn => self.warn += 1,
            Grade::Undetermined => self.undetermined += 1,
            Grade::Fail => self.fail += 1,
            Grade::NotEvaluated => self.not_evaluated += 1,
        }
    }

    /// Returns the count recorded for a grade
    #[must_use]
    pub const fn count(&self, grade: Grade) -> usize {
        match grade {
            Grade::Pass => self.pass,
            Grade::Warn => self.warn,
            Grade::Undetermined => self.undetermined,
            Grade::Fail => self.fail,
            Grade::NotEvaluated => self.not_evaluated,
        }
    }
}

impl FromIterator<Grade> for GradeCounts {
    fn from_iter<I: IntoIterator<Item = Grade>>(iter: I) -> Self {
        let mut counts = Self::default();
        for grade in iter {
            counts.record(grade);
        }
        counts
    }
}

// ============================================================================
// SECTION: Precedence Tables
// ============================================================================

/// Precedence table used to pick the winning grade among several sources
pub trait GradePrecedence {
    /// Returns the rank of a grade; higher ranks win
    fn rank(&self, grade: Grade) -> u8;

    /// Returns the winning grade of two
    fn best(&self, lhs: Grade, rhs: Grade) -> Grade {
        if self.rank(rhs) > self.rank(lhs) { rhs } else { lhs }
    }

    /// Returns the winning grade of a collection, or `None` when empty
    fn best_of<I>(&self, grades: I) -> Option<Grade>
    where
        I: IntoIterator<Item = Grade>,
        Self: Sized,
    {
        grades.into_iter().reduce(|best, grade| self.best(best, grade))
    }
}

/// Standard precedence: pass > warn > undetermined > fail > not evaluated
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Clone, Copy)]
pub struct StandardPrecedence;

impl GradePrecedence for StandardPrecedence {
    fn rank(&self, grade: Grade) -> u8 {
        match grade {
            Grade::Pass => 4,
            Grade::Warn => 3,
            Grade::Undetermined => 2,
            Grade::Fail => 1,
            Grade::NotEvaluated => 0,
        }
    }
}

/// Fail-first precedence: pass > warn > fail > undetermined > not evaluated
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Clone, Copy)]
pub struct FailFirstPrecedence;

impl GradePrecedence for FailFirstPrecedence {
    fn rank(&self, grade: Grade) -> u8 {
        match grade {
            Grade::Pass => 4,
            Grade::Warn => 3,
            Grade::Fail => 2,
            Grade::Undetermined => 1,
            Grade::NotEvaluated => 0,
        }
    }
}

/// Runtime-selectable precedence table
///
/// # Invariants
/// - Enumerates the supported precedence tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecedenceMode {
    /// Standard precedence (default)
    #[default]
    Standard,
    /// A definitive fail outranks an undetermined grade
    FailBeforeUndetermined,
}

impl GradePrecedence for PrecedenceMode {
    fn rank(&self, grade: Grade) -> u8 {
        match self {
            Self::Standard => StandardPrecedence.rank(grade),
            Self::FailBeforeUndetermined => FailFirstPrecedence.rank(grade),
        }
    }
}
