// crates/molecular-gate-core/src/runtime/selector.rs
// ============================================================================
// Module: Molecular Record Selector
// Description: Filters and orders the tests a criterion is evaluated against.
// Purpose: Drop superseded and stale tests without losing the only data left.
// Dependencies: crate::core, time
// ============================================================================

//! ## Overview
//! Selection keeps the latest comprehensive test (and, when configured, older
//! comprehensive tests within the age cutoff), then the panels that are not
//! older than that comprehensive test and not older than the cutoff.
//!
//! Output is comprehensive tests first, then panels most-recent-first, with
//! ties broken by test id. Input order never affects the result. When every
//! test would be dropped, the single most recent test is kept instead.
//!
//! Undated tests sort after dated ones and never fall within an age cutoff.

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::Date;
use time::Duration;

use crate::core::MolecularHistory;
use crate::core::MolecularTest;
use crate::core::cmp_recency;

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Selection parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Maximum test age in days; `None` disables the cutoff.
    pub max_test_age_days: Option<u32>,
    /// Keep only the latest comprehensive test.
    pub most_recent_only: bool,
}

impl SelectionPolicy {
    /// Returns the earliest date still within the cutoff.
    ///
    /// A cutoff that would precede the earliest representable date admits
    /// every dated test.
    #[must_use]
    pub fn cutoff(&self, as_of: Date) -> Option<Date> {
        self.max_test_age_days.map(|days| {
            as_of.checked_sub(Duration::days(i64::from(days))).unwrap_or(Date::MIN)
        })
    }
}

// ============================================================================
// SECTION: Selection
// ============================================================================

/// Selects the tests to evaluate as of `as_of`.
#[must_use]
pub fn select(
    history: &MolecularHistory,
    as_of: Date,
    policy: SelectionPolicy,
) -> Vec<&MolecularTest> {
    let cutoff = policy.cutoff(as_of);
    let within = |test: &MolecularTest| match cutoff {
        None => true,
        Some(cutoff) => test.date.is_some_and(|date| date >= cutoff),
    };

    let mut comprehensive: Vec<&MolecularTest> =
        history.tests().iter().filter(|test| test.experiment.is_comprehensive()).collect();
    comprehensive.sort_by(|lhs, rhs| cmp_recency(lhs, rhs));

    let mut panels: Vec<&MolecularTest> =
        history.tests().iter().filter(|test| !test.experiment.is_comprehensive()).collect();
    panels.sort_by(|lhs, rhs| cmp_recency(lhs, rhs));

    let mut selected = Vec::new();
    if let Some((latest, older)) = comprehensive.split_first() {
        if within(*latest) || !has_newer_test(history, latest) {
            selected.push(*latest);
        }
        if !policy.most_recent_only {
            selected.extend(older.iter().copied().filter(|test| within(*test)));
        }
        panels.retain(|panel| !is_superseded_by(panel, latest));
    }
    selected.extend(panels.into_iter().filter(|panel| within(*panel)));

    if selected.is_empty()
        && let Some(most_recent) =
            history.tests().iter().min_by(|lhs, rhs| cmp_recency(lhs, rhs))
    {
        selected.push(most_recent);
    }
    selected
}

/// Returns true when any test is dated strictly after `test`.
fn has_newer_test(history: &MolecularHistory, test: &MolecularTest) -> bool {
    history.tests().iter().any(|other| match (other.date, test.date) {
        (Some(other_date), Some(date)) => other_date > date,
        (Some(_), None) => true,
        (None, _) => false,
    })
}

/// Returns true when a panel predates the latest comprehensive test.
///
/// Undated panels are superseded by any dated comprehensive test.
fn is_superseded_by(panel: &MolecularTest, comprehensive: &MolecularTest) -> bool {
    match (panel.date, comprehensive.date) {
        (Some(panel_date), Some(comprehensive_date)) => panel_date < comprehensive_date,
        (None, Some(_)) => true,
        (_, None) => false,
    }
}
