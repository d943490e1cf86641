// crates/graded-logic/src/combine.rs
// ============================================================================
// Module: Verdict Combination
// Description: Precedence-driven merge of verdicts from several sources.
// Purpose: Fold per-source verdicts into one verdict deterministically.
// Dependencies: crate::{grade, verdict}
// ============================================================================

//! ## Overview
//! Combination picks the best grade present under a [`GradePrecedence`]
//! table, then unions the messages of every verdict carrying that grade.
//! Verdicts of other grades are discarded. Input order only determines
//! message order, never the resulting grade.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::grade::GradePrecedence;
use crate::verdict::Verdict;

// ============================================================================
// SECTION: Combination
// ============================================================================

/// Combines verdicts under a precedence table
///
/// Returns `None` when no verdicts are supplied.
#[must_use]
pub fn combine<L, I>(verdicts: I, precedence: &L) -> Option<Verdict>
where
    L: GradePrecedence,
    I: IntoIterator<Item = Verdict>,
{
    let verdicts: Vec<Verdict> = verdicts.into_iter().collect();
    let best = precedence.best_of(verdicts.iter().map(Verdict::grade))?;

    let mut winners = verdicts.into_iter().filter(|verdict| verdict.grade() == best);
    let mut combined = winners.next()?;
    for verdict in winners {
        combined.absorb(&verdict);
    }
    Some(combined)
}
