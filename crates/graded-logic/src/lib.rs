// crates/graded-logic/src/lib.rs
// ============================================================================
// Module: Graded Logic Root
// Description: Public API surface for graded verdicts.
// Purpose: Wire together grades, message sets, verdicts, and combination.
// Dependencies: crate::{combine, grade, message, verdict}
// ============================================================================

//! ## Overview
//! `graded-logic` is the domain-agnostic half of criterion evaluation: a
//! five-valued [`Grade`], swappable precedence tables, duplicate-free
//! [`MessageSet`]s, the immutable [`Verdict`] value, and [`combine`] for
//! folding verdicts from several data sources into one.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod combine;
pub mod grade;
pub mod message;
pub mod verdict;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use combine::combine;
pub use grade::FailFirstPrecedence;
pub use grade::Grade;
pub use grade::GradeCounts;
pub use grade::GradePrecedence;
pub use grade::PrecedenceMode;
pub use grade::StandardPrecedence;
pub use message::MessageSet;
pub use verdict::Verdict;
