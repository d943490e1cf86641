// crates/molecular-gate-core/src/core/history.rs
// ============================================================================
// Module: Molecular History
// Description: Validated collection of a patient's molecular tests.
// Purpose: Fail fast on malformed records before evaluation begins.
// Dependencies: crate::core::test, serde
// ============================================================================

//! ## Overview
//! [`MolecularHistory`] can only be built through validation, including when
//! deserialized, so evaluation never has to re-check record invariants.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::test::MolecularTest;
use crate::core::test::RecordError;

// ============================================================================
// SECTION: History
// ============================================================================

/// A patient's molecular tests across time.
///
/// # Invariants
/// - Every test satisfies [`MolecularTest::validate`].
/// - Test identifiers are unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MolecularTest>", into = "Vec<MolecularTest>")]
pub struct MolecularHistory {
    /// Tests in input order.
    tests: Vec<MolecularTest>,
}

impl MolecularHistory {
    /// Builds a validated history.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] when any test is malformed or ids repeat.
    pub fn new(tests: Vec<MolecularTest>) -> Result<Self, RecordError> {
        let mut seen = BTreeSet::new();
        for test in &tests {
            test.validate()?;
            if !seen.insert(test.test_id.as_str()) {
                return Err(RecordError::DuplicateTestId(test.test_id.to_string()));
            }
        }
        Ok(Self {
            tests,
        })
    }

    /// Returns an empty history.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            tests: Vec::new(),
        }
    }

    /// Returns the tests in input order.
    #[must_use]
    pub fn tests(&self) -> &[MolecularTest] {
        &self.tests
    }

    /// Returns true when the history holds no tests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Returns the number of tests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tests.len()
    }
}

impl TryFrom<Vec<MolecularTest>> for MolecularHistory {
    type Error = RecordError;

    fn try_from(tests: Vec<MolecularTest>) -> Result<Self, Self::Error> {
        Self::new(tests)
    }
}

impl From<MolecularHistory> for Vec<MolecularTest> {
    fn from(history: MolecularHistory) -> Self {
        history.tests
    }
}
