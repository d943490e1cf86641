// crates/molecular-gate-core/src/core/coverage.rs
// ============================================================================
// Module: Panel Coverage
// Description: Gene-to-mechanism target specifications and coverage predicates.
// Purpose: Describe what a targeted panel assayed and what a rule needs.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`TargetSpecification`] maps each gene a panel assayed to the finding
//! mechanisms it could detect in that gene. Rules declare their needs as
//! [`GeneCoverage`] entries; [`CoveragePredicate::missing`] reports which
//! mechanisms are absent so the guard can phrase an exact message.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Test Targets
// ============================================================================

/// Finding mechanism a panel can detect in a gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestTarget {
    /// Small variants.
    Mutation,
    /// Gene fusions.
    Fusion,
    /// Copy-number gains.
    Amplification,
    /// Copy-number losses.
    Deletion,
}

impl TestTarget {
    /// All mechanisms in declaration order.
    pub const ALL: [Self; 4] = [Self::Mutation, Self::Fusion, Self::Amplification, Self::Deletion];

    /// Returns the plural display form used in coverage messages.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Mutation => "mutations",
            Self::Fusion => "fusions",
            Self::Amplification => "amplifications",
            Self::Deletion => "deletions",
        }
    }
}

/// Genes assayed by a panel and the mechanisms tested per gene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetSpecification(BTreeMap<String, BTreeSet<TestTarget>>);

impl TargetSpecification {
    /// Creates an empty specification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy that also covers `gene` for `targets`.
    #[must_use]
    pub fn with_gene(
        mut self,
        gene: impl Into<String>,
        targets: impl IntoIterator<Item = TestTarget>,
    ) -> Self {
        self.0.entry(gene.into()).or_default().extend(targets);
        self
    }

    /// Returns the mechanisms tested for `gene`, or `None` when not assayed.
    #[must_use]
    pub fn targets_for(&self, gene: &str) -> Option<&BTreeSet<TestTarget>> {
        self.0.get(gene)
    }

    /// Returns true when the gene was assayed for any mechanism.
    #[must_use]
    pub fn covers_gene(&self, gene: &str) -> bool {
        self.0.get(gene).is_some_and(|targets| !targets.is_empty())
    }
}

// ============================================================================
// SECTION: Coverage Predicates
// ============================================================================

/// Mechanisms a rule needs a panel to have tested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "targets", rename_all = "snake_case")]
pub enum CoveragePredicate {
    /// Every mechanism must be tested.
    All,
    /// At least one mechanism must be tested.
    Any,
    /// Every listed mechanism must be tested.
    And(Vec<TestTarget>),
    /// At least one listed mechanism must be tested.
    Or(Vec<TestTarget>),
    /// The named mechanism must be tested.
    AtLeast(TestTarget),
}

/// Mechanisms missing for a predicate to hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGap {
    /// Missing mechanisms in declaration order.
    pub missing: Vec<TestTarget>,
    /// Number of mechanisms the predicate names.
    pub required: usize,
    /// True when any one of the missing mechanisms would satisfy the predicate.
    pub alternatives: bool,
}

impl CoveragePredicate {
    /// Returns the mechanisms this predicate refers to.
    #[must_use]
    pub fn targets(&self) -> Vec<TestTarget> {
        match self {
            Self::All | Self::Any => TestTarget::ALL.to_vec(),
            Self::And(targets) | Self::Or(targets) => {
                let unique: BTreeSet<TestTarget> = targets.iter().copied().collect();
                unique.into_iter().collect()
            }
            Self::AtLeast(target) => vec![*target],
        }
    }

    /// Returns the coverage gap against `tested`, or `None` when satisfied.
    #[must_use]
    pub fn missing(&self, tested: &BTreeSet<TestTarget>) -> Option<CoverageGap> {
        let targets = self.targets();
        let required = targets.len();
        match self {
            Self::Any | Self::Or(_) => {
                if targets.iter().any(|target| tested.contains(target)) {
                    None
                } else {
                    Some(CoverageGap {
                        missing: targets,
                        required,
                        alternatives: required > 1,
                    })
                }
            }
            Self::All | Self::And(_) | Self::AtLeast(_) => {
                let missing: Vec<TestTarget> =
                    targets.into_iter().filter(|target| !tested.contains(target)).collect();
                if missing.is_empty() {
                    None
                } else {
                    Some(CoverageGap {
                        missing,
                        required,
                        alternatives: false,
                    })
                }
            }
        }
    }
}

/// Coverage a rule needs for one gene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneCoverage {
    /// Gene symbol.
    pub gene: String,
    /// Mechanisms that must have been tested.
    pub predicate: CoveragePredicate,
}

impl GeneCoverage {
    /// Creates a coverage requirement.
    #[must_use]
    pub fn new(gene: impl Into<String>, predicate: CoveragePredicate) -> Self {
        Self {
            gene: gene.into(),
            predicate,
        }
    }
}
