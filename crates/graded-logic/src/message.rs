// crates/graded-logic/src/message.rs
// ============================================================================
// Module: Message Sets
// Description: Insertion-ordered, duplicate-free message collections.
// Purpose: Keep verdict messages deterministic across combination.
// Dependencies: serde::{Deserialize, Serialize}, smallvec::SmallVec
// ============================================================================

//! ## Overview
//! Verdicts usually carry one or two messages, so [`MessageSet`] stores them
//! inline and keeps first-insertion order. Unions skip messages that are
//! already present, which makes combining a verdict with itself a no-op.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// SECTION: Message Set
// ============================================================================

/// Ordered set of human-readable messages
///
/// # Invariants
/// - No two entries are equal.
/// - Iteration order is first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct MessageSet(SmallVec<[String; 2]>);

impl MessageSet {
    /// Creates an empty message set
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Inserts a message; returns false when it was already present
    pub fn insert(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if self.contains(&message) {
            return false;
        }
        self.0.push(message);
        true
    }

    /// Appends every message of `other` that is not yet present
    pub fn union_with(&mut self, other: &Self) {
        for message in other.iter() {
            if !self.contains(message) {
                self.0.push(message.to_string());
            }
        }
    }

    /// Returns true when the message is present
    #[must_use]
    pub fn contains(&self, message: &str) -> bool {
        self.0.iter().any(|entry| entry == message)
    }

    /// Returns the number of messages
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the set holds no messages
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates messages in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the messages as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for MessageSet {
    fn from(messages: Vec<String>) -> Self {
        messages.into_iter().collect()
    }
}

impl From<MessageSet> for Vec<String> {
    fn from(set: MessageSet) -> Self {
        set.0.into_vec()
    }
}

impl<S: Into<String>> FromIterator<S> for MessageSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for message in iter {
            set.insert(message);
        }
        set
    }
}

impl<S: Into<String>> Extend<S> for MessageSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for message in iter {
            self.insert(message);
        }
    }
}
