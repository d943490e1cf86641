// crates/molecular-gate-core/src/core/hashing.rs
// ============================================================================
// Module: History Fingerprint
// Description: Canonical digest of a molecular history for audit events.
// Purpose: Identify the evaluated records without copying genomic data.
// Dependencies: crate::core::history, serde, serde_jcs, sha2
// ============================================================================

//! ## Overview
//! A history is fingerprinted over its RFC 8785 (JCS) canonical JSON form, so
//! the same records yield the same digest whatever the field order of the
//! source document. Audit events carry the digest instead of the findings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;

use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

use crate::core::history::MolecularHistory;

// ============================================================================
// SECTION: Digest
// ============================================================================

/// SHA-256 fingerprint of a canonicalized history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryDigest {
    /// Number of tests in the fingerprinted history.
    pub tests: usize,
    /// Lowercase hex SHA-256 of the canonical JSON bytes.
    pub sha256: String,
}

/// Errors raised while fingerprinting a history.
#[derive(Debug, Error)]
pub enum HashError {
    /// The history could not be rendered as canonical JSON.
    #[error("failed to canonicalize history: {0}")]
    Canonicalization(String),
}

/// Fingerprints `history` over its canonical JSON form.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when the history cannot be
/// serialized canonically.
pub fn hash_history(history: &MolecularHistory) -> Result<HistoryDigest, HashError> {
    let bytes =
        serde_jcs::to_vec(history).map_err(|err| HashError::Canonicalization(err.to_string()))?;
    let sha256 = Sha256::digest(&bytes).iter().fold(String::with_capacity(64), |mut out, byte| {
        let _ = write!(out, "{byte:02x}");
        out
    });
    Ok(HistoryDigest {
        tests: history.len(),
        sha256,
    })
}
