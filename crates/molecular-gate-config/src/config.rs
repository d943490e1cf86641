// crates/molecular-gate-config/src/config.rs
// ============================================================================
// Module: Molecular Gate Configuration
// Description: Configuration loading and validation for the criterion engine.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: molecular-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section is optional; omitted keys take the engine defaults. The
//! loaded file maps onto [`EvaluationSettings`] and an audit sink.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use molecular_gate_core::CriterionEngine;
use molecular_gate_core::EvaluationAuditSink;
use molecular_gate_core::EvaluationSettings;
use molecular_gate_core::FileAuditSink;
use molecular_gate_core::NoopAuditSink;
use molecular_gate_core::PrecedenceMode;
use molecular_gate_core::StderrAuditSink;
use molecular_gate_core::settings::DEFAULT_ASSUMED_FULL_GAIN_COPIES;
use molecular_gate_core::settings::DEFAULT_CLONAL_CUTOFF;
use molecular_gate_core::settings::DEFAULT_HRD_GENES;
use molecular_gate_core::settings::DEFAULT_MSI_GENES;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "molecular-gate.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "MOLECULAR_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of genes in a configured gene set.
pub(crate) const MAX_GENE_SET_SIZE: usize = 256;
/// Maximum length of a gene symbol.
pub(crate) const MAX_GENE_SYMBOL_LENGTH: usize = 64;
/// Largest accepted copy number for an assumed full gain.
pub(crate) const MAX_ASSUMED_FULL_GAIN_COPIES: u32 = 1_000;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Engine wired from a configuration file.
pub type ConfiguredEngine = CriterionEngine<Box<dyn EvaluationAuditSink>>;

/// Molecular gate configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MolecularGateConfig {
    /// Test selection policy.
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Evidence thresholds.
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    /// Gene sets for genome-wide characteristics.
    #[serde(default)]
    pub gene_sets: GeneSetsConfig,
    /// Verdict combination policy.
    #[serde(default)]
    pub combination: CombinationConfig,
    /// Audit trail configuration.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl MolecularGateConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.selection.validate()?;
        self.thresholds.validate()?;
        self.gene_sets.validate()?;
        self.audit.validate()
    }

    /// Returns the engine settings described by this configuration.
    #[must_use]
    pub fn evaluation_settings(&self) -> EvaluationSettings {
        EvaluationSettings {
            max_test_age_days: self.selection.max_test_age_days,
            most_recent_only: self.selection.most_recent_only,
            clonal_cutoff: self.thresholds.clonal_cutoff,
            assumed_full_gain_copies: self.thresholds.assumed_full_gain_copies,
            hrd_genes: normalized_genes(&self.gene_sets.hrd_genes),
            msi_genes: normalized_genes(&self.gene_sets.msi_genes),
            precedence: self.combination.precedence,
        }
    }

    /// Builds the configured audit sink.
    ///
    /// Disabled auditing yields a no-op sink; an enabled audit without a path
    /// logs JSON lines to stderr.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the audit file cannot be opened.
    pub fn build_audit_sink(&self) -> Result<Box<dyn EvaluationAuditSink>, ConfigError> {
        if !self.audit.enabled {
            return Ok(Box::new(NoopAuditSink));
        }
        match &self.audit.path {
            Some(path) => {
                let sink = FileAuditSink::new(path).map_err(|err| {
                    ConfigError::Io(format!("audit log {}: {err}", path.display()))
                })?;
                Ok(Box::new(sink))
            }
            None => Ok(Box::new(StderrAuditSink)),
        }
    }

    /// Builds an engine wired with the configured settings and audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the audit sink cannot be built.
    pub fn build_engine(&self) -> Result<ConfiguredEngine, ConfigError> {
        let sink = self.build_audit_sink()?;
        let engine = CriterionEngine::new(self.evaluation_settings());
        Ok(engine.with_audit_sink(sink, self.audit.hash_history))
    }
}

// ============================================================================
// SECTION: Selection
// ============================================================================

/// Which tests of a history are evaluated.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    /// Maximum test age in days; omitted disables the cutoff.
    #[serde(default)]
    pub max_test_age_days: Option<u32>,
    /// Evaluate only the latest comprehensive test.
    #[serde(default = "default_most_recent_only")]
    pub most_recent_only: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_test_age_days: None,
            most_recent_only: default_most_recent_only(),
        }
    }
}

impl SelectionConfig {
    /// Validates selection configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_test_age_days == Some(0) {
            return Err(ConfigError::Invalid(
                "selection.max_test_age_days must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Thresholds
// ============================================================================

/// Numeric evidence thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    /// Clonal likelihood below this value counts as subclonal.
    #[serde(default = "default_clonal_cutoff")]
    pub clonal_cutoff: f64,
    /// Copy number assumed for a full gain of unknown magnitude.
    #[serde(default = "default_assumed_full_gain_copies")]
    pub assumed_full_gain_copies: u32,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            clonal_cutoff: default_clonal_cutoff(),
            assumed_full_gain_copies: default_assumed_full_gain_copies(),
        }
    }
}

impl ThresholdsConfig {
    /// Validates threshold configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.clonal_cutoff) {
            return Err(ConfigError::Invalid(
                "thresholds.clonal_cutoff must be within [0, 1]".to_string(),
            ));
        }
        if self.assumed_full_gain_copies == 0
            || self.assumed_full_gain_copies > MAX_ASSUMED_FULL_GAIN_COPIES
        {
            let max = MAX_ASSUMED_FULL_GAIN_COPIES;
            return Err(ConfigError::Invalid(format!(
                "thresholds.assumed_full_gain_copies must be within 1..={max}"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Gene Sets
// ============================================================================

/// Gene sets consulted by genome-wide characteristic rules.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneSetsConfig {
    /// Homologous-recombination genes.
    #[serde(default = "default_hrd_genes")]
    pub hrd_genes: Vec<String>,
    /// Mismatch-repair genes.
    #[serde(default = "default_msi_genes")]
    pub msi_genes: Vec<String>,
}

impl Default for GeneSetsConfig {
    fn default() -> Self {
        Self {
            hrd_genes: default_hrd_genes(),
            msi_genes: default_msi_genes(),
        }
    }
}

impl GeneSetsConfig {
    /// Validates gene set configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_gene_set("gene_sets.hrd_genes", &self.hrd_genes)?;
        validate_gene_set("gene_sets.msi_genes", &self.msi_genes)
    }
}

// ============================================================================
// SECTION: Combination
// ============================================================================

/// Verdict combination policy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CombinationConfig {
    /// Grade precedence used when combining per-test verdicts.
    #[serde(default)]
    pub precedence: PrecedenceMode,
}

// ============================================================================
// SECTION: Audit
// ============================================================================

/// Audit trail configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// Emit one audit event per evaluation.
    #[serde(default)]
    pub enabled: bool,
    /// Append-only JSON lines file; stderr when omitted.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Attach a canonical hash of the evaluated history to each event.
    #[serde(default = "default_hash_history")]
    pub hash_history: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: None,
            hash_history: default_hash_history(),
        }
    }
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if !self.enabled {
            return Err(ConfigError::Invalid("audit.path requires audit.enabled=true".to_string()));
        }
        validate_path_string("audit.path", &path.to_string_lossy())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates gene symbols: bounded count and length, non-blank, unique.
fn validate_gene_set(field: &str, genes: &[String]) -> Result<(), ConfigError> {
    if genes.len() > MAX_GENE_SET_SIZE {
        return Err(ConfigError::Invalid(format!(
            "{field} exceeds {MAX_GENE_SET_SIZE} entries"
        )));
    }
    let mut seen = BTreeSet::new();
    for gene in genes {
        let symbol = gene.trim();
        if symbol.is_empty() {
            return Err(ConfigError::Invalid(format!("{field} contains an empty gene symbol")));
        }
        if symbol.len() > MAX_GENE_SYMBOL_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} gene symbol too long: {symbol}")));
        }
        if !seen.insert(symbol) {
            return Err(ConfigError::Invalid(format!("{field} contains duplicate gene {symbol}")));
        }
    }
    Ok(())
}

/// Trims gene symbols into the set the engine consumes.
fn normalized_genes(genes: &[String]) -> BTreeSet<String> {
    genes.iter().map(|gene| gene.trim().to_string()).collect()
}

/// Default for `selection.most_recent_only`.
pub(crate) const fn default_most_recent_only() -> bool {
    true
}

/// Default for `thresholds.clonal_cutoff`.
pub(crate) const fn default_clonal_cutoff() -> f64 {
    DEFAULT_CLONAL_CUTOFF
}

/// Default for `thresholds.assumed_full_gain_copies`.
pub(crate) const fn default_assumed_full_gain_copies() -> u32 {
    DEFAULT_ASSUMED_FULL_GAIN_COPIES
}

/// Default for `gene_sets.hrd_genes`.
pub(crate) fn default_hrd_genes() -> Vec<String> {
    DEFAULT_HRD_GENES.iter().map(ToString::to_string).collect()
}

/// Default for `gene_sets.msi_genes`.
pub(crate) fn default_msi_genes() -> Vec<String> {
    DEFAULT_MSI_GENES.iter().map(ToString::to_string).collect()
}

/// Default for `audit.hash_history`.
pub(crate) const fn default_hash_history() -> bool {
    true
}
