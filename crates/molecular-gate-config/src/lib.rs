// crates/molecular-gate-config/src/lib.rs
// ============================================================================
// Module: Molecular Gate Config Library
// Description: Configuration file model, validation, and canonical example.
// Purpose: Single source of truth for molecular-gate.toml semantics.
// Dependencies: molecular-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! `molecular-gate-config` defines the configuration file for the molecular
//! criterion engine. Loading is strict and fail-closed; a loaded file yields
//! the engine's [`molecular_gate_core::EvaluationSettings`] and audit sink.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
