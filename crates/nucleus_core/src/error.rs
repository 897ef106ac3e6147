//! Error types for nucleus construction.
//!
//! This module provides:
//! - `NucleusError`: Errors raised while building a nucleus from a species
//!   symbol or from explicit Woods-Saxon parameters
//!
//! Sampling itself has no error type: once a nucleus exists, every sampling
//! pass is total over its inputs.

use thiserror::Error;

use crate::config::ConfigError;

/// Nucleus construction errors.
///
/// All variants are raised synchronously at construction time; no partially
/// built nucleus is ever returned alongside them.
///
/// # Variants
/// - `UnknownSpecies`: Species symbol not present in the species table
/// - `InvalidRadius`: Non-positive or non-finite half-density radius
/// - `InvalidDiffuseness`: Non-positive or non-finite surface diffuseness
/// - `DegenerateTable`: Radial weight integrates to zero or overflows
/// - `EmptyNucleus`: Mass number of zero
/// - `Config`: Invalid sampler configuration
///
/// # Examples
/// ```
/// use nucleus_core::NucleusError;
///
/// let err = NucleusError::UnknownSpecies { species: "Xx".to_string() };
/// assert!(format!("{}", err).contains("Xx"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NucleusError {
    /// Species symbol is not recognised.
    #[error("Unknown species: '{species}'")]
    UnknownSpecies {
        /// The unrecognised symbol
        species: String,
    },

    /// Invalid Woods-Saxon half-density radius.
    #[error("Invalid Woods-Saxon radius: R = {radius} fm")]
    InvalidRadius {
        /// The invalid radius value
        radius: f64,
    },

    /// Invalid Woods-Saxon surface diffuseness.
    #[error("Invalid Woods-Saxon diffuseness: a = {diffuseness} fm")]
    InvalidDiffuseness {
        /// The invalid diffuseness value
        diffuseness: f64,
    },

    /// Parameters are valid individually but too small or too large for the
    /// radial weight to integrate to a finite, positive total.
    #[error("Degenerate Woods-Saxon table: R = {radius} fm, a = {diffuseness} fm")]
    DegenerateTable {
        /// Half-density radius
        radius: f64,
        /// Surface diffuseness
        diffuseness: f64,
    },

    /// A nucleus must hold at least one nucleon.
    #[error("Invalid mass number: A = 0")]
    EmptyNucleus,

    /// Sampler configuration rejected during construction.
    #[error("Invalid sampler configuration: {0}")]
    Config(#[from] ConfigError),
}
