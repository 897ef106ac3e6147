//! Woods-Saxon sampler configuration.
//!
//! This module provides the tunable constants of the Woods-Saxon sampler:
//! the number of linear segments in the inverse-CDF table, how far the table
//! extends beyond the half-density radius, and where the reported cutoff
//! radius sits. All extents are measured in units of the surface diffuseness
//! `a`, so a single configuration applies to every species.
//!
//! # Loading from TOML
//!
//! ```rust
//! use nucleus_core::SamplerConfig;
//!
//! let config = SamplerConfig::from_toml_str(
//!     r#"
//!     table_steps = 2000
//!     support_diffuseness = 12.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.table_steps(), 2000);
//! assert_eq!(config.cutoff_diffuseness(), 3.0);
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Default number of linear segments in the inverse-CDF table.
pub const DEFAULT_TABLE_STEPS: usize = 1000;

/// Default table support beyond `R`, in units of `a`.
pub const DEFAULT_SUPPORT_DIFFUSENESS: f64 = 10.0;

/// Default reported cutoff beyond `R`, in units of `a`.
pub const DEFAULT_CUTOFF_DIFFUSENESS: f64 = 3.0;

/// Maximum number of table segments allowed.
pub const MAX_TABLE_STEPS: usize = 1_000_000;

/// Configuration error for the Woods-Saxon sampler.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Segment count outside valid range [1, 1_000_000].
    #[error("Invalid table step count {0}: must be in range [1, 1_000_000]")]
    InvalidStepCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// The reported cutoff must lie strictly inside the table support.
    #[error("Cutoff {cutoff} a must be strictly below the table support {support} a")]
    CutoffBeyondSupport {
        /// Cutoff in units of `a`.
        cutoff: f64,
        /// Table support in units of `a`.
        support: f64,
    },

    /// TOML input could not be parsed.
    #[error("Failed to parse sampler configuration: {0}")]
    Parse(String),
}

/// Woods-Saxon sampler configuration.
///
/// Immutable configuration specifying the accuracy and cutoff policy of the
/// Woods-Saxon sampler. Use [`SamplerConfigBuilder`] or
/// [`SamplerConfig::from_toml_str`] to construct validated instances.
///
/// # Examples
///
/// ```rust
/// use nucleus_core::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .table_steps(4000)
///     .cutoff_diffuseness(2.5)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.table_steps(), 4000);
/// assert_eq!(config.support_diffuseness(), 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplerConfig {
    /// Number of linear segments in the inverse-CDF table.
    table_steps: usize,
    /// Table support beyond `R`, in units of `a`.
    support_diffuseness: f64,
    /// Reported cutoff beyond `R`, in units of `a`.
    cutoff_diffuseness: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            table_steps: DEFAULT_TABLE_STEPS,
            support_diffuseness: DEFAULT_SUPPORT_DIFFUSENESS,
            cutoff_diffuseness: DEFAULT_CUTOFF_DIFFUSENESS,
        }
    }
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Parses and validates a configuration from a TOML fragment.
    ///
    /// Missing keys fall back to their defaults; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and any error
    /// reported by [`SamplerConfig::validate`].
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the number of linear segments in the inverse-CDF table.
    #[inline]
    pub fn table_steps(&self) -> usize {
        self.table_steps
    }

    /// Returns the table support beyond `R`, in units of `a`.
    #[inline]
    pub fn support_diffuseness(&self) -> f64 {
        self.support_diffuseness
    }

    /// Returns the reported cutoff beyond `R`, in units of `a`.
    #[inline]
    pub fn cutoff_diffuseness(&self) -> f64 {
        self.cutoff_diffuseness
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `table_steps` is 0 or greater than 1,000,000
    /// - either extent is negative or non-finite
    /// - the cutoff does not lie strictly below the table support
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_steps == 0 || self.table_steps > MAX_TABLE_STEPS {
            return Err(ConfigError::InvalidStepCount(self.table_steps));
        }
        if !self.support_diffuseness.is_finite() || self.support_diffuseness <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "support_diffuseness",
                value: format!("must be positive and finite, got {}", self.support_diffuseness),
            });
        }
        if !self.cutoff_diffuseness.is_finite() || self.cutoff_diffuseness < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "cutoff_diffuseness",
                value: format!(
                    "must be non-negative and finite, got {}",
                    self.cutoff_diffuseness
                ),
            });
        }
        if self.cutoff_diffuseness >= self.support_diffuseness {
            return Err(ConfigError::CutoffBeyondSupport {
                cutoff: self.cutoff_diffuseness,
                support: self.support_diffuseness,
            });
        }
        Ok(())
    }
}

/// Builder for [`SamplerConfig`].
///
/// Unset fields keep their defaults; validation runs at build time.
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    table_steps: Option<usize>,
    support_diffuseness: Option<f64>,
    cutoff_diffuseness: Option<f64>,
}

impl SamplerConfigBuilder {
    /// Sets the number of linear segments in the inverse-CDF table.
    #[inline]
    pub fn table_steps(mut self, table_steps: usize) -> Self {
        self.table_steps = Some(table_steps);
        self
    }

    /// Sets the table support beyond `R`, in units of `a`.
    #[inline]
    pub fn support_diffuseness(mut self, support: f64) -> Self {
        self.support_diffuseness = Some(support);
        self
    }

    /// Sets the reported cutoff beyond `R`, in units of `a`.
    #[inline]
    pub fn cutoff_diffuseness(mut self, cutoff: f64) -> Self {
        self.cutoff_diffuseness = Some(cutoff);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build(self) -> Result<SamplerConfig, ConfigError> {
        let defaults = SamplerConfig::default();
        let config = SamplerConfig {
            table_steps: self.table_steps.unwrap_or(defaults.table_steps),
            support_diffuseness: self
                .support_diffuseness
                .unwrap_or(defaults.support_diffuseness),
            cutoff_diffuseness: self
                .cutoff_diffuseness
                .unwrap_or(defaults.cutoff_diffuseness),
        };
        config.validate()?;
        Ok(config)
    }
}
