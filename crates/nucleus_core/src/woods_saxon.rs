//! Woods-Saxon radial sampling.
//!
//! The Woods-Saxon density describes the nucleon distribution of spherical
//! heavy nuclei:
//! ```text
//! rho(r) = rho_0 / (1 + exp((r - R) / a))
//! ```
//! where:
//! - R = half-density radius
//! - a = surface diffuseness
//!
//! ## Inverse-CDF table
//!
//! The radial distribution `r^2 rho(r)` has no closed-form inverse CDF, so it
//! is approximated once per nucleus:
//! ```text
//! r_i = i * r_max / n,                      i = 0..=n
//! C_0 = 0
//! C_i = C_{i-1} + (w(r_{i-1}) + w(r_i)) * dr / 2
//! ```
//! with `w(r) = r^2 rho(r)`, normalised so that `C_n = 1`. A uniform draw `u`
//! is inverted by locating `C_i <= u < C_{i+1}` and interpolating linearly
//! between `r_i` and `r_{i+1}`.
//!
//! The table extends to `r_max = R + support * a` while the reported cutoff
//! radius is `R + cutoff * a`, with `cutoff < support` (see
//! [`SamplerConfig`]).

use std::f64::consts::TAU;
use std::sync::Arc;

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use tracing::debug;

use crate::config::SamplerConfig;
use crate::error::NucleusError;

/// Woods-Saxon shape parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WoodsSaxonParams {
    /// Half-density radius R (fm)
    radius: f64,
    /// Surface diffuseness a (fm)
    diffuseness: f64,
}

impl WoodsSaxonParams {
    /// Create Woods-Saxon parameters with validation.
    ///
    /// # Arguments
    /// * `radius` - Half-density radius R in fm (must be positive)
    /// * `diffuseness` - Surface diffuseness a in fm (must be positive)
    ///
    /// # Errors
    /// `NucleusError::InvalidRadius` or `NucleusError::InvalidDiffuseness`
    /// for non-positive or non-finite values.
    pub fn new(radius: f64, diffuseness: f64) -> Result<Self, NucleusError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(NucleusError::InvalidRadius { radius });
        }
        if !diffuseness.is_finite() || diffuseness <= 0.0 {
            return Err(NucleusError::InvalidDiffuseness { diffuseness });
        }
        Ok(Self {
            radius,
            diffuseness,
        })
    }

    /// Half-density radius R (fm).
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Surface diffuseness a (fm).
    #[inline]
    pub fn diffuseness(&self) -> f64 {
        self.diffuseness
    }

    /// Unnormalised density at radius `r`, with `rho(0) ~ 1`.
    #[inline]
    pub fn density(&self, r: f64) -> f64 {
        fermi((r - self.radius) / self.diffuseness)
    }

    /// Unnormalised radial weight `r^2 rho(r)`.
    #[inline]
    pub fn radial_weight(&self, r: f64) -> f64 {
        r * r * self.density(r)
    }
}

/// `1 / (1 + exp(z))` without overflow for large `z`.
#[inline]
fn fermi(z: f64) -> f64 {
    if z > 0.0 {
        let e = (-z).exp();
        e / (1.0 + e)
    } else {
        1.0 / (1.0 + z.exp())
    }
}

/// Samples nucleon positions from a spherically symmetric Woods-Saxon density.
///
/// The inverse-CDF table is built once in [`WoodsSaxonSampler::new`] and is
/// immutable afterwards; clones share it. Sampling borrows the sampler
/// immutably and only advances the random source it is given.
///
/// # Examples
///
/// ```rust
/// use nucleus_core::rng::NucleonRng;
/// use nucleus_core::{SamplerConfig, WoodsSaxonParams, WoodsSaxonSampler};
///
/// let params = WoodsSaxonParams::new(6.62, 0.546).unwrap();
/// let sampler = WoodsSaxonSampler::new(params, &SamplerConfig::default()).unwrap();
///
/// let mut rng = NucleonRng::from_seed(1);
/// let r = sampler.sample_radius(&mut rng);
/// assert!(r >= 0.0 && r <= sampler.max_support());
/// assert!(sampler.cutoff() < sampler.max_support());
/// ```
#[derive(Clone, Debug)]
pub struct WoodsSaxonSampler {
    params: WoodsSaxonParams,
    /// Reported cutoff radius (fm).
    cutoff: f64,
    /// Table support r_max (fm).
    max_support: f64,
    /// Knot radii, `table_steps + 1` entries.
    radii: Arc<[f64]>,
    /// Normalised cumulative weights at each knot; first 0, last exactly 1.
    cdf: Arc<[f64]>,
    cos_theta: Uniform<f64>,
    phi: Uniform<f64>,
}

impl WoodsSaxonSampler {
    /// Builds the inverse-CDF table for `params`.
    ///
    /// # Errors
    /// - `NucleusError::Config` if `config` fails validation
    /// - `NucleusError::DegenerateTable` if the radial weight does not
    ///   integrate to a finite, positive total (e.g. R and a near `1e-200`,
    ///   where `r^2` underflows to zero)
    pub fn new(params: WoodsSaxonParams, config: &SamplerConfig) -> Result<Self, NucleusError> {
        config.validate()?;

        let steps = config.table_steps();
        let max_support = params.radius + config.support_diffuseness() * params.diffuseness;
        let cutoff = params.radius + config.cutoff_diffuseness() * params.diffuseness;
        let dr = max_support / steps as f64;

        let radii: Vec<f64> = (0..=steps).map(|i| i as f64 * dr).collect();

        let mut cdf = Vec::with_capacity(steps + 1);
        let mut total = 0.0;
        let mut previous = params.radial_weight(0.0);
        cdf.push(0.0);
        for &r in &radii[1..] {
            let weight = params.radial_weight(r);
            total += 0.5 * (previous + weight) * dr;
            cdf.push(total);
            previous = weight;
        }
        if !total.is_finite() || total <= 0.0 {
            return Err(NucleusError::DegenerateTable {
                radius: params.radius,
                diffuseness: params.diffuseness,
            });
        }
        for c in cdf.iter_mut() {
            *c /= total;
        }
        cdf[steps] = 1.0;

        debug!(
            radius = params.radius,
            diffuseness = params.diffuseness,
            steps,
            max_support,
            cutoff,
            "built Woods-Saxon inverse-CDF table"
        );

        Ok(Self {
            params,
            cutoff,
            max_support,
            radii: radii.into(),
            cdf: cdf.into(),
            cos_theta: Uniform::new_inclusive(-1.0, 1.0),
            phi: Uniform::new(0.0, TAU),
        })
    }

    /// Woods-Saxon parameters the table was built from.
    #[inline]
    pub fn params(&self) -> &WoodsSaxonParams {
        &self.params
    }

    /// Reported cutoff radius `R + cutoff * a` (fm).
    #[inline]
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Table support `r_max = R + support * a` (fm). Always above the cutoff.
    #[inline]
    pub fn max_support(&self) -> f64 {
        self.max_support
    }

    /// Number of linear segments in the table.
    #[inline]
    pub fn table_steps(&self) -> usize {
        self.radii.len() - 1
    }

    /// Find the segment index `i` such that `cdf[i] <= u < cdf[i+1]`,
    /// clamped to [0, n-2].
    #[inline]
    fn find_segment(&self, u: f64) -> usize {
        let pos = self.cdf.partition_point(|&c| c <= u);
        if pos == 0 {
            0
        } else if pos >= self.cdf.len() {
            self.cdf.len() - 2
        } else {
            pos - 1
        }
    }

    /// Maps a cumulative probability to a radius.
    ///
    /// Inputs are clamped to [0, 1] (NaN maps to 0), so the result always lies
    /// in `[0, max_support]`.
    pub fn inverse_cdf(&self, u: f64) -> f64 {
        let u = if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0) };
        let i = self.find_segment(u);

        let (c0, c1) = (self.cdf[i], self.cdf[i + 1]);
        let (r0, r1) = (self.radii[i], self.radii[i + 1]);
        let width = c1 - c0;
        if width <= 0.0 {
            return r0;
        }
        let t = ((u - c0) / width).clamp(0.0, 1.0);
        r0 + t * (r1 - r0)
    }

    /// Cumulative probability of the tabulated distribution at radius `r`.
    ///
    /// Returns 0 below the origin and 1 beyond `max_support`.
    pub fn table_cdf(&self, r: f64) -> f64 {
        if r <= 0.0 {
            return 0.0;
        }
        if r >= self.max_support {
            return 1.0;
        }
        let pos = self.radii.partition_point(|&ri| ri <= r);
        let i = pos.saturating_sub(1).min(self.radii.len() - 2);
        let (r0, r1) = (self.radii[i], self.radii[i + 1]);
        let (c0, c1) = (self.cdf[i], self.cdf[i + 1]);
        c0 + (c1 - c0) * (r - r0) / (r1 - r0)
    }

    /// Draws one radius.
    #[inline]
    pub fn sample_radius<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.inverse_cdf(rng.gen::<f64>())
    }

    /// Draws one isotropic position `[x, y, z]` centred on the origin.
    #[inline]
    pub fn sample_position<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; 3] {
        let r = self.sample_radius(rng);
        let cos_theta = self.cos_theta.sample(rng);
        let phi = self.phi.sample(rng);
        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
        let (sin_phi, cos_phi) = phi.sin_cos();
        [
            r * sin_theta * cos_phi,
            r * sin_theta * sin_phi,
            r * cos_theta,
        ]
    }
}
