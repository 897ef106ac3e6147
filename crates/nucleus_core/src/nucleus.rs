//! Nucleus container and sampling entry point.
//!
//! A [`Nucleus`] owns a fixed, ordered ensemble of [`Nucleon`]s and redraws
//! all of their positions on every [`Nucleus::sample_nucleons`] call. The
//! density model is a closed set, [`NucleusShape`], dispatched by `match`.
//!
//! ## Example
//!
//! ```
//! use nucleus_core::rng::NucleonRng;
//! use nucleus_core::Nucleus;
//!
//! let mut lead = Nucleus::create("Pb").unwrap();
//! let mut proton = Nucleus::create("p").unwrap();
//! let mut rng = NucleonRng::from_seed(2015);
//!
//! // Place the two nuclei on either side of a 4 fm impact parameter.
//! let b = 4.0;
//! lead.sample_nucleons(-b / 2.0, &mut rng);
//! proton.sample_nucleons(b / 2.0, &mut rng);
//!
//! assert_eq!(lead.len(), 208);
//! assert_eq!(proton.iter().next().unwrap().x(), 2.0);
//! assert!(lead.radius() > proton.radius());
//! ```

use rand::Rng;
use tracing::{debug, instrument};

use crate::config::SamplerConfig;
use crate::error::NucleusError;
use crate::nucleon::Nucleon;
use crate::species::Species;
use crate::woods_saxon::{WoodsSaxonParams, WoodsSaxonSampler};

/// Density model of a nucleus.
///
/// # Supported Shapes
///
/// - `Proton`: a single point-like nucleon, no randomness
/// - `WoodsSaxon`: spherically symmetric Woods-Saxon density
#[derive(Clone, Debug)]
pub enum NucleusShape {
    /// Point-like proton.
    Proton,
    /// Woods-Saxon nucleus with its prebuilt sampler.
    WoodsSaxon(WoodsSaxonSampler),
}

impl NucleusShape {
    /// Get the shape name.
    pub fn name(&self) -> &'static str {
        match self {
            NucleusShape::Proton => "proton",
            NucleusShape::WoodsSaxon(_) => "woods-saxon",
        }
    }
}

/// An ensemble of nucleons sampled from a nuclear density.
///
/// The nucleon count is fixed at construction. Iteration order is the slot
/// order and never changes; only positions and per-event flags do.
#[derive(Clone, Debug)]
pub struct Nucleus {
    nucleons: Vec<Nucleon>,
    shape: NucleusShape,
    species: Option<Species>,
}

impl Nucleus {
    /// Creates a nucleus from a species symbol, e.g. `"p"` or `"Pb"`.
    ///
    /// # Errors
    /// `NucleusError::UnknownSpecies` for unrecognised symbols.
    ///
    /// # Examples
    /// ```
    /// use nucleus_core::{Nucleus, NucleusError};
    ///
    /// let lead = Nucleus::create("Pb").unwrap();
    /// assert_eq!(lead.mass_number(), 208);
    ///
    /// assert!(matches!(
    ///     Nucleus::create("Xx"),
    ///     Err(NucleusError::UnknownSpecies { .. })
    /// ));
    /// ```
    pub fn create(species: &str) -> Result<Self, NucleusError> {
        Self::create_with_config(species, &SamplerConfig::default())
    }

    /// Creates a nucleus from a species symbol with a custom sampler policy.
    pub fn create_with_config(species: &str, config: &SamplerConfig) -> Result<Self, NucleusError> {
        let species: Species = species.parse()?;
        Self::from_species(species, config)
    }

    /// Creates a nucleus for an already-resolved species.
    pub fn from_species(species: Species, config: &SamplerConfig) -> Result<Self, NucleusError> {
        let mut nucleus = match species.woods_saxon_params()? {
            None => Self::proton(),
            Some(params) => Self::with_params(species.mass_number(), params, config)?,
        };
        nucleus.species = Some(species);
        debug!(
            species = %species,
            mass_number = nucleus.mass_number(),
            shape = nucleus.shape.name(),
            radius = nucleus.radius(),
            "created nucleus"
        );
        Ok(nucleus)
    }

    /// Creates a single proton.
    pub fn proton() -> Self {
        Self {
            nucleons: vec![Nucleon::default()],
            shape: NucleusShape::Proton,
            species: None,
        }
    }

    /// Creates a Woods-Saxon nucleus with `mass_number` nucleons and
    /// parameters `radius` (R) and `diffuseness` (a), both in fm.
    ///
    /// # Errors
    /// - `NucleusError::EmptyNucleus` if `mass_number` is 0
    /// - `NucleusError::InvalidRadius` / `InvalidDiffuseness` for
    ///   non-positive parameters
    /// - `NucleusError::DegenerateTable` for parameters whose radial weight
    ///   underflows or overflows
    pub fn woods_saxon(
        mass_number: usize,
        radius: f64,
        diffuseness: f64,
    ) -> Result<Self, NucleusError> {
        Self::woods_saxon_with_config(mass_number, radius, diffuseness, &SamplerConfig::default())
    }

    /// Same as [`Nucleus::woods_saxon`] with a custom sampler policy.
    pub fn woods_saxon_with_config(
        mass_number: usize,
        radius: f64,
        diffuseness: f64,
        config: &SamplerConfig,
    ) -> Result<Self, NucleusError> {
        let params = WoodsSaxonParams::new(radius, diffuseness)?;
        Self::with_params(mass_number, params, config)
    }

    fn with_params(
        mass_number: usize,
        params: WoodsSaxonParams,
        config: &SamplerConfig,
    ) -> Result<Self, NucleusError> {
        if mass_number == 0 {
            return Err(NucleusError::EmptyNucleus);
        }
        let sampler = WoodsSaxonSampler::new(params, config)?;
        Ok(Self {
            nucleons: vec![Nucleon::default(); mass_number],
            shape: NucleusShape::WoodsSaxon(sampler),
            species: None,
        })
    }

    /// The radius bounding impact-parameter ranges (fm).
    ///
    /// Always 0 for a proton. For a Woods-Saxon nucleus this is the cutoff
    /// `R + 3a` (by default), deliberately smaller than the sampler's support:
    /// the density falls off exponentially, and reporting the true maximum
    /// would make most impact parameters produce no participants.
    pub fn radius(&self) -> f64 {
        match &self.shape {
            NucleusShape::Proton => 0.0,
            NucleusShape::WoodsSaxon(sampler) => sampler.cutoff(),
        }
    }

    /// Samples a fresh ensemble of nucleon positions.
    ///
    /// Every nucleon gets an independent position, `offset` is added to its
    /// x coordinate and its per-event state is cleared. A proton is placed at
    /// exactly `(offset, 0, 0)` without drawing from `rng`.
    #[instrument(
        level = "trace",
        skip(self, rng),
        fields(shape = self.shape.name(), mass_number = self.nucleons.len())
    )]
    pub fn sample_nucleons<R: Rng + ?Sized>(&mut self, offset: f64, rng: &mut R) {
        match &self.shape {
            NucleusShape::Proton => {
                for nucleon in self.nucleons.iter_mut() {
                    nucleon.set_position(offset, 0.0, 0.0);
                }
            }
            NucleusShape::WoodsSaxon(sampler) => {
                for nucleon in self.nucleons.iter_mut() {
                    let [x, y, z] = sampler.sample_position(rng);
                    nucleon.set_position(x + offset, y, z);
                }
            }
        }
    }

    /// Density model of this nucleus.
    #[inline]
    pub fn shape(&self) -> &NucleusShape {
        &self.shape
    }

    /// Species, when created from the species table.
    #[inline]
    pub fn species(&self) -> Option<Species> {
        self.species
    }

    /// Mass number A.
    #[inline]
    pub fn mass_number(&self) -> usize {
        self.nucleons.len()
    }

    /// Number of nucleons (same as [`Nucleus::mass_number`]).
    #[inline]
    pub fn len(&self) -> usize {
        self.nucleons.len()
    }

    /// Always false; a nucleus holds at least one nucleon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nucleons.is_empty()
    }

    /// Nucleons in slot order.
    #[inline]
    pub fn nucleons(&self) -> &[Nucleon] {
        &self.nucleons
    }

    /// Iterates over nucleons in slot order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Nucleon> {
        self.nucleons.iter()
    }

    /// Iterates mutably over nucleons in slot order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Nucleon> {
        self.nucleons.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Nucleus {
    type Item = &'a Nucleon;
    type IntoIter = std::slice::Iter<'a, Nucleon>;

    fn into_iter(self) -> Self::IntoIter {
        self.nucleons.iter()
    }
}

impl<'a> IntoIterator for &'a mut Nucleus {
    type Item = &'a mut Nucleon;
    type IntoIter = std::slice::IterMut<'a, Nucleon>;

    fn into_iter(self) -> Self::IntoIter {
        self.nucleons.iter_mut()
    }
}
