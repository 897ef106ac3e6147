//! # nucleus_core: Nucleon Position Sampling for Colliding Nuclei
//!
//! Generates the initial nucleon configuration of each nucleus in a
//! collision event. A nucleus is created once from its species symbol and
//! then resampled once per event:
//!
//! - [`Nucleus`]: fixed ensemble of [`Nucleon`]s with the sampling entry point
//! - [`NucleusShape`]: closed set of density models (proton, Woods-Saxon)
//! - [`WoodsSaxonSampler`]: piecewise-linear inverse-CDF sampler of the
//!   Woods-Saxon radial density
//! - [`Species`]: species table (`p`, `Cu`, `Au`, `Pb`)
//! - [`SamplerConfig`]: table accuracy and radius cutoff policy
//! - [`rng::NucleonRng`]: seeded random source with per-worker streams
//!
//! ## Usage Examples
//!
//! ```rust
//! use nucleus_core::rng::NucleonRng;
//! use nucleus_core::Nucleus;
//!
//! let mut nucleus_a = Nucleus::create("Pb").unwrap();
//! let mut nucleus_b = Nucleus::create("Pb").unwrap();
//! let mut rng = NucleonRng::from_seed(1);
//!
//! // Impact parameters are bounded by the reported radii.
//! let b_max = nucleus_a.radius() + nucleus_b.radius();
//! let b = 0.5 * b_max;
//!
//! nucleus_a.sample_nucleons(b / 2.0, &mut rng);
//! nucleus_b.sample_nucleons(-b / 2.0, &mut rng);
//!
//! // The collision logic marks participants after the geometric pass.
//! for nucleon in nucleus_a.iter_mut() {
//!     if nucleon.x().abs() < 1.0 {
//!         nucleon.set_participant(true);
//!     }
//! }
//! # assert_eq!(nucleus_a.len(), 208);
//! ```
//!
//! ## Threading
//!
//! Sampling takes `&mut self` and `&mut R`, so a nucleus and its random
//! source belong to one worker at a time. [`Nucleus`] is `Send + Sync` and
//! cheap to clone (the Woods-Saxon table is shared), so workers clone a
//! nucleus and derive their own [`rng::NucleonRng::stream`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod nucleon;
pub mod nucleus;
pub mod rng;
pub mod species;
pub mod woods_saxon;

pub use config::{ConfigError, SamplerConfig, SamplerConfigBuilder};
pub use error::NucleusError;
pub use nucleon::Nucleon;
pub use nucleus::{Nucleus, NucleusShape};
pub use species::Species;
pub use woods_saxon::{WoodsSaxonParams, WoodsSaxonSampler};
