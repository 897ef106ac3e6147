//! # Random Number Sources
//!
//! Every sampling operation in this crate is generic over [`rand::Rng`], so the
//! host pipeline is free to bring its own engine. This module provides
//! [`NucleonRng`], a seeded wrapper for callers that want reproducible events
//! and independent per-worker streams.
//!
//! ## Usage Example
//!
//! ```rust
//! use nucleus_core::rng::NucleonRng;
//! use nucleus_core::Nucleus;
//!
//! let mut lead = Nucleus::create("Pb").unwrap();
//! let mut rng = NucleonRng::from_seed(12345);
//!
//! lead.sample_nucleons(0.0, &mut rng);
//! ```
//!
//! ## Threading
//!
//! A `NucleonRng` must not be shared between threads while sampling. Derive
//! one stream per worker with [`NucleonRng::stream`] instead.

mod prng;

pub use prng::NucleonRng;
