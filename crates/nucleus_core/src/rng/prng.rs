//! Seeded pseudo-random number generator for nucleon sampling.
//!
//! This module provides [`NucleonRng`], a seeded PRNG wrapper that offers
//! reproducible random number generation and independent worker streams.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Seeded random number generator for nucleon sampling.
///
/// Implements [`RngCore`], so it can be passed anywhere the crate expects a
/// `rand::Rng`.
///
/// # Examples
///
/// ```rust
/// use nucleus_core::rng::NucleonRng;
/// use rand::Rng;
///
/// let mut rng = NucleonRng::from_seed(42);
/// let u: f64 = rng.gen();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Clone, Debug)]
pub struct NucleonRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl NucleonRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of random numbers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nucleus_core::rng::NucleonRng;
    /// use rand::RngCore;
    ///
    /// let mut rng1 = NucleonRng::from_seed(12345);
    /// let mut rng2 = NucleonRng::from_seed(12345);
    /// assert_eq!(rng1.next_u64(), rng2.next_u64());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an RNG seeded from operating-system entropy.
    ///
    /// The drawn seed is kept and reported by [`NucleonRng::seed`], so a run
    /// can still be reproduced afterwards.
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().next_u64();
        Self::from_seed(seed)
    }

    /// Derives the RNG for worker `index` of a run seeded with `seed`.
    ///
    /// Streams for distinct indices are seeded through a SplitMix64 mix of
    /// the pair, so neighbouring workers do not receive neighbouring seeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nucleus_core::rng::NucleonRng;
    ///
    /// let a = NucleonRng::stream(7, 0);
    /// let b = NucleonRng::stream(7, 1);
    /// assert_ne!(a.seed(), b.seed());
    /// ```
    pub fn stream(seed: u64, index: u64) -> Self {
        let mixed = splitmix64(seed ^ splitmix64(index.wrapping_add(0x9E37_79B9_7F4A_7C15)));
        Self::from_seed(mixed)
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for NucleonRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// SplitMix64 finaliser.
#[inline]
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
