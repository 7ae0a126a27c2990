//! Randomness source helpers.
//!
//! Every operator takes its generator explicitly as `&mut R where R: Rng`.
//! No generator is held as ambient state. The helpers here build the
//! concrete [`StdRng`] instances the population hands to its demes.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Creates a seeded generator.
///
/// The same seed always produces the same stream.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Derives an independent generator from `parent`.
///
/// Used to give each deme its own stream so demes never share a generator.
pub fn derive_rng<R: RngCore>(parent: &mut R) -> StdRng {
    StdRng::from_rng(parent)
}
