//! Generator construction and seeding policy.
//!
//! Every run owns an explicit [`SmallRng`]; nothing in the crate touches a
//! process-wide generator except [`Seed::resolve`], which draws a single `u64`
//! from the OS-seeded thread generator when no seed was supplied. The resolved
//! seed is what gets logged and reported, so any run can be replayed with
//! [`Seed::Fixed`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeding policy for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Seed {
    /// Draw a fresh seed from operating-system entropy.
    #[default]
    Entropy,
    /// Use the given seed; identical seeds reproduce identical runs.
    Fixed(u64),
}

impl Seed {
    /// Turn the policy into a concrete seed value.
    pub fn resolve(self) -> u64 {
        match self {
            Seed::Entropy => rand::rng().random(),
            Seed::Fixed(seed) => seed,
        }
    }
}

impl From<Option<u64>> for Seed {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(Seed::Entropy, Seed::Fixed)
    }
}

/// Build the generator for a resolved seed.
pub fn rng_from_seed(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Seed for shard `shard` of a run whose base seed is `base`.
///
/// Mixing through splitmix64 keeps neighbouring shard indices from producing
/// correlated streams.
pub fn shard_seed(base: u64, shard: usize) -> u64 {
    splitmix64(base ^ shard as u64)
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
