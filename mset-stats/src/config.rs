//! Simulation parameters shared by library callers and the CLI.

use mset_core::{MsetError, Result};

use crate::rng::Seed;

/// Default number of null trials.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Parameters of a null-distribution run that do not depend on the data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SimulationConfig {
    /// Number of trials to run.
    pub trials: usize,
    /// Fixed seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Number of independent shards (one generator and buffer pair each).
    pub shards: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            shards: 1,
        }
    }
}

impl SimulationConfig {
    /// Check that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.shards == 0 {
            return Err(MsetError::InvalidInput(
                "shards must be > 0".into(),
            ));
        }
        if self.trials == 0 {
            return Err(MsetError::InvalidInput(
                "trials must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Seeding policy implied by [`seed`](Self::seed).
    pub fn seed_policy(&self) -> Seed {
        Seed::from(self.seed)
    }
}
