//! Core domain: run-wide resources.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// Deterministic randomness for gameplay rolls (buff grants).
#[derive(Resource, Debug)]
pub struct GameRng(pub ChaCha8Rng);

impl GameRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl FromWorld for GameRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world
            .get_resource::<RunConfig>()
            .map(|config| config.seed)
            .unwrap_or_default();
        info!("Seeding gameplay RNG with {}", seed);
        Self::from_seed(seed)
    }
}
