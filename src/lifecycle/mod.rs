//! Lifecycle domain: player health, death, buffs and respawn.

mod buffs;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod state;
mod systems;
#[cfg(test)]
mod tests;

pub use buffs::{BaseStats, BuffKind, BuffStacks, BuffTuning, DerivedStats};
pub use events::{BuffGrantedEvent, PlayerDiedEvent, PlayerRespawnedEvent};
pub use state::{DamageOutcome, DeathReport, LifePhase, PlayerState, RespawnAnchor, Vitals};

use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::lifecycle::systems::{advance_lifecycle, apply_player_hits, handle_player_death};

pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BuffTuning>()
            .add_message::<PlayerDiedEvent>()
            .add_message::<PlayerRespawnedEvent>()
            .add_message::<BuffGrantedEvent>()
            .add_systems(
                Update,
                (apply_player_hits, handle_player_death)
                    .chain()
                    .in_set(GameplaySet::Resolve),
            )
            .add_systems(Update, advance_lifecycle.in_set(GameplaySet::Lifecycle));

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::handle_dev_hotkeys.in_set(GameplaySet::Input));
    }
}
