//! Boss domain: boss health, damage flash and the aerial strike attack.

mod components;
mod events;
mod resources;
mod systems;

pub use components::{
    AerialStrike, Boss, BossHealth, BossHit, DamageFlash, FlashPhase, Lifetime, StrikeAction,
    StrikePhase, StrikeProjectile,
};
pub use events::BossDefeatedEvent;
pub use resources::BossTuning;

use bevy::prelude::*;

use crate::boss::systems::{
    apply_boss_damage, cleanup_expired_lifetimes, clear_defeated_boss_strikes,
    despawn_grounded_projectiles, run_aerial_strikes, tick_boss_flash,
};
use crate::core::GameplaySet;

pub struct BossPlugin;

impl Plugin for BossPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BossTuning>()
            .add_message::<BossDefeatedEvent>()
            .add_systems(Update, run_aerial_strikes.in_set(GameplaySet::Act))
            .add_systems(
                Update,
                despawn_grounded_projectiles.in_set(GameplaySet::Detect),
            )
            .add_systems(Update, apply_boss_damage.in_set(GameplaySet::Resolve))
            .add_systems(
                Update,
                clear_defeated_boss_strikes.in_set(GameplaySet::Lifecycle),
            )
            .add_systems(
                Update,
                cleanup_expired_lifetimes.in_set(GameplaySet::Timers),
            )
            .add_systems(Update, tick_boss_flash.in_set(GameplaySet::Present));
    }
}
