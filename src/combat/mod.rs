//! Combat domain: melee attacks, hit detection, contact damage, i-frames.

mod components;
mod contact;
mod events;
mod invulnerability;
mod resources;
mod systems;

pub use components::{
    AttackTick, DamageDealer, Enemy, HitboxPivot, MeleeAttack, MeleeHitbox, aim_rotation,
};
pub use contact::EnemyContact;
pub use events::{DamageEvent, PlayerHitEvent};
pub use invulnerability::Invulnerability;
pub use resources::{AimTarget, CombatInput, CombatTuning, EnemyTuning};

use bevy::prelude::*;

use crate::combat::systems::{
    aim_hitboxes, deliver_contact_damage, detect_hitbox_hits, flash_invulnerability,
    process_attacks, read_combat_input, sync_hitbox_activation, tick_combat_timers,
    update_aim_target,
};
use crate::core::GameplaySet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .init_resource::<EnemyTuning>()
            .init_resource::<CombatInput>()
            .init_resource::<AimTarget>()
            .add_message::<DamageEvent>()
            .add_message::<PlayerHitEvent>()
            .add_systems(
                Update,
                (read_combat_input, update_aim_target).in_set(GameplaySet::Input),
            )
            .add_systems(
                Update,
                (process_attacks, aim_hitboxes).in_set(GameplaySet::Act),
            )
            .add_systems(
                Update,
                (
                    sync_hitbox_activation,
                    detect_hitbox_hits,
                    deliver_contact_damage,
                )
                    .chain()
                    .in_set(GameplaySet::Detect),
            )
            .add_systems(Update, tick_combat_timers.in_set(GameplaySet::Timers))
            .add_systems(Update, flash_invulnerability.in_set(GameplaySet::Present));
    }
}
