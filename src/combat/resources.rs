//! Combat domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::PIXELS_PER_UNIT;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub damage: f32,
    /// Seconds between melee attacks.
    pub attack_cooldown: f32,
    /// Seconds the hitbox stays live after an attack.
    pub hit_window: f32,
    pub hitbox_reach: f32,
    pub hitbox_length: f32,
    pub hitbox_width: f32,
    pub invulnerability_duration: f32,
    pub flash_interval: f32,
    /// Sprite alpha on the dimmed half of the invulnerability flash.
    pub flash_alpha: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            damage: 10.0,
            attack_cooldown: 1.0,
            hit_window: 0.5,
            hitbox_reach: 0.6 * PIXELS_PER_UNIT,
            hitbox_length: 40.0,
            hitbox_width: 28.0,
            invulnerability_duration: 1.0,
            flash_interval: 0.1,
            flash_alpha: 0.5,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub contact_damage: f32,
    pub contact_interval: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            contact_damage: 20.0,
            contact_interval: 1.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct CombatInput {
    pub attack_pressed: bool,
}

/// World-space point the player is aiming at, if the cursor is over the window.
#[derive(Resource, Debug, Default)]
pub struct AimTarget(pub Option<Vec2>);
