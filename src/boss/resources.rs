//! Boss domain: tuning for boss health, hit flash and aerial strikes.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::PIXELS_PER_UNIT;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BossTuning {
    pub max_health: f32,
    pub flash_hold: f32,
    pub flash_fade: f32,
    /// Height above the player where strike projectiles appear.
    pub strike_spawn_height: f32,
    pub strike_charge_time: f32,
    pub strike_cooldown: f32,
    pub strike_fall_speed: f32,
    /// Seconds a fired projectile lives before it is removed.
    pub projectile_lifetime: f32,
    pub projectile_radius: f32,
    pub projectile_damage: f32,
    pub projectile_damage_interval: f32,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            flash_hold: 0.1,
            flash_fade: 0.2,
            strike_spawn_height: 5.0 * PIXELS_PER_UNIT,
            strike_charge_time: 1.0,
            strike_cooldown: 1.0,
            strike_fall_speed: 10.0 * PIXELS_PER_UNIT,
            projectile_lifetime: 2.0,
            projectile_radius: 12.0,
            projectile_damage: 20.0,
            projectile_damage_interval: 1.0,
        }
    }
}
