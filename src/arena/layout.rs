//! Arena domain: static level geometry.

use bevy::prelude::*;

use crate::movement::MovementTuning;

pub const GROUND_CENTER_Y: f32 = -300.0;
pub const GROUND_SIZE: Vec2 = Vec2::new(1200.0, 40.0);
pub const WALL_SIZE: Vec2 = Vec2::new(40.0, 720.0);
pub const WALL_X: f32 = 620.0;
pub const PLATFORM_SIZE: Vec2 = Vec2::new(200.0, 20.0);

/// Player start and respawn point.
pub const PLAYER_SPAWN: Vec2 = Vec2::new(-400.0, -220.0);
pub const BOSS_POSITION: Vec2 = Vec2::new(450.0, -220.0);
pub const BOSS_SIZE: Vec2 = Vec2::new(80.0, 120.0);
pub const SPIKE_POSITION: Vec2 = Vec2::new(0.0, -270.0);
pub const SPIKE_SIZE: Vec2 = Vec2::new(80.0, 20.0);

/// Platforms sit at this fraction of a single jump's apex above the floor.
const PLATFORM_HEIGHT_FRACTION: f32 = 0.8;

pub fn ground_top() -> f32 {
    GROUND_CENTER_Y + GROUND_SIZE.y / 2.0
}

/// Center of each floating platform. Heights follow the jump so every
/// platform is reachable from the floor with one jump.
pub fn platform_centers(tuning: &MovementTuning) -> Vec<Vec2> {
    let top = ground_top() + tuning.single_jump_height() * PLATFORM_HEIGHT_FRACTION;
    let y = top - PLATFORM_SIZE.y / 2.0;
    vec![Vec2::new(-250.0, y), Vec2::new(200.0, y)]
}
