//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::Cooldown;
use crate::movement::MovementTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Enemy bodies that the melee hitbox can strike
    Enemy,
    /// Player melee hitbox
    PlayerHitbox,
    /// Hazards and projectiles that hurt the player on contact
    EnemyHitbox,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashPhase {
    #[default]
    Idle,
    Dashing {
        remaining: f32,
        /// Gravity scale to put back once the dash ends.
        restore_gravity: f32,
    },
}

/// Per-frame locomotion state owned by the movement controller.
#[derive(Component, Debug, Clone)]
pub struct MovementState {
    pub grounded: bool,
    /// Jumps spent since the last landing (ground jump + double jump).
    pub jump_count: u8,
    pub facing: Facing,
    pub dash: DashPhase,
    pub dash_cooldown: Cooldown,
    /// Cleared while the player is dead; input is ignored and timers freeze.
    pub enabled: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            grounded: false,
            jump_count: 0,
            facing: Facing::Right,
            dash: DashPhase::Idle,
            dash_cooldown: Cooldown::default(),
            enabled: true,
        }
    }
}

/// Locomotion numbers for one entity. Seeded from [`MovementTuning`] at
/// spawn; afterwards only the buff system writes them.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementStats {
    pub move_speed: f32,
    pub jump_force: f32,
    pub double_jump_force: f32,
    pub dash_power: f32,
    pub dash_cooldown: f32,
    pub dash_duration: f32,
    pub has_double_jump: bool,
}

impl MovementStats {
    pub fn from_tuning(tuning: &MovementTuning) -> Self {
        Self {
            move_speed: tuning.move_speed,
            jump_force: tuning.jump_force,
            double_jump_force: tuning.double_jump_force,
            dash_power: tuning.dash_power,
            dash_cooldown: tuning.dash_cooldown,
            dash_duration: tuning.dash_duration,
            has_double_jump: tuning.has_double_jump,
        }
    }

    pub fn set_move_speed(&mut self, move_speed: f32) {
        self.move_speed = move_speed;
    }

    pub fn set_jump_force(&mut self, jump_force: f32) {
        self.jump_force = jump_force;
    }

    pub fn set_double_jump_force(&mut self, double_jump_force: f32) {
        self.double_jump_force = double_jump_force;
    }

    // No buff scales dash power yet
    #[allow(dead_code)]
    pub fn set_dash_power(&mut self, dash_power: f32) {
        self.dash_power = dash_power;
    }

    pub fn set_dash_cooldown(&mut self, dash_cooldown: f32) {
        self.dash_cooldown = dash_cooldown;
    }
}

/// Circle overlap probe placed at the entity's feet.
#[derive(Component, Debug, Clone)]
pub struct GroundSensor {
    pub offset: Vec2,
    pub radius: f32,
    /// Result of the most recent probe.
    pub grounded: bool,
}

impl GroundSensor {
    pub fn from_tuning(tuning: &MovementTuning) -> Self {
        Self {
            offset: Vec2::new(0.0, tuning.ground_probe_offset_y),
            radius: tuning.ground_probe_radius,
            grounded: false,
        }
    }
}
