//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::PIXELS_PER_UNIT;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_force: f32,
    pub double_jump_force: f32,
    pub has_double_jump: bool,
    pub dash_power: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    /// Vertical offset of the foot anchor from the body center.
    pub ground_probe_offset_y: f32,
    pub ground_probe_radius: f32,
    pub body_mass: f32,
    pub gravity: f32,
    /// Gravity scale restored when dash state is forcibly reset.
    pub default_gravity_scale: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0 * PIXELS_PER_UNIT,
            jump_force: 10.0 * PIXELS_PER_UNIT,
            double_jump_force: 8.0 * PIXELS_PER_UNIT,
            has_double_jump: true,
            dash_power: 15.0 * PIXELS_PER_UNIT,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
            ground_probe_offset_y: -24.0,
            ground_probe_radius: 0.2 * PIXELS_PER_UNIT,
            body_mass: 1.0,
            gravity: 9.81 * PIXELS_PER_UNIT,
            default_gravity_scale: 1.0,
        }
    }
}

impl MovementTuning {
    /// Apex height of a single ground jump: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        let launch = self.jump_force / self.body_mass;
        launch * launch / (2.0 * self.gravity)
    }
}

/// Device input sampled once per frame. Presses are edge-triggered and only
/// live for the frame they were sampled in.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub dash_pressed: bool,
}
