//! Movement domain: run, jump, double jump and dash for the player.

pub(crate) mod body;
mod bootstrap;
mod components;
mod controller;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use body::{PhysicsBody, RigidBodyHandle};
pub use components::{
    DashPhase, Facing, GameLayer, Ground, GroundSensor, MovementState, MovementStats, Player, Wall,
};
pub use controller::{DashOutcome, JumpKind, MAX_JUMPS, StepReport};
pub use resources::{MovementInput, MovementTuning};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::movement::bootstrap::{report_incomplete_player, spawn_player};
use crate::movement::systems::{
    drive_movement, mirror_facing, probe_ground, read_input, tick_movement_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, (configure_gravity, spawn_player))
            .add_systems(PostStartup, report_incomplete_player)
            .add_systems(Update, read_input.in_set(GameplaySet::Input))
            .add_systems(Update, probe_ground.in_set(GameplaySet::Sense))
            .add_systems(Update, drive_movement.in_set(GameplaySet::Act))
            .add_systems(Update, tick_movement_timers.in_set(GameplaySet::Timers))
            .add_systems(Update, mirror_facing.in_set(GameplaySet::Present));
    }
}

fn configure_gravity(mut commands: Commands, tuning: Res<MovementTuning>) {
    commands.insert_resource(Gravity(Vec2::NEG_Y * tuning.gravity));
}
