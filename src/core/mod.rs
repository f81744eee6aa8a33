//! Core domain: frame ordering, shared timers, run configuration.

pub mod config;
mod cooldown;
mod resources;
#[cfg(test)]
mod tests;

pub use cooldown::Cooldown;
pub use resources::{GameRng, RunConfig};

use bevy::prelude::*;

/// World units are authored in "meters" and rendered at this scale.
pub const PIXELS_PER_UNIT: f32 = 50.0;

/// Per-frame ordering of gameplay work. Sets run strictly in this order so a
/// hit detected in `Detect` is applied in `Resolve` within the same frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    /// Poll devices into input resources.
    Input,
    /// Ground probes and other world queries.
    Sense,
    /// Movement, jump, dash, attack and boss actions.
    Act,
    /// Overlap and contact detection.
    Detect,
    /// Damage application and death handling.
    Resolve,
    /// Survival time and respawn.
    Lifecycle,
    /// Cooldown and phase countdowns.
    Timers,
    /// Colors, visibility, HUD.
    Present,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        config::install_tuning_overrides(app);

        app.init_resource::<RunConfig>()
            .init_resource::<GameRng>()
            .configure_sets(
                Update,
                (
                    GameplaySet::Input,
                    GameplaySet::Sense,
                    GameplaySet::Act,
                    GameplaySet::Detect,
                    GameplaySet::Resolve,
                    GameplaySet::Lifecycle,
                    GameplaySet::Timers,
                    GameplaySet::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
