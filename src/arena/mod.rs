//! Arena domain: the single boss arena the run takes place in.

mod layout;
mod spawn;
#[cfg(test)]
mod tests;

pub use layout::{PLAYER_SPAWN, ground_top, platform_centers};
pub use spawn::Hazard;

use bevy::prelude::*;

use crate::arena::spawn::spawn_arena;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena);
    }
}
