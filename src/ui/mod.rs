//! UI domain: in-run HUD elements and death overlay.

mod death;
mod hud_boss;
mod hud_player;
#[cfg(test)]
mod tests;

pub use hud_player::{StatusLine, format_buffs, format_health, format_survival_time};

use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::ui::death::{hide_death_screen, show_death_screen};
use crate::ui::hud_boss::{mark_boss_defeated, spawn_boss_healthbar, update_boss_healthbar};
use crate::ui::hud_player::{spawn_player_hud, update_player_healthbar, update_status_text};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player_hud).add_systems(
            Update,
            (
                update_player_healthbar,
                update_status_text,
                spawn_boss_healthbar,
                update_boss_healthbar,
                mark_boss_defeated,
                show_death_screen,
                hide_death_screen,
            )
                .in_set(GameplaySet::Present),
        );
    }
}
