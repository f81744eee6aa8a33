mod arena;
mod boss;
mod combat;
mod core;
mod lifecycle;
mod movement;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Loopbound".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            movement::MovementPlugin,
            combat::CombatPlugin,
            lifecycle::LifecyclePlugin,
            boss::BossPlugin,
            arena::ArenaPlugin,
            ui::UiPlugin,
        ))
        .run();
}
