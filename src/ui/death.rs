//! UI domain: death overlay shown while the player waits to respawn.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::lifecycle::{BuffGrantedEvent, BuffTuning, PlayerDiedEvent, PlayerRespawnedEvent};

/// Marker for the death screen overlay
#[derive(Component)]
pub struct DeathScreenUI;

/// `granted` is the buff label and its new stack count.
pub fn death_subtext(granted: Option<(&str, u32)>, threshold: f32) -> String {
    match granted {
        Some((label, 1)) => format!("{} buff gained!", label),
        Some((label, stacks)) => format!("{} buff gained! (x{})", label, stacks),
        None => format!("Survive {:.0}s to earn a buff", threshold),
    }
}

pub(crate) fn show_death_screen(
    mut commands: Commands,
    mut died_events: MessageReader<PlayerDiedEvent>,
    mut buff_events: MessageReader<BuffGrantedEvent>,
    tuning: Res<BuffTuning>,
    existing_death_screen: Query<Entity, With<DeathScreenUI>>,
) {
    // Only the latest death matters for the overlay
    let Some(event) = died_events.read().last() else {
        buff_events.clear();
        return;
    };
    let granted = buff_events
        .read()
        .filter(|buff| buff.player == event.player)
        .last()
        .map(|buff| (buff.kind.label(), buff.stacks));
    if !existing_death_screen.is_empty() {
        return;
    }

    let subtext = death_subtext(granted, tuning.buff_threshold);

    commands
        .spawn((
            DeathScreenUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("YOU DIED"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.15, 0.15)),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!("Survived {:.1}s", event.survived)),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
            ));

            parent.spawn((
                Text::new(subtext),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.8, 0.4)),
                Node {
                    margin: UiRect::top(Val::Px(12.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn hide_death_screen(
    mut commands: Commands,
    mut respawned_events: MessageReader<PlayerRespawnedEvent>,
    death_screen_query: Query<Entity, With<DeathScreenUI>>,
) {
    let Some(event) = respawned_events.read().last() else {
        return;
    };
    debug!("{:?} respawned, closing death screen", event.player);

    for entity in &death_screen_query {
        commands.entity(entity).despawn();
    }
}
