//! UI domain: player HUD health bar and status text.

use bevy::prelude::*;

use crate::lifecycle::{BuffKind, BuffStacks, PlayerState};
use crate::movement::Player;

pub(crate) const PLAYER_HEALTHBAR_WIDTH: f32 = 200.0;
pub(crate) const PLAYER_HEALTHBAR_HEIGHT: f32 = 20.0;
pub(crate) const PLAYER_HEALTHBAR_PADDING: f32 = 16.0;

/// Marker for the player's HUD health bar container
#[derive(Component)]
pub struct PlayerHealthBarUI;

/// Marker for the player's health bar fill element
#[derive(Component)]
pub struct PlayerHealthBarFill;

/// Which status line a HUD text entity shows
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Health,
    SurvivalTime,
    Buffs,
}

pub fn format_health(current: f32, max: f32) -> String {
    format!("Health: {:.0}/{:.0}", current, max)
}

pub fn format_survival_time(seconds: f32) -> String {
    format!("Survival Time: {:.1}s", seconds)
}

pub fn format_buffs(stacks: &BuffStacks) -> String {
    format!(
        "Buffs - DMG:{} CD:{} SPD:{} ATK:{} JUMP:{}",
        stacks.get(BuffKind::Damage),
        stacks.get(BuffKind::Cooldown),
        stacks.get(BuffKind::Movement),
        stacks.get(BuffKind::AttackSpeed),
        stacks.get(BuffKind::HighJump),
    )
}

pub(crate) fn spawn_player_hud(mut commands: Commands) {
    // Root container positioned at top-left
    commands
        .spawn((
            PlayerHealthBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(PLAYER_HEALTHBAR_PADDING),
                top: Val::Px(PLAYER_HEALTHBAR_PADDING),
                width: Val::Px(PLAYER_HEALTHBAR_WIDTH),
                height: Val::Px(PLAYER_HEALTHBAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerHealthBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
            ));
        });

    // Status text stacked below the bar
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(PLAYER_HEALTHBAR_PADDING),
            top: Val::Px(PLAYER_HEALTHBAR_PADDING + PLAYER_HEALTHBAR_HEIGHT + 8.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|parent| {
            for line in [StatusLine::Health, StatusLine::SurvivalTime, StatusLine::Buffs] {
                parent.spawn((
                    line,
                    Text::new(""),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));
            }
        });
}

pub(crate) fn update_player_healthbar(
    player_query: Query<&PlayerState, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<PlayerHealthBarFill>>,
) {
    let Ok(state) = player_query.single() else {
        return;
    };

    for (mut node, mut bg_color) in &mut fill_query {
        let percent = state.vitals.fraction();
        node.width = Val::Percent(percent * 100.0);

        // Color gradient: green -> yellow -> red
        let color = if percent > 0.5 {
            let t = (percent - 0.5) * 2.0;
            Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
        } else {
            let t = percent * 2.0;
            Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
        };
        bg_color.0 = color;
    }
}

pub(crate) fn update_status_text(
    player_query: Query<&PlayerState, (With<Player>, Changed<PlayerState>)>,
    mut text_query: Query<(&StatusLine, &mut Text)>,
) {
    let Ok(state) = player_query.single() else {
        return;
    };

    for (line, mut text) in &mut text_query {
        **text = match line {
            StatusLine::Health => format_health(state.vitals.current, state.vitals.max),
            StatusLine::SurvivalTime => format_survival_time(state.survival_time),
            StatusLine::Buffs => format_buffs(&state.buffs),
        };
    }
}
