//! UI domain: boss health bar UI.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::boss::{BossDefeatedEvent, BossHealth};

const BOSS_HEALTHBAR_WIDTH: f32 = 400.0;
const BOSS_HEALTHBAR_HEIGHT: f32 = 24.0;
const BOSS_HEALTHBAR_TOP: f32 = 24.0;

/// Marker for the boss health bar fill element
#[derive(Component)]
pub struct BossHealthBarFill {
    pub owner: Entity,
}

/// Marker for boss name label
#[derive(Component)]
pub struct BossNameLabel {
    pub owner: Entity,
}

pub(crate) fn spawn_boss_healthbar(
    mut commands: Commands,
    boss_query: Query<Entity, Added<BossHealth>>,
    existing_bars: Query<&BossHealthBarFill>,
) {
    for boss_entity in &boss_query {
        let has_bar = existing_bars.iter().any(|bar| bar.owner == boss_entity);
        if has_bar {
            continue;
        }

        // Top center of the screen
        commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(BOSS_HEALTHBAR_TOP),
                    left: Val::Percent(50.0),
                    margin: UiRect::left(Val::Px(-BOSS_HEALTHBAR_WIDTH / 2.0)),
                    width: Val::Px(BOSS_HEALTHBAR_WIDTH),
                    height: Val::Px(BOSS_HEALTHBAR_HEIGHT),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.05, 0.05, 0.05, 0.9)),
                BorderColor::all(Color::srgb(0.6, 0.1, 0.1)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    BossHealthBarFill { owner: boss_entity },
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.8, 0.1, 0.1)),
                ));
            });

        commands.spawn((
            BossNameLabel { owner: boss_entity },
            Text::new("BOSS"),
            TextFont {
                font_size: 18.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(BOSS_HEALTHBAR_TOP + BOSS_HEALTHBAR_HEIGHT + 4.0),
                left: Val::Percent(50.0),
                margin: UiRect::left(Val::Px(-30.0)),
                ..default()
            },
        ));
    }
}

pub(crate) fn update_boss_healthbar(
    boss_query: Query<&BossHealth>,
    mut fill_query: Query<(&BossHealthBarFill, &mut Node, &mut BackgroundColor)>,
) {
    for (fill, mut node, mut bg_color) in &mut fill_query {
        let Ok(health) = boss_query.get(fill.owner) else {
            continue;
        };

        let percent = health.fraction();
        node.width = Val::Percent(percent * 100.0);

        let color = if percent > 0.5 {
            Color::srgb(0.8, 0.1, 0.1)
        } else if percent > 0.25 {
            Color::srgb(0.9, 0.4, 0.1)
        } else {
            Color::srgb(0.6, 0.0, 0.0)
        };
        bg_color.0 = color;
    }
}

pub(crate) fn mark_boss_defeated(
    mut defeated_events: MessageReader<BossDefeatedEvent>,
    mut label_query: Query<(&BossNameLabel, &mut Text)>,
) {
    for event in defeated_events.read() {
        for (label, mut text) in &mut label_query {
            if label.owner == event.boss {
                **text = "DEFEATED".to_string();
            }
        }
    }
}
