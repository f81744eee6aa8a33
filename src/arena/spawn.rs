//! Arena domain: spawning floor, walls, platforms, hazards and the boss.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::arena::layout::{
    BOSS_POSITION, BOSS_SIZE, GROUND_CENTER_Y, GROUND_SIZE, PLATFORM_SIZE, PLAYER_SPAWN,
    SPIKE_POSITION, SPIKE_SIZE, WALL_SIZE, WALL_X, platform_centers,
};
use crate::boss::{AerialStrike, Boss, BossHealth, BossTuning, DamageFlash};
use crate::combat::{Enemy, EnemyContact, EnemyTuning};
use crate::lifecycle::RespawnAnchor;
use crate::movement::{GameLayer, Ground, MovementTuning, Wall};

/// Marker for contact-damage hazards placed in the level
#[derive(Component, Debug)]
pub struct Hazard;

pub(crate) fn spawn_arena(
    mut commands: Commands,
    movement: Res<MovementTuning>,
    enemy: Res<EnemyTuning>,
    boss: Res<BossTuning>,
) {
    let wall_color = Color::srgb(0.25, 0.25, 0.35);
    let ground_color = Color::srgb(0.35, 0.4, 0.35);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Enemy]);

    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(GROUND_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, GROUND_CENTER_Y, 0.0),
        RigidBody::Static,
        Collider::rectangle(GROUND_SIZE.x, GROUND_SIZE.y),
        ground_layers,
    ));

    for x in [-WALL_X, WALL_X] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(WALL_SIZE),
                ..default()
            },
            Transform::from_xyz(x, 0.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(WALL_SIZE.x, WALL_SIZE.y),
            wall_layers,
        ));
    }

    for center in platform_centers(&movement) {
        commands.spawn((
            Ground,
            Sprite {
                color: ground_color,
                custom_size: Some(PLATFORM_SIZE),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(PLATFORM_SIZE.x, PLATFORM_SIZE.y),
            ground_layers,
        ));
    }

    commands.spawn((
        RespawnAnchor,
        Transform::from_xyz(PLAYER_SPAWN.x, PLAYER_SPAWN.y, 0.0),
        GlobalTransform::default(),
    ));

    // Spike strip on the floor between the player and the boss
    commands.spawn((
        Hazard,
        EnemyContact::new(enemy.contact_damage, enemy.contact_interval),
        Sprite {
            color: Color::srgb(0.7, 0.7, 0.75),
            custom_size: Some(SPIKE_SIZE),
            ..default()
        },
        Transform::from_xyz(SPIKE_POSITION.x, SPIKE_POSITION.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(SPIKE_SIZE.x, SPIKE_SIZE.y),
        Sensor,
        CollidingEntities::default(),
        CollisionLayers::new(GameLayer::EnemyHitbox, [GameLayer::Player]),
    ));

    spawn_boss(&mut commands, &enemy, &boss);

    info!("Arena spawned");
}

fn spawn_boss(commands: &mut Commands, enemy: &EnemyTuning, tuning: &BossTuning) {
    let base_color = Color::srgb(0.45, 0.2, 0.55);

    commands.spawn((
        // Identity & Health
        (
            Boss,
            Enemy,
            BossHealth::new(tuning.max_health),
            DamageFlash::new(
                base_color,
                Color::srgb(1.0, 0.0, 0.0),
                tuning.flash_hold,
                tuning.flash_fade,
            ),
            AerialStrike::new(
                tuning.strike_spawn_height,
                tuning.strike_charge_time,
                tuning.strike_cooldown,
                tuning.strike_fall_speed,
                tuning.projectile_lifetime,
            ),
            EnemyContact::new(enemy.contact_damage, enemy.contact_interval),
        ),
        // Rendering
        Sprite {
            color: base_color,
            custom_size: Some(BOSS_SIZE),
            ..default()
        },
        Transform::from_xyz(BOSS_POSITION.x, BOSS_POSITION.y, 0.0),
        // Physics
        (
            RigidBody::Static,
            Collider::rectangle(BOSS_SIZE.x, BOSS_SIZE.y),
            CollidingEntities::default(),
            CollisionLayers::new(
                GameLayer::Enemy,
                [GameLayer::Player, GameLayer::PlayerHitbox],
            ),
        ),
    ));
}
