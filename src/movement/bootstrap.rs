//! Movement domain: player bootstrap and startup validation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::arena::PLAYER_SPAWN;
use crate::combat::{
    CombatTuning, DamageDealer, HitboxPivot, Invulnerability, MeleeAttack, MeleeHitbox,
};
use crate::lifecycle::{BaseStats, BuffTuning, PlayerState};
use crate::movement::{
    GameLayer, GroundSensor, MovementState, MovementStats, MovementTuning, Player,
};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the player with movement, combat and lifecycle state, plus the
/// aimable melee hitbox hanging off a pivot child.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    combat: Res<CombatTuning>,
    buffs: Res<BuffTuning>,
) {
    let stats = MovementStats::from_tuning(&tuning);
    let attack = MeleeAttack::new(combat.attack_cooldown, combat.hit_window);
    let dealer = DamageDealer {
        damage: combat.damage,
    };
    let base = BaseStats::capture(&stats, &attack, &dealer);

    info!(
        "Spawning player: health={}, damage={}, speed={}, jump={}",
        buffs.max_health, dealer.damage, stats.move_speed, stats.jump_force
    );

    let player = commands
        .spawn((
            // Identity & Movement
            (
                Player,
                MovementState::default(),
                stats,
                GroundSensor::from_tuning(&tuning),
            ),
            // Combat & Lifecycle
            (
                PlayerState::new(buffs.max_health, base),
                attack,
                dealer,
                Invulnerability::new(combat.invulnerability_duration, combat.flash_interval),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(PLAYER_SPAWN.x, PLAYER_SPAWN.y, 0.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                AngularVelocity::default(),
                GravityScale(tuning.default_gravity_scale),
                Mass(tuning.body_mass),
                Friction::new(0.0),
                CollisionLayers::new(
                    GameLayer::Player,
                    [
                        GameLayer::Ground,
                        GameLayer::Wall,
                        GameLayer::Enemy,
                        GameLayer::EnemyHitbox,
                    ],
                ),
            ),
        ))
        .id();

    commands.entity(player).with_children(|parent| {
        parent
            .spawn((
                HitboxPivot { owner: player },
                Transform::default(),
                Visibility::default(),
            ))
            .with_children(|pivot| {
                pivot.spawn((
                    MeleeHitbox {
                        owner: player,
                        active: false,
                    },
                    Sprite {
                        color: Color::srgba(1.0, 1.0, 0.6, 0.5),
                        custom_size: Some(Vec2::new(combat.hitbox_length, combat.hitbox_width)),
                        ..default()
                    },
                    Transform::from_xyz(combat.hitbox_reach, 0.0, 0.5),
                    Visibility::Hidden,
                    Collider::rectangle(combat.hitbox_length, combat.hitbox_width),
                    Sensor,
                    ColliderDisabled,
                    CollisionEventsEnabled,
                    CollisionLayers::new(GameLayer::PlayerHitbox, [GameLayer::Enemy]),
                ));
            });
    });
}

/// Loudly report a player missing the state every controller depends on.
pub(crate) fn report_incomplete_player(
    query: Query<
        (
            Entity,
            Has<MovementState>,
            Has<PlayerState>,
            Has<MeleeAttack>,
        ),
        With<Player>,
    >,
) {
    if query.is_empty() {
        error!("No player entity after startup");
        return;
    }

    for (entity, has_movement, has_state, has_attack) in &query {
        if !has_movement {
            error!("Player {:?} has no MovementState, movement disabled", entity);
        }
        if !has_state {
            error!("Player {:?} has no PlayerState, health and respawn disabled", entity);
        }
        if !has_attack {
            error!("Player {:?} has no MeleeAttack, attacks disabled", entity);
        }
    }
}
