//! Boss domain: damage intake, hit flash and aerial strike systems.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::boss::components::{
    AerialStrike, BossHealth, BossHit, DamageFlash, FlashPhase, Lifetime, StrikeAction,
    StrikePhase, StrikeProjectile,
};
use crate::boss::events::BossDefeatedEvent;
use crate::boss::resources::BossTuning;
use crate::combat::{DamageEvent, EnemyContact};
use crate::movement::{GameLayer, Player};

pub(crate) fn apply_boss_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut defeated_events: MessageWriter<BossDefeatedEvent>,
    mut bosses: Query<(&mut BossHealth, Option<&mut DamageFlash>)>,
) {
    for event in damage_events.read() {
        let Ok((mut health, flash)) = bosses.get_mut(event.target) else {
            continue;
        };

        match health.take_damage(event.amount) {
            BossHit::Ignored => {
                debug!("Boss {:?} already defeated, hit ignored", event.target);
                continue;
            }
            BossHit::Wounded { remaining } => {
                debug!("Boss HP: {}/{}", remaining, health.max);
            }
            BossHit::Defeated => {
                info!("Boss defeated!");
                defeated_events.write(BossDefeatedEvent { boss: event.target });
            }
        }

        if let Some(mut flash) = flash {
            flash.trigger();
        }
    }
}

pub(crate) fn tick_boss_flash(time: Res<Time>, mut query: Query<(&mut DamageFlash, &mut Sprite)>) {
    let dt = time.delta_secs();

    for (mut flash, mut sprite) in &mut query {
        if flash.phase() == FlashPhase::Idle {
            continue;
        }
        // Write the color before advancing so a fresh hit shows for a frame
        sprite.color = flash.color();
        flash.tick(dt);
        if flash.phase() == FlashPhase::Idle {
            sprite.color = flash.base_color;
        }
    }
}

pub(crate) fn run_aerial_strikes(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<BossTuning>,
    player_query: Query<&Transform, With<Player>>,
    mut bosses: Query<(Entity, &mut AerialStrike, &BossHealth)>,
    mut projectiles: Query<&mut LinearVelocity, With<StrikeProjectile>>,
) {
    let dt = time.delta_secs();
    let player_position = player_query
        .single()
        .ok()
        .map(|transform| transform.translation.truncate());

    for (boss, mut strike, health) in &mut bosses {
        if health.is_defeated() {
            continue;
        }

        if strike.phase() == StrikePhase::Ready {
            let Some(player_position) = player_position else {
                continue;
            };
            let spawn_at = player_position + Vec2::Y * strike.spawn_height;
            let projectile = spawn_strike_projectile(&mut commands, &tuning, boss, spawn_at);
            strike.begin_charge(projectile);
            debug!("Aerial strike: spawned above player at {}", spawn_at);
            continue;
        }

        match strike.advance(dt) {
            StrikeAction::None => {}
            StrikeAction::Fire(projectile) => match projectiles.get_mut(projectile) {
                Ok(mut velocity) => {
                    velocity.0 = Vec2::NEG_Y * strike.fall_speed;
                    commands
                        .entity(projectile)
                        .insert(Lifetime::new(strike.projectile_lifetime));
                    debug!("Aerial strike: fired downward");
                }
                Err(_) => warn!("Aerial strike projectile was destroyed before it could fire"),
            },
            StrikeAction::Rearmed => debug!("Aerial strike ready again"),
        }
    }
}

fn spawn_strike_projectile(
    commands: &mut Commands,
    tuning: &BossTuning,
    boss: Entity,
    position: Vec2,
) -> Entity {
    let radius = tuning.projectile_radius;

    commands
        .spawn((
            StrikeProjectile { boss, radius },
            EnemyContact::new(tuning.projectile_damage, tuning.projectile_damage_interval),
            Sprite {
                color: Color::srgb(1.0, 0.45, 0.1),
                custom_size: Some(Vec2::splat(radius * 2.0)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 1.0),
            (
                RigidBody::Kinematic,
                Collider::circle(radius),
                Sensor,
                LinearVelocity::ZERO,
                CollidingEntities::default(),
                CollisionLayers::new(GameLayer::EnemyHitbox, [GameLayer::Player]),
            ),
        ))
        .id()
}

/// A defeated boss takes its hovering and falling strikes with it.
pub(crate) fn clear_defeated_boss_strikes(
    mut commands: Commands,
    mut defeated_events: MessageReader<BossDefeatedEvent>,
    projectiles: Query<(Entity, &StrikeProjectile)>,
) {
    for event in defeated_events.read() {
        for (entity, projectile) in &projectiles {
            if projectile.boss == event.boss {
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Projectiles are removed as soon as they touch the ground.
pub(crate) fn despawn_grounded_projectiles(
    mut commands: Commands,
    spatial_query: SpatialQuery,
    projectiles: Query<(Entity, &Transform, &StrikeProjectile)>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (entity, transform, projectile) in &projectiles {
        let hits = spatial_query.shape_intersections(
            &Collider::circle(projectile.radius),
            transform.translation.truncate(),
            0.0,
            &ground_filter,
        );

        if !hits.is_empty() {
            debug!("Aerial strike hit the ground");
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn cleanup_expired_lifetimes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Lifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        if lifetime.tick(dt) {
            commands.entity(entity).despawn();
        }
    }
}
