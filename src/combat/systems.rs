//! Combat domain: combat systems for input, aiming, hit detection and timers.

use avian2d::prelude::*;
use bevy::color::Alpha;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::combat::components::{
    DamageDealer, Enemy, HitboxPivot, MeleeAttack, MeleeHitbox, aim_rotation,
};
use crate::combat::contact::EnemyContact;
use crate::combat::events::{DamageEvent, PlayerHitEvent};
use crate::combat::invulnerability::Invulnerability;
use crate::combat::resources::{AimTarget, CombatInput, CombatTuning};
use crate::movement::{MovementState, Player};

pub(crate) fn read_combat_input(
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<CombatInput>,
) {
    input.attack_pressed =
        mouse.just_pressed(MouseButton::Left) || keyboard.just_pressed(KeyCode::KeyJ);
}

pub(crate) fn update_aim_target(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut aim: ResMut<AimTarget>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    // Keep the last aim point while the cursor is outside the window
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    if let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor) {
        aim.0 = Some(world);
    }
}

pub(crate) fn process_attacks(
    input: Res<CombatInput>,
    mut query: Query<(&mut MeleeAttack, &MovementState), With<Player>>,
) {
    if !input.attack_pressed {
        return;
    }

    for (mut attack, movement) in &mut query {
        // Dead players don't swing
        if !movement.enabled {
            continue;
        }

        if attack.try_attack() {
            debug!(
                "Attacking: window={}s, cooldown={}s",
                attack.window_duration, attack.cooldown_duration
            );
        } else {
            debug!(
                "Attack ignored, cooldown {:.2}s remaining",
                attack.cooldown.remaining()
            );
        }
    }
}

/// Point each hitbox pivot at the aim target, whether or not an attack is live.
pub(crate) fn aim_hitboxes(
    aim: Res<AimTarget>,
    owners: Query<&Transform, (With<MeleeAttack>, Without<HitboxPivot>)>,
    mut pivots: Query<(&HitboxPivot, &mut Transform)>,
) {
    let Some(target) = aim.0 else {
        return;
    };

    for (pivot, mut transform) in &mut pivots {
        let Ok(owner_transform) = owners.get(pivot.owner) else {
            continue;
        };

        if let Some(rotation) = aim_rotation(owner_transform.translation.truncate(), target) {
            transform.rotation = rotation;
        }
    }
}

/// Enable or disable hitbox colliders to match their owner's hit window.
pub(crate) fn sync_hitbox_activation(
    mut commands: Commands,
    attackers: Query<&MeleeAttack>,
    mut hitboxes: Query<(Entity, &mut MeleeHitbox, &mut Visibility)>,
) {
    for (entity, mut hitbox, mut visibility) in &mut hitboxes {
        let open = attackers
            .get(hitbox.owner)
            .map(|attack| attack.is_window_open())
            .unwrap_or(false);

        if open == hitbox.active {
            continue;
        }

        hitbox.active = open;
        if open {
            commands.entity(entity).remove::<ColliderDisabled>();
            *visibility = Visibility::Inherited;
        } else {
            commands.entity(entity).insert(ColliderDisabled);
            *visibility = Visibility::Hidden;
        }
    }
}

/// One damage event per overlap-enter between a live hitbox and an enemy.
pub(crate) fn detect_hitbox_hits(
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    hitboxes: Query<&MeleeHitbox>,
    dealers: Query<&DamageDealer>,
    enemies: Query<(), With<Enemy>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (hitbox_entity, target) in pairs {
            let Ok(hitbox) = hitboxes.get(hitbox_entity) else {
                continue;
            };
            if !hitbox.active || !enemies.contains(target) {
                continue;
            }

            let Ok(dealer) = dealers.get(hitbox.owner) else {
                warn!("Hitbox owner {:?} has no DamageDealer", hitbox.owner);
                continue;
            };

            damage_events.write(DamageEvent {
                source: hitbox.owner,
                target,
                amount: dealer.damage,
            });
            debug!("Player dealt {} damage to {:?}", dealer.damage, target);
        }
    }
}

pub(crate) fn deliver_contact_damage(
    time: Res<Time>,
    player_query: Query<(Entity, &Invulnerability), With<Player>>,
    mut sources: Query<(Entity, &mut EnemyContact, &CollidingEntities)>,
    mut hit_events: MessageWriter<PlayerHitEvent>,
) {
    let Ok((player, invulnerability)) = player_query.single() else {
        return;
    };
    let now = time.elapsed_secs_f64();

    for (source, mut contact, colliding) in &mut sources {
        let overlapping = colliding.contains(&player);
        if !contact.try_deliver(overlapping, now, invulnerability.is_active()) {
            continue;
        }

        hit_events.write(PlayerHitEvent {
            source,
            amount: contact.damage_amount,
        });
        debug!(
            "Enemy {:?} dealt {} contact damage to player",
            source, contact.damage_amount
        );
    }
}

pub(crate) fn tick_combat_timers(
    time: Res<Time>,
    mut attackers: Query<&mut MeleeAttack>,
    mut invulnerable: Query<&mut Invulnerability>,
) {
    let dt = time.delta_secs();

    for mut attack in &mut attackers {
        let tick = attack.tick(dt);
        if tick.window_closed {
            debug!("Hit window closed");
        }
        if tick.ready {
            debug!("Can attack again");
        }
    }

    for mut invulnerability in &mut invulnerable {
        if invulnerability.tick(dt) {
            debug!("Invulnerability ended");
        }
    }
}

pub(crate) fn flash_invulnerability(
    tuning: Res<CombatTuning>,
    mut query: Query<(&Invulnerability, &mut Sprite), With<Player>>,
) {
    for (invulnerability, mut sprite) in &mut query {
        let alpha = if invulnerability.is_dimmed() {
            tuning.flash_alpha
        } else {
            1.0
        };

        if sprite.color.alpha() != alpha {
            sprite.color.set_alpha(alpha);
        }
    }
}
