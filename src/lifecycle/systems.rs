//! Lifecycle domain: damage resolution, death handling and respawn.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{DamageDealer, Invulnerability, MeleeAttack, PlayerHitEvent};
use crate::core::GameRng;
use crate::lifecycle::buffs::BuffTuning;
use crate::lifecycle::events::{BuffGrantedEvent, PlayerDiedEvent, PlayerRespawnedEvent};
use crate::lifecycle::state::{DamageOutcome, PlayerState, RespawnAnchor};
use crate::movement::{MovementState, MovementStats, MovementTuning, PhysicsBody, Player};

/// Push the stats derived from current stacks onto the live components.
pub(crate) fn reapply_buffs(
    state: &PlayerState,
    tuning: &BuffTuning,
    movement: &mut MovementStats,
    attack: &mut MeleeAttack,
    dealer: &mut DamageDealer,
) {
    state.derived_stats(tuning).apply_to(movement, attack, dealer);
}

/// Enemy hits reach health here. Hits landing during i-frames are dropped.
pub(crate) fn apply_player_hits(
    mut hit_events: MessageReader<PlayerHitEvent>,
    mut died_events: MessageWriter<PlayerDiedEvent>,
    tuning: Res<BuffTuning>,
    mut rng: ResMut<GameRng>,
    mut player_query: Query<(Entity, &mut PlayerState, &mut Invulnerability), With<Player>>,
) {
    let Ok((player, mut state, mut invulnerability)) = player_query.single_mut() else {
        return;
    };

    for event in hit_events.read() {
        match state.take_hit(event.amount, &mut invulnerability, &tuning, &mut rng.0) {
            DamageOutcome::Ignored => {
                debug!("Hit from {:?} dropped", event.source);
            }
            DamageOutcome::Wounded { remaining } => {
                debug!(
                    "Player took {} damage. Health: {}/{}",
                    event.amount, remaining, state.vitals.max
                );
            }
            DamageOutcome::Killed(report) => {
                died_events.write(PlayerDiedEvent {
                    player,
                    survived: report.survived,
                    granted: report.granted,
                });
            }
        }
    }
}

/// World-side effects of a death: hide, freeze, disable input, apply buffs.
pub(crate) fn handle_player_death(
    mut died_events: MessageReader<PlayerDiedEvent>,
    mut buff_events: MessageWriter<BuffGrantedEvent>,
    buff_tuning: Res<BuffTuning>,
    movement_tuning: Res<MovementTuning>,
    mut player_query: Query<
        (
            &PlayerState,
            &mut MovementState,
            &mut MovementStats,
            &mut MeleeAttack,
            &mut DamageDealer,
            Option<&mut Visibility>,
            Option<&mut LinearVelocity>,
            Option<&mut AngularVelocity>,
            Option<&mut GravityScale>,
            Option<&Mass>,
        ),
        With<Player>,
    >,
) {
    for event in died_events.read() {
        let Ok((
            state,
            mut movement,
            mut stats,
            mut attack,
            mut dealer,
            visibility,
            velocity,
            angular,
            gravity,
            mass,
        )) = player_query.get_mut(event.player)
        else {
            warn!("Death reported for {:?}, which is not a player", event.player);
            continue;
        };

        info!("Player died after surviving {:.1} seconds", event.survived);

        if let Some(mut visibility) = visibility {
            *visibility = Visibility::Hidden;
        }
        if let Some(mut angular) = angular {
            angular.0 = 0.0;
        }

        match (velocity, gravity) {
            (Some(mut velocity), Some(mut gravity)) => {
                let mut body = PhysicsBody::new(&mut velocity, &mut gravity, mass);
                movement.reset_dash(movement_tuning.default_gravity_scale, &mut body);
            }
            (Some(mut velocity), None) => {
                movement.cancel_dash();
                velocity.0 = Vec2::ZERO;
            }
            _ => movement.cancel_dash(),
        }
        movement.enabled = false;

        match event.granted {
            Some(kind) => {
                reapply_buffs(state, &buff_tuning, &mut stats, &mut attack, &mut dealer);
                let stacks = state.buffs.get(kind);
                info!("{} buff granted! Stack: {}", kind.label(), stacks);
                buff_events.write(BuffGrantedEvent {
                    player: event.player,
                    kind,
                    stacks,
                });
            }
            None => info!("Died too quickly - no buff granted"),
        }
    }
}

/// Survival clock while alive; respawn once the delay has run out.
pub(crate) fn advance_lifecycle(
    time: Res<Time>,
    tuning: Res<BuffTuning>,
    anchors: Query<&GlobalTransform, With<RespawnAnchor>>,
    mut respawned_events: MessageWriter<PlayerRespawnedEvent>,
    mut player_query: Query<
        (
            Entity,
            &mut PlayerState,
            &mut MovementState,
            &mut MovementStats,
            &mut MeleeAttack,
            &mut DamageDealer,
            &mut Invulnerability,
            &mut Transform,
            Option<&mut Position>,
            Option<&mut LinearVelocity>,
            Option<&mut AngularVelocity>,
            Option<&mut Visibility>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (
        entity,
        mut state,
        mut movement,
        mut stats,
        mut attack,
        mut dealer,
        mut invulnerability,
        mut transform,
        position,
        velocity,
        angular,
        visibility,
    ) in &mut player_query
    {
        if !state.tick(dt) || !state.finish_respawn() {
            continue;
        }

        let target = match anchors.iter().next() {
            Some(anchor) => anchor.translation().truncate(),
            None => {
                warn!("No respawn anchor in the world, respawning at origin");
                Vec2::ZERO
            }
        };

        transform.translation.x = target.x;
        transform.translation.y = target.y;
        if let Some(mut position) = position {
            position.0 = target;
        }
        if let Some(mut velocity) = velocity {
            velocity.0 = Vec2::ZERO;
        }
        if let Some(mut angular) = angular {
            angular.0 = 0.0;
        }
        if let Some(mut visibility) = visibility {
            *visibility = Visibility::Inherited;
        }

        movement.enabled = true;
        invulnerability.clear();
        reapply_buffs(&state, &tuning, &mut stats, &mut attack, &mut dealer);

        respawned_events.write(PlayerRespawnedEvent { player: entity });
        info!("Player respawned at {}", target);
    }
}
