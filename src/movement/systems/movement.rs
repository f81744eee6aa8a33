//! Movement domain: systems that drive the locomotion state machine.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::body::PhysicsBody;
use crate::movement::controller::DashOutcome;
use crate::movement::{Facing, GroundSensor, MovementInput, MovementState, MovementStats, Player};

pub(crate) fn drive_movement(
    input: Res<MovementInput>,
    mut query: Query<
        (
            &mut MovementState,
            &MovementStats,
            &GroundSensor,
            &mut LinearVelocity,
            &mut GravityScale,
            Option<&Mass>,
        ),
        With<Player>,
    >,
) {
    for (mut state, stats, sensor, mut velocity, mut gravity, mass) in &mut query {
        let mut body = PhysicsBody::new(&mut velocity, &mut gravity, mass);
        let report = state.step(&input, sensor.grounded, stats, &mut body);

        if report.landed {
            debug!("Landed: jumps replenished");
        }
        if report.flipped {
            debug!("Facing {:?}", state.facing);
        }
        if let Some(kind) = report.jumped {
            debug!("{:?} jump, jump_count={}", kind, state.jump_count);
        }
        match report.dash {
            Some(DashOutcome::Started { direction }) => {
                debug!(
                    "Dashing {} for {}s",
                    if direction > 0.0 { "right" } else { "left" },
                    stats.dash_duration
                );
            }
            Some(DashOutcome::OnCooldown { remaining }) => {
                debug!("Dash on cooldown! {:.1}s remaining", remaining);
            }
            Some(DashOutcome::AlreadyDashing) => {
                debug!("Dash ignored: already dashing");
            }
            None => {}
        }
    }
}

pub(crate) fn tick_movement_timers(
    time: Res<Time>,
    mut query: Query<
        (
            &mut MovementState,
            &mut LinearVelocity,
            &mut GravityScale,
            Option<&Mass>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut state, mut velocity, mut gravity, mass) in &mut query {
        let was_cooling = state.dash_cooldown.is_running();
        let mut body = PhysicsBody::new(&mut velocity, &mut gravity, mass);

        if state.tick(dt, &mut body) {
            debug!("Dash completed");
        }
        if was_cooling && state.dash_cooldown.is_ready() {
            debug!("Dash ready");
        }
    }
}

pub(crate) fn mirror_facing(mut query: Query<(&MovementState, &mut Sprite), With<Player>>) {
    for (state, mut sprite) in &mut query {
        let flip = state.facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
