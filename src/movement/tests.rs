//! Movement domain: unit tests for run, jump, dash and facing.

use bevy::prelude::*;

use super::{
    DashOutcome, DashPhase, Facing, JumpKind, MAX_JUMPS, MovementInput, MovementState,
    MovementStats, MovementTuning, RigidBodyHandle,
};

/// Unit-mass body with no integration; tests read back exactly what the
/// controller wrote.
#[derive(Debug)]
struct TestBody {
    velocity: Vec2,
    gravity_scale: f32,
}

impl Default for TestBody {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity_scale: 1.0,
        }
    }
}

impl RigidBodyHandle for TestBody {
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }
}

fn stats() -> MovementStats {
    MovementStats::from_tuning(&MovementTuning::default())
}

fn idle() -> MovementInput {
    MovementInput::default()
}

fn jump() -> MovementInput {
    MovementInput {
        jump_pressed: true,
        ..default()
    }
}

fn dash(axis_x: f32) -> MovementInput {
    MovementInput {
        axis: Vec2::new(axis_x, 0.0),
        dash_pressed: true,
        ..default()
    }
}

#[test]
fn test_horizontal_velocity_follows_axis() {
    let stats = stats();
    let mut state = MovementState::default();
    let mut body = TestBody {
        velocity: Vec2::new(0.0, -30.0),
        ..default()
    };

    let input = MovementInput {
        axis: Vec2::new(-1.0, 0.0),
        ..default()
    };
    state.step(&input, true, &stats, &mut body);

    assert_eq!(body.velocity, Vec2::new(-stats.move_speed, -30.0));
}

#[test]
fn test_ground_jump_then_double_jump() {
    let stats = stats();
    let mut state = MovementState::default();
    let mut body = TestBody::default();

    state.step(&idle(), true, &stats, &mut body);
    body.velocity.y = -5.0;

    let report = state.step(&jump(), true, &stats, &mut body);
    assert_eq!(report.jumped, Some(JumpKind::Ground));
    assert_eq!(body.velocity.y, stats.jump_force);
    assert_eq!(state.jump_count, 1);

    body.velocity.y = -40.0;
    let report = state.step(&jump(), false, &stats, &mut body);
    assert_eq!(report.jumped, Some(JumpKind::Double));
    assert_eq!(body.velocity.y, stats.double_jump_force);
    assert_eq!(state.jump_count, MAX_JUMPS);

    let report = state.step(&jump(), false, &stats, &mut body);
    assert_eq!(report.jumped, None);
    assert_eq!(state.jump_count, MAX_JUMPS);
}

#[test]
fn test_double_jump_disabled() {
    let mut stats = stats();
    stats.has_double_jump = false;
    let mut state = MovementState::default();
    let mut body = TestBody::default();

    state.step(&jump(), true, &stats, &mut body);
    let report = state.step(&jump(), false, &stats, &mut body);
    assert_eq!(report.jumped, None);
    assert_eq!(state.jump_count, 1);
}

#[test]
fn test_jumps_reset_only_on_landing_edge() {
    let stats = stats();
    let mut state = MovementState::default();
    let mut body = TestBody::default();

    state.step(&jump(), true, &stats, &mut body);
    state.step(&jump(), true, &stats, &mut body);
    // Still grounded the frame after jumping: no new edge, no refill
    assert_eq!(state.jump_count, 2);

    state.step(&idle(), false, &stats, &mut body);
    assert_eq!(state.jump_count, 2);

    let report = state.step(&idle(), true, &stats, &mut body);
    assert!(report.landed);
    assert_eq!(state.jump_count, 0);
}

#[test]
fn test_no_ground_jump_while_airborne() {
    let stats = stats();
    let mut state = MovementState::default();
    let mut body = TestBody::default();

    let report = state.step(&jump(), false, &stats, &mut body);
    assert_eq!(report.jumped, None);
    assert_eq!(state.jump_count, 0);
}

#[test]
fn test_dash_uses_axis_direction_and_suspends_gravity() {
    let stats = stats();
    let mut state = MovementState::default();
    let mut body = TestBody {
        velocity: Vec2::new(10.0, -80.0),
        gravity_scale: 1.0,
    };

    let report = state.step(&dash(-1.0), false, &stats, &mut body);
    assert_eq!(report.dash, Some(DashOutcome::Started { direction: -1.0 }));
    assert!(state.is_dashing());
    assert_eq!(body.gravity_scale, 0.0);
    assert_eq!(body.velocity, Vec2::new(-stats.dash_power, 0.0));
}

#[test]
fn test_dash_without_input_uses_facing() {
    let stats = stats();
    let mut state = MovementState {
        facing: Facing::Left,
        ..default()
    };
    let mut body = TestBody::default();

    let report = state.step(&dash(0.0), false, &stats, &mut body);
    assert_eq!(report.dash, Some(DashOutcome::Started { direction: -1.0 }));
}

#[test]
fn test_dash_ignores_horizontal_input_while_active() {
    let stats = stats();
    let mut state = MovementState::default();
    let mut body = TestBody::default();

    state.step(&dash(1.0), false, &stats, &mut body);
    let input = MovementInput {
        axis: Vec2::new(-1.0, 0.0),
        ..default()
    };
    state.step(&input, false, &stats, &mut body);
    assert_eq!(body.velocity.x, stats.dash_power);
}

#[test]
fn test_dash_ends_and_restores_gravity() {
    let mut stats = stats();
    stats.dash_duration = 0.25;
    let mut state = MovementState::default();
    let mut body = TestBody {
        gravity_scale: 2.0,
        ..default()
    };

    state.step(&dash(1.0), false, &stats, &mut body);
    assert!(!state.tick(0.125, &mut body));
    assert_eq!(body.gravity_scale, 0.0);
    assert!(state.tick(0.125, &mut body));
    assert_eq!(body.gravity_scale, 2.0);
    assert_eq!(state.dash, DashPhase::Idle);
}

#[test]
fn test_dash_rejected_while_dashing_or_cooling_down() {
    let mut stats = stats();
    stats.dash_duration = 0.25;
    stats.dash_cooldown = 1.0;
    let mut state = MovementState::default();
    let mut body = TestBody::default();

    state.step(&dash(1.0), false, &stats, &mut body);
    let report = state.step(&dash(1.0), false, &stats, &mut body);
    assert_eq!(report.dash, Some(DashOutcome::AlreadyDashing));

    state.tick(0.25, &mut body);
    assert!(!state.is_dashing());
    assert!(state.dash_cooldown.is_running());
    let report = state.step(&dash(1.0), false, &stats, &mut body);
    assert_eq!(
        report.dash,
        Some(DashOutcome::OnCooldown { remaining: 0.75 })
    );

    state.tick(0.75, &mut body);
    assert!(state.dash_cooldown.is_ready());
    let report = state.step(&dash(1.0), false, &stats, &mut body);
    assert!(matches!(report.dash, Some(DashOutcome::Started { .. })));
}

#[test]
fn test_jump_allowed_during_dash() {
    let stats = stats();
    let mut state = MovementState::default();
    let mut body = TestBody::default();

    let input = MovementInput {
        axis: Vec2::new(1.0, 0.0),
        jump_pressed: true,
        dash_pressed: true,
    };
    let report = state.step(&input, true, &stats, &mut body);
    assert!(matches!(report.dash, Some(DashOutcome::Started { .. })));
    assert_eq!(report.jumped, Some(JumpKind::Ground));
    assert_eq!(body.velocity, Vec2::new(stats.dash_power, stats.jump_force));
}

#[test]
fn test_facing_follows_last_nonzero_input() {
    let stats = stats();
    let mut state = MovementState::default();
    let mut body = TestBody::default();

    let left = MovementInput {
        axis: Vec2::new(-1.0, 0.0),
        ..default()
    };
    let report = state.step(&left, true, &stats, &mut body);
    assert!(report.flipped);
    assert_eq!(state.facing, Facing::Left);

    let report = state.step(&idle(), true, &stats, &mut body);
    assert!(!report.flipped);
    assert_eq!(state.facing, Facing::Left);
}

#[test]
fn test_disabled_controller_ignores_input_and_timers() {
    let stats = stats();
    let mut state = MovementState {
        enabled: false,
        ..default()
    };
    let mut body = TestBody::default();

    let report = state.step(&dash(1.0), true, &stats, &mut body);
    assert_eq!(report.dash, None);
    assert_eq!(body.velocity, Vec2::ZERO);
    assert!(!state.tick(1.0, &mut body));
}

#[test]
fn test_reset_dash_restores_defaults() {
    let stats = stats();
    let mut state = MovementState::default();
    let mut body = TestBody::default();

    state.step(&dash(1.0), false, &stats, &mut body);
    state.reset_dash(1.0, &mut body);

    assert_eq!(state.dash, DashPhase::Idle);
    assert!(state.dash_cooldown.is_ready());
    assert_eq!(body.gravity_scale, 1.0);
    assert_eq!(body.velocity, Vec2::ZERO);
}

#[test]
fn test_stat_setters() {
    let mut stats = stats();
    stats.set_move_speed(300.0);
    stats.set_jump_force(600.0);
    stats.set_double_jump_force(500.0);
    stats.set_dash_power(900.0);
    stats.set_dash_cooldown(0.5);

    assert_eq!(stats.move_speed, 300.0);
    assert_eq!(stats.jump_force, 600.0);
    assert_eq!(stats.double_jump_force, 500.0);
    assert_eq!(stats.dash_power, 900.0);
    assert_eq!(stats.dash_cooldown, 0.5);
}

#[test]
fn test_single_jump_height() {
    let tuning = MovementTuning::default();
    let expected = tuning.jump_force * tuning.jump_force / (2.0 * tuning.gravity);
    assert!((tuning.single_jump_height() - expected).abs() < 1e-3);
    assert!(tuning.single_jump_height() > 200.0);
}
