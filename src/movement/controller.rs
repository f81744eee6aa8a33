//! Movement domain: the locomotion state machine.
//!
//! Everything here is plain state plus a [`RigidBodyHandle`], so the Bevy
//! systems stay thin and the rules can be exercised without an `App`.

use bevy::prelude::*;

use crate::movement::body::RigidBodyHandle;
use crate::movement::{DashPhase, Facing, MovementInput, MovementState, MovementStats};

/// Ground jump + double jump.
pub const MAX_JUMPS: u8 = 2;

/// Horizontal input below this magnitude counts as no input.
const AXIS_DEADZONE: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashOutcome {
    Started { direction: f32 },
    AlreadyDashing,
    OnCooldown { remaining: f32 },
}

/// What happened during one [`MovementState::step`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    pub landed: bool,
    pub jumped: Option<JumpKind>,
    pub dash: Option<DashOutcome>,
    pub flipped: bool,
}

impl MovementState {
    pub fn is_dashing(&self) -> bool {
        matches!(self.dash, DashPhase::Dashing { .. })
    }

    /// Resolve one frame of input. Order: dash request, ground edge,
    /// horizontal velocity, jump, facing.
    pub fn step(
        &mut self,
        input: &MovementInput,
        grounded: bool,
        stats: &MovementStats,
        body: &mut impl RigidBodyHandle,
    ) -> StepReport {
        let mut report = StepReport::default();
        if !self.enabled {
            return report;
        }

        if input.dash_pressed {
            report.dash = Some(self.try_dash(input.axis.x, stats, body));
        }

        report.landed = self.update_grounded(grounded);
        self.apply_horizontal(input.axis.x, stats, body);
        report.jumped = self.resolve_jump(input.jump_pressed, stats, body);
        report.flipped = self.update_facing(input.axis.x);

        report
    }

    /// Advance dash and cooldown countdowns. Returns true when a dash ended.
    pub fn tick(&mut self, dt: f32, body: &mut impl RigidBodyHandle) -> bool {
        if !self.enabled {
            return false;
        }

        self.dash_cooldown.tick(dt);

        let DashPhase::Dashing {
            remaining,
            restore_gravity,
        } = self.dash
        else {
            return false;
        };

        let remaining = remaining - dt;
        if remaining > 0.0 {
            self.dash = DashPhase::Dashing {
                remaining,
                restore_gravity,
            };
            return false;
        }

        body.set_gravity_scale(restore_gravity);
        self.dash = DashPhase::Idle;
        true
    }

    /// Records the probe result. Landing (false -> true) is the only thing
    /// that replenishes jumps.
    pub fn update_grounded(&mut self, grounded: bool) -> bool {
        let landed = grounded && !self.grounded;
        self.grounded = grounded;
        if landed {
            self.jump_count = 0;
        }
        landed
    }

    pub fn apply_horizontal(
        &self,
        axis_x: f32,
        stats: &MovementStats,
        body: &mut impl RigidBodyHandle,
    ) {
        if self.is_dashing() {
            return;
        }

        let velocity = body.velocity();
        body.set_velocity(Vec2::new(axis_x * stats.move_speed, velocity.y));
    }

    pub fn resolve_jump(
        &mut self,
        requested: bool,
        stats: &MovementStats,
        body: &mut impl RigidBodyHandle,
    ) -> Option<JumpKind> {
        if !requested || self.jump_count >= MAX_JUMPS {
            return None;
        }

        let (kind, force) = if self.grounded && self.jump_count == 0 {
            (JumpKind::Ground, stats.jump_force)
        } else if stats.has_double_jump && self.jump_count == 1 {
            (JumpKind::Double, stats.double_jump_force)
        } else {
            return None;
        };

        let velocity = body.velocity();
        body.set_velocity(Vec2::new(velocity.x, 0.0));
        body.apply_impulse(Vec2::new(0.0, force));
        self.jump_count += 1;

        Some(kind)
    }

    pub fn try_dash(
        &mut self,
        axis_x: f32,
        stats: &MovementStats,
        body: &mut impl RigidBodyHandle,
    ) -> DashOutcome {
        if self.is_dashing() {
            return DashOutcome::AlreadyDashing;
        }
        if self.dash_cooldown.is_running() {
            return DashOutcome::OnCooldown {
                remaining: self.dash_cooldown.remaining(),
            };
        }

        let direction = if axis_x.abs() > AXIS_DEADZONE {
            axis_x.signum()
        } else {
            self.facing.sign()
        };

        self.dash = DashPhase::Dashing {
            remaining: stats.dash_duration,
            restore_gravity: body.gravity_scale(),
        };
        self.dash_cooldown.start(stats.dash_cooldown);

        body.set_gravity_scale(0.0);
        body.set_velocity(Vec2::new(direction * stats.dash_power, 0.0));

        DashOutcome::Started { direction }
    }

    /// Returns true when the sprite should be mirrored.
    pub fn update_facing(&mut self, axis_x: f32) -> bool {
        let wanted = if axis_x > AXIS_DEADZONE {
            Facing::Right
        } else if axis_x < -AXIS_DEADZONE {
            Facing::Left
        } else {
            return false;
        };

        if wanted == self.facing {
            return false;
        }
        self.facing = wanted;
        true
    }

    /// Drop any dash in flight and make dash available immediately.
    pub fn cancel_dash(&mut self) {
        self.dash = DashPhase::Idle;
        self.dash_cooldown.clear();
    }

    /// [`Self::cancel_dash`] plus a physics reset to `gravity_scale` and rest.
    pub fn reset_dash(&mut self, gravity_scale: f32, body: &mut impl RigidBodyHandle) {
        self.cancel_dash();
        body.set_gravity_scale(gravity_scale);
        body.set_velocity(Vec2::ZERO);
    }
}
