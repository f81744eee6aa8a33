//! Movement domain: the rigid-body surface the controller drives.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Velocity, impulse and gravity-scale access on a physics body.
pub trait RigidBodyHandle {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn apply_impulse(&mut self, impulse: Vec2);
    fn gravity_scale(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);
}

/// [`RigidBodyHandle`] over avian components borrowed from a query.
pub struct PhysicsBody<'a> {
    velocity: &'a mut LinearVelocity,
    gravity: &'a mut GravityScale,
    mass: f32,
}

impl<'a> PhysicsBody<'a> {
    pub fn new(
        velocity: &'a mut LinearVelocity,
        gravity: &'a mut GravityScale,
        mass: Option<&Mass>,
    ) -> Self {
        Self {
            velocity,
            gravity,
            mass: mass.map(|m| m.0).unwrap_or(1.0),
        }
    }
}

impl RigidBodyHandle for PhysicsBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        if self.mass > 0.0 {
            self.velocity.0 += impulse / self.mass;
        }
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity.0
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity.0 = scale;
    }
}
