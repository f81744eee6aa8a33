//! Combat domain: damage dealt to the player by touching a hazard.

use bevy::prelude::*;

/// Hurts the player on overlap, then again each time `damage_interval`
/// has passed since the last delivery while the overlap persists.
#[derive(Component, Debug, Clone)]
pub struct EnemyContact {
    pub damage_amount: f32,
    pub damage_interval: f32,
    last_delivery: Option<f64>,
    overlapping: bool,
}

impl EnemyContact {
    pub fn new(damage_amount: f32, damage_interval: f32) -> Self {
        Self {
            damage_amount,
            damage_interval,
            last_delivery: None,
            overlapping: false,
        }
    }

    /// Feed this frame's overlap state. True when a delivery should be
    /// attempted: on overlap enter, or once the interval has elapsed since
    /// the last recorded delivery.
    pub fn wants_delivery(&mut self, overlapping: bool, now: f64) -> bool {
        let entered = overlapping && !self.overlapping;
        self.overlapping = overlapping;

        if !overlapping {
            return false;
        }
        if entered {
            return true;
        }

        match self.last_delivery {
            Some(last) => now - last >= self.damage_interval as f64,
            None => true,
        }
    }

    pub fn record_delivery(&mut self, now: f64) {
        self.last_delivery = Some(now);
    }

    /// One frame of contact against a player who may be invulnerable.
    /// Returns true when damage goes out; refused attempts are not recorded.
    pub fn try_deliver(&mut self, overlapping: bool, now: f64, invulnerable: bool) -> bool {
        if !self.wants_delivery(overlapping, now) || invulnerable {
            return false;
        }
        self.record_delivery(now);
        true
    }
}
