//! Combat domain: post-hit invulnerability window with flashing feedback.

use bevy::prelude::*;

use crate::core::Cooldown;

/// While active every incoming enemy hit is dropped before it reaches health.
///
/// The flash is derived from time spent in the window rather than run on
/// its own clock, so the two always end together. Triggering again while
/// active restarts the full window.
#[derive(Component, Debug, Clone)]
pub struct Invulnerability {
    pub duration: f32,
    /// Length of each dimmed / normal half of the flash cycle.
    pub flash_interval: f32,
    window: Cooldown,
    elapsed: f32,
}

impl Invulnerability {
    pub fn new(duration: f32, flash_interval: f32) -> Self {
        Self {
            duration,
            flash_interval,
            window: Cooldown::default(),
            elapsed: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.window.is_running()
    }

    pub fn trigger(&mut self) {
        self.window.start(self.duration);
        self.elapsed = 0.0;
    }

    pub fn clear(&mut self) {
        self.window.clear();
        self.elapsed = 0.0;
    }

    /// Returns true on the tick the window expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.elapsed += dt;
        self.window.tick(dt)
    }

    /// Dimmed on the first half of each flash cycle.
    pub fn is_dimmed(&self) -> bool {
        if !self.is_active() || self.flash_interval <= 0.0 {
            return false;
        }
        ((self.elapsed / self.flash_interval) as u32) % 2 == 0
    }
}
