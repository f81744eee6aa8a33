//! Core domain: countdown primitive shared by every timed gameplay sequence.

/// A countdown that runs from a started duration down to zero.
///
/// Dash, attack, invulnerability, respawn and boss sequencing all keep one of
/// these per entity instead of suspending a routine. Starting a running
/// cooldown replaces the old countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cooldown {
    remaining: f32,
}

impl Cooldown {
    /// A cooldown that is already running with `duration` seconds left.
    pub fn running(duration: f32) -> Self {
        let mut cooldown = Self::default();
        cooldown.start(duration);
        cooldown
    }

    pub fn start(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
    }

    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn is_ready(&self) -> bool {
        !self.is_running()
    }

    /// Advance by `dt` seconds. Returns true only on the tick that reaches zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }

        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            return true;
        }

        false
    }
}
