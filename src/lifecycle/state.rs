//! Lifecycle domain: player health, survival time and the death/respawn cycle.

use bevy::prelude::*;
use rand::Rng;

use crate::combat::Invulnerability;
use crate::lifecycle::buffs::{BaseStats, BuffKind, BuffStacks, BuffTuning, DerivedStats};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vitals {
    pub current: f32,
    pub max: f32,
}

impl Vitals {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LifePhase {
    #[default]
    Alive,
    Dead {
        respawn_in: f32,
    },
    /// Respawn delay elapsed; the world-side reset has not run yet.
    Respawning,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathReport {
    pub survived: f32,
    pub granted: Option<BuffKind>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// Not alive or still invulnerable; health untouched.
    Ignored,
    Wounded {
        remaining: f32,
    },
    Killed(DeathReport),
}

/// Everything that persists across the player's deaths.
#[derive(Component, Debug, Clone)]
pub struct PlayerState {
    pub vitals: Vitals,
    pub survival_time: f32,
    pub phase: LifePhase,
    pub buffs: BuffStacks,
    pub base: BaseStats,
}

impl PlayerState {
    pub fn new(max_health: f32, base: BaseStats) -> Self {
        Self {
            vitals: Vitals::full(max_health),
            survival_time: 0.0,
            phase: LifePhase::Alive,
            buffs: BuffStacks::default(),
            base,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.phase == LifePhase::Alive
    }

    pub fn is_respawning(&self) -> bool {
        self.phase == LifePhase::Respawning
    }

    pub fn take_damage(
        &mut self,
        amount: f32,
        tuning: &BuffTuning,
        rng: &mut impl Rng,
    ) -> DamageOutcome {
        if !self.is_alive() {
            return DamageOutcome::Ignored;
        }

        self.vitals.current = (self.vitals.current - amount).clamp(0.0, self.vitals.max);
        if self.vitals.current <= 0.0 {
            return DamageOutcome::Killed(self.die(tuning, rng));
        }

        DamageOutcome::Wounded {
            remaining: self.vitals.current,
        }
    }

    /// Enemy damage gated by i-frames. A hit that lands starts a fresh
    /// invulnerability window, the killing hit included.
    pub fn take_hit(
        &mut self,
        amount: f32,
        invulnerability: &mut Invulnerability,
        tuning: &BuffTuning,
        rng: &mut impl Rng,
    ) -> DamageOutcome {
        if invulnerability.is_active() {
            return DamageOutcome::Ignored;
        }

        let outcome = self.take_damage(amount, tuning, rng);
        if outcome != DamageOutcome::Ignored {
            invulnerability.trigger();
        }
        outcome
    }

    pub fn heal(&mut self, amount: f32) {
        if !self.is_alive() {
            return;
        }
        self.vitals.current = (self.vitals.current + amount).clamp(0.0, self.vitals.max);
    }

    /// Kill outright. `None` when already dead.
    pub fn force_death(&mut self, tuning: &BuffTuning, rng: &mut impl Rng) -> Option<DeathReport> {
        if !self.is_alive() {
            return None;
        }
        self.vitals.current = 0.0;
        Some(self.die(tuning, rng))
    }

    fn die(&mut self, tuning: &BuffTuning, rng: &mut impl Rng) -> DeathReport {
        self.phase = LifePhase::Dead {
            respawn_in: tuning.respawn_delay,
        };

        let granted = if self.survival_time >= tuning.buff_threshold {
            let kind = BuffKind::random(rng);
            self.buffs.grant(kind);
            Some(kind)
        } else {
            None
        };

        DeathReport {
            survived: self.survival_time,
            granted,
        }
    }

    /// Advance survival time or the respawn delay. Returns true on the tick
    /// the delay runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        match &mut self.phase {
            LifePhase::Alive => {
                self.survival_time += dt;
                false
            }
            LifePhase::Dead { respawn_in } => {
                *respawn_in -= dt;
                if *respawn_in <= 0.0 {
                    self.phase = LifePhase::Respawning;
                    return true;
                }
                false
            }
            LifePhase::Respawning => false,
        }
    }

    /// Restore health and clear survival time. Only the first call after the
    /// delay does anything.
    pub fn finish_respawn(&mut self) -> bool {
        if !self.is_respawning() {
            return false;
        }

        self.vitals.current = self.vitals.max;
        self.survival_time = 0.0;
        self.phase = LifePhase::Alive;
        true
    }

    pub fn reset_buffs(&mut self) {
        self.buffs.reset();
    }

    pub fn derived_stats(&self, tuning: &BuffTuning) -> DerivedStats {
        DerivedStats::derive(&self.base, &self.buffs, tuning)
    }
}

/// Where the player reappears after the respawn delay.
#[derive(Component, Debug)]
pub struct RespawnAnchor;
