//! Lifecycle domain: death-earned buffs and the stats they derive.

use bevy::prelude::*;
use rand::Rng;
use serde::Deserialize;

use crate::combat::{DamageDealer, MeleeAttack};
use crate::core::PIXELS_PER_UNIT;
use crate::movement::MovementStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuffKind {
    Damage,
    /// Shorter dash cooldown.
    Cooldown,
    Movement,
    /// Shorter attack cooldown.
    AttackSpeed,
    HighJump,
}

impl BuffKind {
    pub const ALL: [BuffKind; 5] = [
        BuffKind::Damage,
        BuffKind::Cooldown,
        BuffKind::Movement,
        BuffKind::AttackSpeed,
        BuffKind::HighJump,
    ];

    pub fn index(self) -> usize {
        match self {
            BuffKind::Damage => 0,
            BuffKind::Cooldown => 1,
            BuffKind::Movement => 2,
            BuffKind::AttackSpeed => 3,
            BuffKind::HighJump => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BuffKind::Damage => "Damage",
            BuffKind::Cooldown => "Cooldown reduction",
            BuffKind::Movement => "Movement speed",
            BuffKind::AttackSpeed => "Attack speed",
            BuffKind::HighJump => "High jump",
        }
    }

    /// Uniform pick over every kind.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Stack count per buff kind. Only grows, except through [`BuffStacks::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuffStacks {
    counts: [u32; 5],
}

impl BuffStacks {
    pub fn get(&self, kind: BuffKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Returns the new stack count.
    pub fn grant(&mut self, kind: BuffKind) -> u32 {
        let count = &mut self.counts[kind.index()];
        *count = count.saturating_add(1);
        *count
    }

    pub fn reset(&mut self) {
        self.counts = [0; 5];
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuffTuning {
    pub max_health: f32,
    /// Seconds alive required for a death to grant a buff.
    pub buff_threshold: f32,
    pub respawn_delay: f32,
    pub damage_per_stack: f32,
    pub dash_cooldown_reduction: f32,
    pub move_speed_per_stack: f32,
    pub attack_cooldown_reduction: f32,
    /// Added to both jump and double jump force.
    pub jump_force_per_stack: f32,
    /// Floor for every cooldown a buff shortens.
    pub min_cooldown: f32,
}

impl Default for BuffTuning {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            buff_threshold: 30.0,
            respawn_delay: 2.0,
            damage_per_stack: 5.0,
            dash_cooldown_reduction: 0.1,
            move_speed_per_stack: 1.0 * PIXELS_PER_UNIT,
            attack_cooldown_reduction: 0.2,
            jump_force_per_stack: 2.0 * PIXELS_PER_UNIT,
            min_cooldown: 0.1,
        }
    }
}

/// Unbuffed stats, captured once when the player spawns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseStats {
    pub damage: f32,
    pub attack_cooldown: f32,
    pub move_speed: f32,
    pub jump_force: f32,
    pub double_jump_force: f32,
    pub dash_cooldown: f32,
}

impl BaseStats {
    pub fn capture(movement: &MovementStats, attack: &MeleeAttack, dealer: &DamageDealer) -> Self {
        Self {
            damage: dealer.damage,
            attack_cooldown: attack.cooldown_duration,
            move_speed: movement.move_speed,
            jump_force: movement.jump_force,
            double_jump_force: movement.double_jump_force,
            dash_cooldown: movement.dash_cooldown,
        }
    }
}

/// Stats after buffs. A pure function of base values and stack counts, so
/// applying it any number of times gives the same result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    pub damage: f32,
    pub attack_cooldown: f32,
    pub move_speed: f32,
    pub jump_force: f32,
    pub double_jump_force: f32,
    pub dash_cooldown: f32,
}

impl DerivedStats {
    pub fn derive(base: &BaseStats, stacks: &BuffStacks, tuning: &BuffTuning) -> Self {
        let count = |kind| stacks.get(kind) as f32;
        let jump_bonus = count(BuffKind::HighJump) * tuning.jump_force_per_stack;

        Self {
            damage: base.damage + count(BuffKind::Damage) * tuning.damage_per_stack,
            attack_cooldown: (base.attack_cooldown
                - count(BuffKind::AttackSpeed) * tuning.attack_cooldown_reduction)
                .max(tuning.min_cooldown),
            move_speed: base.move_speed + count(BuffKind::Movement) * tuning.move_speed_per_stack,
            jump_force: base.jump_force + jump_bonus,
            double_jump_force: base.double_jump_force + jump_bonus,
            dash_cooldown: (base.dash_cooldown
                - count(BuffKind::Cooldown) * tuning.dash_cooldown_reduction)
                .max(tuning.min_cooldown),
        }
    }

    pub fn apply_to(
        &self,
        movement: &mut MovementStats,
        attack: &mut MeleeAttack,
        dealer: &mut DamageDealer,
    ) {
        dealer.set_damage(self.damage);
        attack.set_cooldown_duration(self.attack_cooldown);
        movement.set_move_speed(self.move_speed);
        movement.set_jump_force(self.jump_force);
        movement.set_double_jump_force(self.double_jump_force);
        movement.set_dash_cooldown(self.dash_cooldown);
    }
}
