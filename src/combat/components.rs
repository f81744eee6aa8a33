//! Combat domain: components for melee attacks and enemy tagging.

use bevy::prelude::*;

use crate::core::Cooldown;

/// Tag for anything the player's melee hitbox may damage.
#[derive(Component, Debug)]
pub struct Enemy;

/// Melee attack timing for one attacker.
#[derive(Component, Debug, Clone)]
pub struct MeleeAttack {
    /// Seconds between attacks. Written by the buff system.
    pub cooldown_duration: f32,
    /// How long the hitbox stays live after an attack.
    pub window_duration: f32,
    pub can_attack: bool,
    pub cooldown: Cooldown,
    pub window: Cooldown,
}

/// Timer edges produced by [`MeleeAttack::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttackTick {
    pub window_closed: bool,
    pub ready: bool,
}

impl MeleeAttack {
    pub fn new(cooldown_duration: f32, window_duration: f32) -> Self {
        Self {
            cooldown_duration,
            window_duration,
            can_attack: true,
            cooldown: Cooldown::default(),
            window: Cooldown::default(),
        }
    }

    pub fn set_cooldown_duration(&mut self, cooldown_duration: f32) {
        self.cooldown_duration = cooldown_duration;
    }

    pub fn is_window_open(&self) -> bool {
        self.window.is_running()
    }

    /// Opens the hit window and starts the cooldown. Ignored (no queueing)
    /// while cooling down.
    pub fn try_attack(&mut self) -> bool {
        if !self.can_attack {
            return false;
        }

        self.can_attack = false;
        self.window.start(self.window_duration);
        self.cooldown.start(self.cooldown_duration);
        true
    }

    pub fn tick(&mut self, dt: f32) -> AttackTick {
        let mut tick = AttackTick {
            window_closed: self.window.tick(dt),
            ready: false,
        };

        if !self.can_attack {
            self.cooldown.tick(dt);
            if self.cooldown.is_ready() {
                self.can_attack = true;
                tick.ready = true;
            }
        }

        tick
    }
}

/// Damage dealt per melee hit. Written by the buff system.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct DamageDealer {
    pub damage: f32,
}

impl DamageDealer {
    pub fn set_damage(&mut self, damage: f32) {
        self.damage = damage;
    }
}

/// Rotates around the owner to face the aim point.
#[derive(Component, Debug)]
pub struct HitboxPivot {
    pub owner: Entity,
}

/// Sensor collider that is live only while the owner's hit window is open.
#[derive(Component, Debug)]
pub struct MeleeHitbox {
    pub owner: Entity,
    pub active: bool,
}

/// Rotation about +Z that points +X from `origin` toward `target`.
pub fn aim_rotation(origin: Vec2, target: Vec2) -> Option<Quat> {
    let direction = target - origin;
    if direction.length_squared() <= f32::EPSILON {
        return None;
    }
    Some(Quat::from_rotation_z(direction.y.atan2(direction.x)))
}
