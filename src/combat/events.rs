//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A melee hit landing on an enemy.
#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
}

impl Message for DamageEvent {}

/// Contact damage aimed at the player. Dropped on arrival if the player is
/// invulnerable, dead or respawning.
#[derive(Debug)]
pub struct PlayerHitEvent {
    pub source: Entity,
    pub amount: f32,
}

impl Message for PlayerHitEvent {}
