//! Boss domain: event definitions.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired exactly once, on the hit that empties the boss's health.
#[derive(Debug)]
pub struct BossDefeatedEvent {
    pub boss: Entity,
}

impl Message for BossDefeatedEvent {}
