//! Lifecycle domain: event definitions for death, respawn and buffs.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::lifecycle::buffs::BuffKind;

/// Fired once per death, after health state has changed.
#[derive(Debug)]
pub struct PlayerDiedEvent {
    pub player: Entity,
    pub survived: f32,
    pub granted: Option<BuffKind>,
}

impl Message for PlayerDiedEvent {}

#[derive(Debug)]
pub struct PlayerRespawnedEvent {
    pub player: Entity,
}

impl Message for PlayerRespawnedEvent {}

#[derive(Debug)]
pub struct BuffGrantedEvent {
    pub player: Entity,
    pub kind: BuffKind,
    pub stacks: u32,
}

impl Message for BuffGrantedEvent {}
