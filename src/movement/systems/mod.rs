//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::probe_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{drive_movement, mirror_facing, tick_movement_timers};
