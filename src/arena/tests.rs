//! Arena domain: layout sanity checks.

use super::layout::{BOSS_POSITION, BOSS_SIZE, PLATFORM_SIZE, SPIKE_POSITION, SPIKE_SIZE};
use super::{PLAYER_SPAWN, ground_top, platform_centers};
use crate::movement::MovementTuning;

#[test]
fn test_platforms_reachable_with_one_jump() {
    let tuning = MovementTuning::default();
    let apex = ground_top() + tuning.single_jump_height();

    for center in platform_centers(&tuning) {
        let top = center.y + PLATFORM_SIZE.y / 2.0;
        assert!(top > ground_top());
        assert!(top < apex);
    }
}

#[test]
fn test_spawn_clear_of_hazards() {
    assert!(PLAYER_SPAWN.y > ground_top());
    assert!((PLAYER_SPAWN.x - SPIKE_POSITION.x).abs() > SPIKE_SIZE.x);
    assert!((PLAYER_SPAWN.x - BOSS_POSITION.x).abs() > BOSS_SIZE.x);
}

#[test]
fn test_boss_and_spikes_rest_on_floor() {
    let boss_bottom = BOSS_POSITION.y - BOSS_SIZE.y / 2.0;
    let spike_bottom = SPIKE_POSITION.y - SPIKE_SIZE.y / 2.0;
    assert!(boss_bottom >= ground_top());
    assert!(spike_bottom >= ground_top());
}
