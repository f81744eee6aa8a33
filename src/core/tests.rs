//! Core domain: unit tests for cooldowns, tuning files and seeding.

use rand::Rng;

use super::config::{load_tuning_file, parse_tuning};
use super::{Cooldown, GameRng};

#[test]
fn test_cooldown_counts_down_to_ready() {
    let mut cooldown = Cooldown::default();
    assert!(cooldown.is_ready());
    assert!(!cooldown.tick(1.0));

    cooldown.start(1.0);
    assert!(cooldown.is_running());
    assert!(!cooldown.tick(0.5));
    assert_eq!(cooldown.remaining(), 0.5);
    assert!(cooldown.tick(0.75));
    assert_eq!(cooldown.remaining(), 0.0);
    assert!(cooldown.is_ready());

    // Only the tick that reaches zero reports it
    assert!(!cooldown.tick(0.5));
}

#[test]
fn test_cooldown_restart_replaces_countdown() {
    let mut cooldown = Cooldown::running(1.0);
    cooldown.tick(0.75);
    cooldown.start(2.0);
    assert_eq!(cooldown.remaining(), 2.0);

    cooldown.clear();
    assert!(cooldown.is_ready());
}

#[test]
fn test_cooldown_negative_duration_is_ready() {
    let cooldown = Cooldown::running(-1.0);
    assert!(cooldown.is_ready());
}

#[test]
fn test_parse_partial_tuning() {
    let source = r#"
(
    seed: 42,
    combat: (
        damage: 15.0,
    ),
    buffs: (
        buff_threshold: 10.0,
    ),
)
"#;

    let tuning = parse_tuning(source, "inline.ron").expect("should parse");
    assert_eq!(tuning.seed, Some(42));
    assert!(tuning.movement.is_none());
    assert!(tuning.boss.is_none());

    let combat = tuning.combat.expect("combat section");
    assert_eq!(combat.damage, 15.0);
    // Unlisted fields keep their defaults
    assert_eq!(combat.hit_window, 0.5);

    let buffs = tuning.buffs.expect("buffs section");
    assert_eq!(buffs.buff_threshold, 10.0);
    assert_eq!(buffs.respawn_delay, 2.0);
}

#[test]
fn test_parse_empty_tuning() {
    let tuning = parse_tuning("()", "empty.ron").expect("should parse");
    assert!(tuning.seed.is_none());
    assert!(tuning.combat.is_none());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_tuning("(combat: (damage: \"lots\"))", "bad.ron")
        .expect_err("string damage should fail");
    assert_eq!(err.file, "bad.ron");
    assert!(err.to_string().contains("bad.ron"));
}

#[test]
fn test_shipped_tuning_parses() {
    let source = include_str!("../../assets/config/tuning.ron");
    let tuning = parse_tuning(source, "tuning.ron").expect("shipped tuning should parse");
    assert!(tuning.movement.is_some());
    assert!(tuning.boss.is_some());
}

#[test]
fn test_missing_tuning_file_is_not_an_error() {
    let result = load_tuning_file(std::path::Path::new("assets/config/does_not_exist.ron"));
    assert!(matches!(result, Ok(None)));
}

#[test]
fn test_same_seed_same_rolls() {
    let mut a = GameRng::from_seed(99);
    let mut b = GameRng::from_seed(99);
    let rolls_a: Vec<u32> = (0..8).map(|_| a.0.random_range(0..5)).collect();
    let rolls_b: Vec<u32> = (0..8).map(|_| b.0.random_range(0..5)).collect();
    assert_eq!(rolls_a, rolls_b);
}
