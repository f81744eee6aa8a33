//! Lifecycle domain: unit tests for health, death, buffs and respawn.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{
    BaseStats, BuffKind, BuffStacks, BuffTuning, DamageOutcome, DerivedStats, LifePhase,
    PlayerState,
};
use crate::combat::{DamageDealer, EnemyContact, EnemyTuning, Invulnerability, MeleeAttack};
use crate::movement::{MovementStats, MovementTuning};

fn base_stats() -> BaseStats {
    BaseStats {
        damage: 10.0,
        attack_cooldown: 1.0,
        move_speed: 250.0,
        jump_force: 500.0,
        double_jump_force: 400.0,
        dash_cooldown: 1.0,
    }
}

fn player() -> PlayerState {
    PlayerState::new(100.0, base_stats())
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

/// Run the respawn delay out and complete the respawn.
fn respawn(state: &mut PlayerState, tuning: &BuffTuning) {
    assert!(state.tick(tuning.respawn_delay));
    assert!(state.finish_respawn());
}

#[test]
fn test_damage_and_heal_stay_in_bounds() {
    let tuning = BuffTuning::default();
    let mut rng = rng();
    let mut state = player();

    assert_eq!(
        state.take_damage(30.0, &tuning, &mut rng),
        DamageOutcome::Wounded { remaining: 70.0 }
    );
    state.heal(50.0);
    assert_eq!(state.vitals.current, 100.0);

    state.take_damage(10.0, &tuning, &mut rng);
    state.heal(5.0);
    assert_eq!(state.vitals.current, 95.0);

    state.take_damage(500.0, &tuning, &mut rng);
    assert_eq!(state.vitals.current, 0.0);
}

#[test]
fn test_two_heavy_hits_kill_once() {
    let tuning = BuffTuning::default();
    let mut rng = rng();
    let mut state = player();

    assert_eq!(
        state.take_damage(60.0, &tuning, &mut rng),
        DamageOutcome::Wounded { remaining: 40.0 }
    );
    assert!(matches!(
        state.take_damage(60.0, &tuning, &mut rng),
        DamageOutcome::Killed(_)
    ));
    // Same-frame follow-up hit after the zero crossing
    assert_eq!(
        state.take_damage(60.0, &tuning, &mut rng),
        DamageOutcome::Ignored
    );

    assert_eq!(state.vitals.current, 0.0);
    assert!(matches!(state.phase, LifePhase::Dead { .. }));
}

#[test]
fn test_hits_while_invulnerable_leave_health_unchanged() {
    let tuning = BuffTuning::default();
    let mut rng = rng();
    let mut state = player();
    let mut invulnerability = Invulnerability::new(1.0, 0.1);

    assert_eq!(
        state.take_hit(20.0, &mut invulnerability, &tuning, &mut rng),
        DamageOutcome::Wounded { remaining: 80.0 }
    );
    assert!(invulnerability.is_active());

    for _ in 0..3 {
        assert_eq!(
            state.take_hit(20.0, &mut invulnerability, &tuning, &mut rng),
            DamageOutcome::Ignored
        );
        assert_eq!(state.vitals.current, 80.0);
        invulnerability.tick(0.25);
    }

    invulnerability.tick(0.25);
    assert!(!invulnerability.is_active());
    assert_eq!(
        state.take_hit(20.0, &mut invulnerability, &tuning, &mut rng),
        DamageOutcome::Wounded { remaining: 60.0 }
    );
}

#[test]
fn test_killing_hit_starts_invulnerability() {
    let tuning = BuffTuning::default();
    let mut rng = rng();
    let mut state = player();
    let mut invulnerability = Invulnerability::new(1.0, 0.1);

    let outcome = state.take_hit(150.0, &mut invulnerability, &tuning, &mut rng);
    assert!(matches!(outcome, DamageOutcome::Killed(_)));
    assert!(invulnerability.is_active());
}

#[test]
fn test_held_contact_lands_once_per_second() {
    let tuning = BuffTuning::default();
    let enemy = EnemyTuning::default();
    let mut rng = rng();
    let mut state = player();
    let mut invulnerability = Invulnerability::new(1.0, 0.1);
    let mut contact = EnemyContact::new(enemy.contact_damage, 1.0);

    let dt = 1.0 / 60.0;
    let mut deliveries = Vec::new();

    // Overlap held from t=0 until just short of t=3, one frame per step:
    // detect contact, resolve the hit, then advance timers
    for frame in 0..180 {
        let now = frame as f64 / 60.0;

        if contact.try_deliver(true, now, invulnerability.is_active()) {
            deliveries.push(now);
            let outcome = state.take_hit(
                contact.damage_amount,
                &mut invulnerability,
                &tuning,
                &mut rng,
            );
            assert!(matches!(outcome, DamageOutcome::Wounded { .. }));
        }

        invulnerability.tick(dt);
        state.tick(dt);
    }

    assert_eq!(deliveries.iter().filter(|t| **t <= 2.5).count(), 3);
    assert_eq!(deliveries.len(), 3);
    for (expected, delivered) in deliveries.iter().enumerate() {
        assert!((delivered - expected as f64).abs() < 0.05);
    }
    assert_eq!(state.vitals.current, 100.0 - 3.0 * enemy.contact_damage);
}

#[test]
fn test_dead_player_ignores_damage_and_healing() {
    let tuning = BuffTuning::default();
    let mut rng = rng();
    let mut state = player();
    state.force_death(&tuning, &mut rng);

    assert_eq!(
        state.take_damage(10.0, &tuning, &mut rng),
        DamageOutcome::Ignored
    );
    state.heal(50.0);
    assert_eq!(state.vitals.current, 0.0);

    // Still ignored once the delay has elapsed but before the reset runs
    assert!(state.tick(tuning.respawn_delay));
    assert!(state.is_respawning());
    assert_eq!(
        state.take_damage(10.0, &tuning, &mut rng),
        DamageOutcome::Ignored
    );
}

#[test]
fn test_long_survival_grants_one_buff_and_respawns() {
    let tuning = BuffTuning::default();
    let mut rng = rng();
    let mut state = player();

    state.tick(35.0);
    assert_eq!(state.survival_time, 35.0);

    let DamageOutcome::Killed(report) = state.take_damage(100.0, &tuning, &mut rng) else {
        panic!("expected death");
    };
    assert_eq!(report.survived, 35.0);
    let kind = report.granted.expect("buff should be granted");
    assert_eq!(state.buffs.get(kind), 1);
    assert_eq!(state.buffs.total(), 1);

    assert!(!state.tick(1.0));
    assert!(state.tick(1.0));
    assert!(state.finish_respawn());

    assert_eq!(state.phase, LifePhase::Alive);
    assert_eq!(state.vitals.current, 100.0);
    assert_eq!(state.survival_time, 0.0);
    assert_eq!(state.buffs.total(), 1);
}

#[test]
fn test_short_survival_grants_nothing_but_respawns() {
    let tuning = BuffTuning::default();
    let mut rng = rng();
    let mut state = player();

    state.tick(10.0);
    let report = state.force_death(&tuning, &mut rng).expect("alive");
    assert_eq!(report.granted, None);
    assert_eq!(state.buffs.total(), 0);

    respawn(&mut state, &tuning);
    assert!(state.is_alive());
    assert_eq!(state.vitals.current, 100.0);
}

#[test]
fn test_survival_time_frozen_while_dead() {
    let tuning = BuffTuning::default();
    let mut rng = rng();
    let mut state = player();

    state.tick(10.0);
    state.force_death(&tuning, &mut rng);
    state.tick(0.5);
    assert_eq!(state.survival_time, 10.0);
}

#[test]
fn test_respawn_is_idempotent() {
    let tuning = BuffTuning::default();
    let mut rng = rng();
    let mut state = player();

    assert!(!state.finish_respawn());

    state.force_death(&tuning, &mut rng);
    assert!(!state.finish_respawn());

    respawn(&mut state, &tuning);
    state.take_damage(20.0, &tuning, &mut rng);
    assert!(!state.finish_respawn());
    assert_eq!(state.vitals.current, 80.0);
}

#[test]
fn test_force_death_only_when_alive() {
    let tuning = BuffTuning::default();
    let mut rng = rng();
    let mut state = player();

    assert!(state.force_death(&tuning, &mut rng).is_some());
    assert_eq!(state.vitals.current, 0.0);
    assert!(state.force_death(&tuning, &mut rng).is_none());
}

#[test]
fn test_buff_stacks_are_monotonic() {
    let tuning = BuffTuning::default();
    let mut rng = rng();
    let mut state = player();
    let mut previous = BuffStacks::default();

    for death in 1..=20 {
        state.tick(31.0);
        state.take_damage(1000.0, &tuning, &mut rng);
        respawn(&mut state, &tuning);

        assert_eq!(state.buffs.total(), death);
        for kind in BuffKind::ALL {
            assert!(state.buffs.get(kind) >= previous.get(kind));
        }
        previous = state.buffs;
    }
}

#[test]
fn test_reset_buffs_clears_all_stacks() {
    let mut state = player();
    state.buffs.grant(BuffKind::Damage);
    state.buffs.grant(BuffKind::HighJump);

    state.reset_buffs();
    assert_eq!(state.buffs.total(), 0);
    assert_eq!(state.derived_stats(&BuffTuning::default()).damage, 10.0);
}

#[test]
fn test_grant_returns_new_count() {
    let mut stacks = BuffStacks::default();
    assert_eq!(stacks.grant(BuffKind::Movement), 1);
    assert_eq!(stacks.grant(BuffKind::Movement), 2);
    assert_eq!(stacks.get(BuffKind::Movement), 2);
    assert_eq!(stacks.get(BuffKind::Damage), 0);
}

#[test]
fn test_random_buff_reaches_every_kind() {
    let mut rng = rng();
    let mut seen = BuffStacks::default();
    for _ in 0..200 {
        seen.grant(BuffKind::random(&mut rng));
    }
    for kind in BuffKind::ALL {
        assert!(seen.get(kind) > 0, "{:?} never rolled", kind);
    }
}

#[test]
fn test_same_seed_grants_same_buffs() {
    let tuning = BuffTuning::default();
    let mut first = player();
    let mut second = player();
    let mut rng_a = rng();
    let mut rng_b = rng();

    for _ in 0..5 {
        first.tick(30.0);
        second.tick(30.0);
        let a = first.force_death(&tuning, &mut rng_a).map(|r| r.granted);
        let b = second.force_death(&tuning, &mut rng_b).map(|r| r.granted);
        assert_eq!(a, b);
        respawn(&mut first, &tuning);
        respawn(&mut second, &tuning);
    }
}

#[test]
fn test_derived_stats_without_buffs_match_base() {
    let tuning = BuffTuning::default();
    let derived = DerivedStats::derive(&base_stats(), &BuffStacks::default(), &tuning);

    assert_eq!(derived.damage, 10.0);
    assert_eq!(derived.attack_cooldown, 1.0);
    assert_eq!(derived.move_speed, 250.0);
    assert_eq!(derived.jump_force, 500.0);
    assert_eq!(derived.double_jump_force, 400.0);
    assert_eq!(derived.dash_cooldown, 1.0);
}

#[test]
fn test_each_buff_kind_changes_its_stat() {
    let tuning = BuffTuning::default();
    let mut stacks = BuffStacks::default();
    stacks.grant(BuffKind::Damage);
    stacks.grant(BuffKind::Damage);
    stacks.grant(BuffKind::Cooldown);
    stacks.grant(BuffKind::Cooldown);
    stacks.grant(BuffKind::Movement);
    stacks.grant(BuffKind::AttackSpeed);
    stacks.grant(BuffKind::HighJump);

    let derived = DerivedStats::derive(&base_stats(), &stacks, &tuning);
    assert!(approx(derived.damage, 20.0));
    assert!(approx(derived.dash_cooldown, 0.8));
    assert!(approx(derived.move_speed, 300.0));
    assert!(approx(derived.attack_cooldown, 0.8));
    assert!(approx(derived.jump_force, 600.0));
    assert!(approx(derived.double_jump_force, 500.0));
}

#[test]
fn test_cooldown_buffs_respect_floor() {
    let tuning = BuffTuning::default();
    let mut stacks = BuffStacks::default();
    for _ in 0..15 {
        stacks.grant(BuffKind::AttackSpeed);
        stacks.grant(BuffKind::Cooldown);
    }

    let derived = DerivedStats::derive(&base_stats(), &stacks, &tuning);
    assert!(approx(derived.attack_cooldown, tuning.min_cooldown));
    assert!(approx(derived.dash_cooldown, tuning.min_cooldown));
}

#[test]
fn test_reapplying_buffs_is_idempotent() {
    let tuning = BuffTuning::default();
    let mut movement = MovementStats::from_tuning(&MovementTuning::default());
    let mut attack = MeleeAttack::new(1.0, 0.5);
    let mut dealer = DamageDealer { damage: 10.0 };

    let mut state = PlayerState::new(100.0, BaseStats::capture(&movement, &attack, &dealer));
    state.buffs.grant(BuffKind::Damage);
    state.buffs.grant(BuffKind::HighJump);
    state.buffs.grant(BuffKind::AttackSpeed);

    let derived = state.derived_stats(&tuning);
    derived.apply_to(&mut movement, &mut attack, &mut dealer);
    let once = (movement.clone(), attack.cooldown_duration, dealer);

    derived.apply_to(&mut movement, &mut attack, &mut dealer);
    state
        .derived_stats(&tuning)
        .apply_to(&mut movement, &mut attack, &mut dealer);

    assert_eq!(movement, once.0);
    assert_eq!(attack.cooldown_duration, once.1);
    assert_eq!(dealer, once.2);
    assert!(approx(dealer.damage, 15.0));
}
