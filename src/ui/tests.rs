//! UI domain: unit tests for HUD text formatting.

use super::death::death_subtext;
use super::{format_buffs, format_health, format_survival_time};
use crate::lifecycle::{BuffKind, BuffStacks};

#[test]
fn test_health_line() {
    assert_eq!(format_health(100.0, 100.0), "Health: 100/100");
    assert_eq!(format_health(39.6, 100.0), "Health: 40/100");
    assert_eq!(format_health(0.0, 100.0), "Health: 0/100");
}

#[test]
fn test_survival_line() {
    assert_eq!(format_survival_time(0.0), "Survival Time: 0.0s");
    assert_eq!(format_survival_time(35.24), "Survival Time: 35.2s");
}

#[test]
fn test_buff_line() {
    let mut stacks = BuffStacks::default();
    assert_eq!(
        format_buffs(&stacks),
        "Buffs - DMG:0 CD:0 SPD:0 ATK:0 JUMP:0"
    );

    stacks.grant(BuffKind::Damage);
    stacks.grant(BuffKind::Damage);
    stacks.grant(BuffKind::HighJump);
    assert_eq!(
        format_buffs(&stacks),
        "Buffs - DMG:2 CD:0 SPD:0 ATK:0 JUMP:1"
    );
}

#[test]
fn test_death_subtext() {
    assert_eq!(
        death_subtext(Some(("Damage", 1)), 30.0),
        "Damage buff gained!"
    );
    assert_eq!(
        death_subtext(Some(("High jump", 3)), 30.0),
        "High jump buff gained! (x3)"
    );
    assert_eq!(death_subtext(None, 30.0), "Survive 30s to earn a buff");
}
