//! Lifecycle domain: dev hotkeys for exercising death, buffs and healing.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{DamageDealer, MeleeAttack};
use crate::core::GameRng;
use crate::lifecycle::buffs::BuffTuning;
use crate::lifecycle::events::PlayerDiedEvent;
use crate::lifecycle::state::PlayerState;
use crate::lifecycle::systems::reapply_buffs;
use crate::movement::{MovementStats, Player};

const DEV_HEAL_AMOUNT: f32 = 25.0;

/// F1: force death, F2: reset buffs, F3: heal
pub(crate) fn handle_dev_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<BuffTuning>,
    mut rng: ResMut<GameRng>,
    mut died_events: MessageWriter<PlayerDiedEvent>,
    mut player_query: Query<
        (
            Entity,
            &mut PlayerState,
            &mut MovementStats,
            &mut MeleeAttack,
            &mut DamageDealer,
        ),
        With<Player>,
    >,
) {
    let Ok((player, mut state, mut stats, mut attack, mut dealer)) = player_query.single_mut()
    else {
        return;
    };

    if keyboard.just_pressed(KeyCode::F1) {
        match state.force_death(&tuning, &mut rng.0) {
            Some(report) => {
                info!("[DEV] Forced death");
                died_events.write(PlayerDiedEvent {
                    player,
                    survived: report.survived,
                    granted: report.granted,
                });
            }
            None => debug!("[DEV] Force death ignored: already dead"),
        }
    }

    if keyboard.just_pressed(KeyCode::F2) {
        let cleared = state.buffs.total();
        state.reset_buffs();
        reapply_buffs(&state, &tuning, &mut stats, &mut attack, &mut dealer);
        info!("[DEV] All buffs reset! Cleared {} stacks", cleared);
    }

    if keyboard.just_pressed(KeyCode::F3) {
        state.heal(DEV_HEAL_AMOUNT);
        info!("[DEV] Healed to {}/{}", state.vitals.current, state.vitals.max);
    }
}
