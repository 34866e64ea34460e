//! Per-frame stamina update
//!
//! Запускается ПОСЛЕ обработки input в том же host кадре (отражает intents этого кадра).
//! Jump имеет приоритет: если прыгнули - sprint drain в этом кадре подавлен.
//! После drain sprint снимается, если stamina больше не покрывает `sprint_cost`.

use bevy::prelude::*;

use super::lifecycle::CharacterActive;
use crate::components::{ActionState, CharacterTuning, MovementSpeed, Stamina, WeaponStance};

/// Списать стоимость действий кадра и сбросить per-frame флаги
///
/// - jump: плоская стоимость (не масштабируется по времени)
/// - sprint: `sprint_cost * delta`, delta = длительность host кадра
pub fn settle_frame(
    stamina: &mut Stamina,
    state: &mut ActionState,
    speed: &mut MovementSpeed,
    tuning: &CharacterTuning,
    stance: WeaponStance,
    delta: f32,
) {
    if state.has_jumped_this_frame {
        stamina.reduce(tuning.jump_cost);
    } else if state.has_run_this_frame {
        stamina.reduce(tuning.sprint_cost * delta);
    }

    if state.is_running && !stamina.exceeds(tuning.sprint_cost) {
        state.is_running = false;
        speed.speed = tuning.speed_for(stance, false);
    }

    state.clear_frame_flags();
}

/// System: per-frame costs (Update, CharacterSet::FrameCosts)
pub fn apply_frame_costs(
    mut characters: Query<
        (
            &mut Stamina,
            &mut ActionState,
            &mut MovementSpeed,
            &CharacterTuning,
            Option<&WeaponStance>,
        ),
        With<CharacterActive>,
    >,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (mut stamina, mut state, mut speed, tuning, stance) in characters.iter_mut() {
        let stance = stance.copied().unwrap_or_default();
        settle_frame(&mut stamina, &mut state, &mut speed, tuning, stance, delta);
    }
}
