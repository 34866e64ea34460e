//! Periodic regeneration (stamina, posture)
//!
//! Таймеры - компонент `RegenTimers` на самом персонаже. Регистрируется при
//! активации, удаляется при деактивации/despawn → после этого ни один regen
//! callback выполниться не может.
//!
//! Если один tick покрыл несколько периодов (лаг), regen выполняется по разу
//! на каждый истёкший период.

use std::time::Duration;

use bevy::prelude::*;

use super::events::StatUpdated;
use crate::components::{ActionState, Posture, StatKind, Stamina};

/// Fallback период для невалидных значений (NaN, <= 0)
const FALLBACK_PERIOD: Duration = Duration::from_secs(1);

fn period(seconds: f32) -> Duration {
    Duration::try_from_secs_f32(seconds)
        .ok()
        .filter(|duration| !duration.is_zero())
        .unwrap_or(FALLBACK_PERIOD)
}

/// Scoped периодические таймеры regen
#[derive(Component, Debug, Clone)]
pub struct RegenTimers {
    pub stamina: Timer,
    pub posture: Timer,
}

impl RegenTimers {
    pub fn new(stamina_period: f32, posture_period: f32) -> Self {
        Self {
            stamina: Timer::new(period(stamina_period), TimerMode::Repeating),
            posture: Timer::new(period(posture_period), TimerMode::Repeating),
        }
    }

    /// Прогнать таймеры на delta. Возвращает (stamina ticks, posture ticks)
    pub fn advance(&mut self, delta: Duration) -> (u32, u32) {
        self.stamina.tick(delta);
        self.posture.tick(delta);
        (
            self.stamina.times_finished_this_tick(),
            self.posture.times_finished_this_tick(),
        )
    }
}

/// System: тикает regen таймеры и эмитит `StatUpdated` на реальные изменения
pub fn tick_regen_timers(
    mut characters: Query<(Entity, &mut RegenTimers, &mut Stamina, &mut Posture, &ActionState)>,
    mut stat_events: EventWriter<StatUpdated>,
    time: Res<Time>,
) {
    let delta = time.delta();

    for (entity, mut timers, mut stamina, mut posture, state) in characters.iter_mut() {
        let (stamina_ticks, posture_ticks) = timers.advance(delta);

        for _ in 0..stamina_ticks {
            if let Some(change) = stamina.regen_tick(state.is_crouching) {
                stat_events.write(StatUpdated::from_change(entity, StatKind::Stamina, change));
            }
        }

        for _ in 0..posture_ticks {
            if let Some(change) = posture.regen_tick() {
                stat_events.write(StatUpdated::from_change(entity, StatKind::Posture, change));
            }
        }
    }
}
