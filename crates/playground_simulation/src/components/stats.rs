//! Ресурсы персонажа: Stamina, Posture
//!
//! Оба построены на `ResourcePool` - clamped float с периодическим regen.
//! Инвариант: 0.0 ≤ current ≤ max после КАЖДОЙ мутации (clamp сразу, без исключений).

use bevy::prelude::*;

use crate::config::{PostureConfig, StaminaConfig};

/// Какой ресурс изменился (для `StatUpdated`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum StatKind {
    Stamina,
    Posture,
}

/// Результат regen tick который реально изменил значение
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatChange {
    pub old: f32,
    pub new: f32,
    pub max: f32,
}

/// Clamped ресурс с recovery rate
///
/// `max` фиксирован при создании, `recovery_rate` можно менять (баффы/дебаффы).
/// Notifications эмитит только regen - `set`/`reduce`/`increase` молчат.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ResourcePool {
    current: f32,
    max: f32,
    recovery_rate: f32,
}

impl ResourcePool {
    /// Новый pool, заполненный до max
    pub fn new(max: f32, recovery_rate: f32) -> Self {
        let max = max.max(0.0);
        Self {
            current: max,
            max,
            recovery_rate,
        }
    }

    pub fn get(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn recovery_rate(&self) -> f32 {
        self.recovery_rate
    }

    pub fn set_recovery_rate(&mut self, rate: f32) {
        self.recovery_rate = rate;
    }

    pub fn set(&mut self, value: f32) {
        self.current = self.clamped(value);
    }

    pub fn reduce(&mut self, amount: f32) {
        self.set(self.current - amount);
    }

    pub fn increase(&mut self, amount: f32) {
        self.set(self.current + amount);
    }

    /// Хватает ли ресурса на действие: current - cost строго > 0
    pub fn exceeds(&self, cost: f32) -> bool {
        self.current - cost > 0.0
    }

    /// Regen tick с обычным recovery rate
    pub fn regen_tick(&mut self) -> Option<StatChange> {
        self.regen_with(self.recovery_rate)
    }

    /// Regen tick с явным rate (альтернативный rate для модификаторов состояния)
    ///
    /// Возвращает `Some` только если clamped значение реально изменилось.
    pub fn regen_with(&mut self, rate: f32) -> Option<StatChange> {
        let previous = self.current;
        self.increase(rate);

        (self.current != previous).then_some(StatChange {
            old: previous,
            new: self.current,
            max: self.max,
        })
    }

    // NaN не должен пробить инвариант - оставляем текущее значение
    fn clamped(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.current
        } else {
            value.clamp(0.0, self.max)
        }
    }
}

/// Выносливость персонажа
///
/// Тратится на sprint (per-second), jump и kick (разово).
/// Regen: `recovery` за tick, `crouch_recovery` пока персонаж сидит.
#[derive(Component, Debug, Clone, Copy, Deref, DerefMut, Reflect)]
#[reflect(Component)]
pub struct Stamina {
    #[deref]
    pub pool: ResourcePool,
    pub crouch_recovery: f32,
}

impl Default for Stamina {
    fn default() -> Self {
        Self::from_config(&StaminaConfig::default())
    }
}

impl Stamina {
    pub fn new(max: f32, recovery: f32, crouch_recovery: f32) -> Self {
        Self {
            pool: ResourcePool::new(max, recovery),
            crouch_recovery,
        }
    }

    pub fn from_config(config: &StaminaConfig) -> Self {
        Self::new(config.max, config.recovery, config.crouch_recovery)
    }

    // Inherent `set`: иначе `Reflect::set` перехватывает вызов раньше Deref
    pub fn set(&mut self, value: f32) {
        self.pool.set(value);
    }

    /// Rate для следующего regen tick
    pub fn active_recovery(&self, crouching: bool) -> f32 {
        if crouching {
            self.crouch_recovery
        } else {
            self.pool.recovery_rate()
        }
    }

    pub fn regen_tick(&mut self, crouching: bool) -> Option<StatChange> {
        let rate = self.active_recovery(crouching);
        self.pool.regen_with(rate)
    }
}

/// Стойкость (posture) - ломается от блоков/ударов, восстанавливается медленно
#[derive(Component, Debug, Clone, Copy, Deref, DerefMut, Reflect)]
#[reflect(Component)]
pub struct Posture {
    #[deref]
    pub pool: ResourcePool,
}

impl Default for Posture {
    fn default() -> Self {
        Self::from_config(&PostureConfig::default())
    }
}

impl Posture {
    pub fn new(max: f32, recovery: f32) -> Self {
        Self {
            pool: ResourcePool::new(max, recovery),
        }
    }

    pub fn from_config(config: &PostureConfig) -> Self {
        Self::new(config.max, config.recovery)
    }

    pub fn set(&mut self, value: f32) {
        self.pool.set(value);
    }
}
