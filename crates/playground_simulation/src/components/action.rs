//! Action state персонажа: флаги sprint/crouch/kick, стойка, tuning
//!
//! Флаги - независимые оси (не один enum), но с cross-axis gates
//! (см. `character::actions`).

use bevy::prelude::*;

use crate::config::{ActionCosts, CharacterConfig, SpeedPair, StanceSpeeds};

/// Флаги действий персонажа
///
/// # Per-frame флаги
/// `has_run_this_frame`, `has_jumped_this_frame` ставятся input handlers и
/// сбрасываются в конце КАЖДОГО tick (`character::frame::apply_frame_costs`).
///
/// # Durable флаги
/// `is_running`, `is_crouching`, `has_kicked`, `can_move` живут до явного toggle.
///
/// Инвариант: `is_running && is_crouching` невозможно.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ActionState {
    pub is_running: bool,
    pub has_run_this_frame: bool,
    pub has_jumped_this_frame: bool,
    pub has_kicked: bool,
    pub can_move: bool,
    pub is_crouching: bool,
}

impl ActionState {
    pub fn movable(can_move: bool) -> Self {
        Self {
            can_move,
            ..Default::default()
        }
    }

    /// Сбрасывается анимацией пинка (collaborator), не ядром
    pub fn set_kicked(&mut self, value: bool) {
        self.has_kicked = value;
    }

    pub fn set_can_move(&mut self, value: bool) {
        self.can_move = value;
    }

    /// Прыгнул в этом кадре ИЛИ уже в воздухе (host `Falling`)
    pub fn has_jumped_or_falling(&self, falling: bool) -> bool {
        self.has_jumped_this_frame || falling
    }

    pub fn clear_frame_flags(&mut self) {
        self.has_run_this_frame = false;
        self.has_jumped_this_frame = false;
    }
}

/// Стойка (какое оружие в руках) - определяет walk/sprint скорость
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub enum WeaponStance {
    #[default]
    Unarmed,
    Sword,
    Crossbow,
}

impl WeaponStance {
    /// Числовой индекс для animation blueprints / UI
    pub fn index(self) -> u8 {
        match self {
            WeaponStance::Unarmed => 0,
            WeaponStance::Sword => 1,
            WeaponStance::Crossbow => 2,
        }
    }

    pub fn speeds(self, table: &StanceSpeeds) -> SpeedPair {
        match self {
            WeaponStance::Unarmed => table.unarmed,
            WeaponStance::Sword => table.sword,
            WeaponStance::Crossbow => table.crossbow,
        }
    }
}

/// Costs + скорости, зафиксированные при спавне персонажа
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CharacterTuning {
    pub sprint_cost: f32,
    pub jump_cost: f32,
    pub kick_cost: f32,
    pub speeds: StanceSpeeds,
    /// Период regen таймеров (секунды)
    pub stamina_regen_period: f32,
    pub posture_regen_period: f32,
}

impl Default for CharacterTuning {
    fn default() -> Self {
        Self::from_config(&CharacterConfig::default())
    }
}

impl CharacterTuning {
    pub fn from_config(config: &CharacterConfig) -> Self {
        let ActionCosts { sprint, jump, kick } = config.costs;
        Self {
            sprint_cost: sprint,
            jump_cost: jump,
            kick_cost: kick,
            speeds: config.speeds,
            stamina_regen_period: config.stamina.regen_period,
            posture_regen_period: config.posture.regen_period,
        }
    }

    /// Max walk speed для стойки с учётом sprint
    pub fn speed_for(&self, stance: WeaponStance, running: bool) -> f32 {
        let pair = stance.speeds(&self.speeds);
        if running {
            pair.sprint
        } else {
            pair.walk
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_flags_cleared() {
        let mut state = ActionState {
            has_run_this_frame: true,
            has_jumped_this_frame: true,
            is_running: true,
            has_kicked: true,
            ..Default::default()
        };

        state.clear_frame_flags();

        assert!(!state.has_run_this_frame);
        assert!(!state.has_jumped_this_frame);
        // Durable флаги не трогаем
        assert!(state.is_running);
        assert!(state.has_kicked);
    }

    #[test]
    fn test_jumped_or_falling() {
        let mut state = ActionState::default();
        assert!(!state.has_jumped_or_falling(false));
        assert!(state.has_jumped_or_falling(true));

        state.has_jumped_this_frame = true;
        assert!(state.has_jumped_or_falling(false));
    }

    #[test]
    fn test_stance_index() {
        assert_eq!(WeaponStance::Unarmed.index(), 0);
        assert_eq!(WeaponStance::Sword.index(), 1);
        assert_eq!(WeaponStance::Crossbow.index(), 2);
    }

    #[test]
    fn test_speed_table() {
        let tuning = CharacterTuning::default();
        assert_eq!(tuning.speed_for(WeaponStance::Unarmed, false), 300.0);
        assert_eq!(tuning.speed_for(WeaponStance::Unarmed, true), 600.0);
        assert_eq!(tuning.speed_for(WeaponStance::Sword, false), 200.0);
        assert_eq!(tuning.speed_for(WeaponStance::Sword, true), 600.0);
        assert_eq!(tuning.speed_for(WeaponStance::Crossbow, false), 150.0);
        assert_eq!(tuning.speed_for(WeaponStance::Crossbow, true), 300.0);
    }
}
