//! Character configuration
//!
//! Все costs/rates/периоды фиксируются при спавне персонажа (копируются в
//! `CharacterTuning`, `Stamina`, `Posture`, `RegenTimers`). Изменение resource
//! после спавна влияет только на новых персонажей.
//!
//! Пример TOML (все секции опциональны, пропущенные поля = defaults):
//!
//! ```toml
//! movable_on_spawn = true
//!
//! [stamina]
//! max = 100.0
//! recovery = 5.0
//! crouch_recovery = 10.0
//! regen_period = 1.0
//!
//! [costs]
//! jump = 15.0
//! ```

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Параметры stamina pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaminaConfig {
    pub max: f32,
    /// Прибавка за один regen tick
    pub recovery: f32,
    /// Прибавка за regen tick пока персонаж сидит
    pub crouch_recovery: f32,
    /// Период regen таймера (секунды)
    pub regen_period: f32,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            max: 100.0,
            recovery: 5.0,
            crouch_recovery: 10.0,
            regen_period: 1.0,
        }
    }
}

/// Параметры posture pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostureConfig {
    pub max: f32,
    pub recovery: f32,
    pub regen_period: f32,
}

impl Default for PostureConfig {
    fn default() -> Self {
        Self {
            max: 100.0,
            recovery: 3.0,
            regen_period: 2.0,
        }
    }
}

/// Stamina стоимость действий
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionCosts {
    /// Drain в секунду пока бежим
    pub sprint: f32,
    /// Разовая стоимость прыжка
    pub jump: f32,
    /// Разовая стоимость пинка
    pub kick: f32,
}

impl Default for ActionCosts {
    fn default() -> Self {
        Self {
            sprint: 10.0,
            jump: 15.0,
            kick: 20.0,
        }
    }
}

/// Walk/sprint скорость для одной стойки
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
pub struct SpeedPair {
    pub walk: f32,
    pub sprint: f32,
}

/// Таблица скоростей по стойкам (см. `WeaponStance`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct StanceSpeeds {
    pub unarmed: SpeedPair,
    pub sword: SpeedPair,
    pub crossbow: SpeedPair,
}

impl Default for StanceSpeeds {
    fn default() -> Self {
        Self {
            unarmed: SpeedPair { walk: 300.0, sprint: 600.0 },
            sword: SpeedPair { walk: 200.0, sprint: 600.0 },
            crossbow: SpeedPair { walk: 150.0, sprint: 300.0 },
        }
    }
}

/// Конфиг персонажа (Resource, читается при спавне)
#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub stamina: StaminaConfig,
    pub posture: PostureConfig,
    pub costs: ActionCosts,
    pub speeds: StanceSpeeds,
    /// Стартовое значение `ActionState::can_move` (host обычно включает позже)
    pub movable_on_spawn: bool,
}

impl CharacterConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: CharacterConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Проверка диапазонов: max > 0, периоды > 0, costs >= 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("stamina.max", self.stamina.max),
            ("stamina.regen_period", self.stamina.regen_period),
            ("posture.max", self.posture.max),
            ("posture.regen_period", self.posture.regen_period),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be > 0 (got {value})")));
            }
        }

        let non_negative = [
            ("costs.sprint", self.costs.sprint),
            ("costs.jump", self.costs.jump),
            ("costs.kick", self.costs.kick),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be >= 0 (got {value})")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_character_constants() {
        let config = CharacterConfig::default();
        assert_eq!(config.stamina.max, 100.0);
        assert_eq!(config.stamina.recovery, 5.0);
        assert_eq!(config.stamina.crouch_recovery, 10.0);
        assert_eq!(config.stamina.regen_period, 1.0);
        assert_eq!(config.posture.recovery, 3.0);
        assert_eq!(config.posture.regen_period, 2.0);
        assert_eq!(config.costs.sprint, 10.0);
        assert_eq!(config.costs.jump, 15.0);
        assert_eq!(config.costs.kick, 20.0);
        assert_eq!(config.speeds.unarmed.sprint, 600.0);
        assert!(!config.movable_on_spawn);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CharacterConfig::from_toml_str(
            r#"
            movable_on_spawn = true

            [costs]
            jump = 25.0
            "#,
        )
        .unwrap();

        assert!(config.movable_on_spawn);
        assert_eq!(config.costs.jump, 25.0);
        assert_eq!(config.costs.kick, 20.0); // default
        assert_eq!(config.stamina, StaminaConfig::default());
    }

    #[test]
    fn test_invalid_period_rejected() {
        let result = CharacterConfig::from_toml_str(
            r#"
            [posture]
            regen_period = 0.0
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let result = CharacterConfig::from_toml_str(
            r#"
            [costs]
            kick = -1.0
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = CharacterConfig::from_toml_str("stamina = [");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
