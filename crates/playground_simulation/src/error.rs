//! Ошибки симуляции
//!
//! Gameplay операции (jump, kick, sprint...) ошибок НЕ возвращают: отказ = тихий no-op.
//! Ошибки есть только у активации (fatal preconditions) и у загрузки конфига.

use bevy::prelude::Entity;
use thiserror::Error;

/// Нарушение preconditions при активации персонажа
///
/// Caller обязан считать это фатальным: активация прервана, таймеры не зарегистрированы.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActivationError {
    #[error("Unable to get controller reference for entity {0:?}")]
    MissingController(Entity),

    #[error("Unable to get input subsystem reference")]
    MissingInputSubsystem,

    #[error("Entity {0:?} is not a character (missing stats/action components)")]
    MissingCharacter(Entity),

    #[error("Attack component not found on entity {0:?}")]
    MissingAttackComponent(Entity),
}

/// Ошибка загрузки/валидации `CharacterConfig`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse character config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to read character config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid character config: {0}")]
    Invalid(String),
}
