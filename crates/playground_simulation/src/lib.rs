//! Playground Simulation Core
//!
//! Headless ECS-симуляция персонажа игрока на Bevy 0.16:
//! stamina/posture ресурсы, gating действий (move/look/jump/crouch/kick/sprint),
//! input bindings.
//!
//! Разделение ответственности:
//! - ECS = state + правила (ресурсы, gates, costs, regen)
//! - Host engine = физика, анимации, рендер (читает intents, пишет Falling/Velocity/AttackExecution)

use bevy::prelude::*;

pub mod character;
pub mod combat;
pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod logger;

// Re-export базовых типов для удобства
pub use character::{
    activate_character, deactivate_character, spawn_character, Character, CharacterAction,
    CharacterActive, CharacterInput, CharacterPlugin, CharacterSet, CharacterStatus, CrouchChanged,
    JumpIntent, StatUpdated,
};
pub use combat::{AttackExecution, ExecutionSource, KickFinished, KickTriggered};
pub use components::*;
pub use config::CharacterConfig;
pub use error::{ActivationError, ConfigError};
pub use input::{InputPlugin, InputSubsystem, InputValue, RawInput, TriggerEvent};
pub use logger::{log, log_error, log_info, log_warning, LogLevel, LogPrinter};

/// Частота host кадров headless runner (и fixed timestep по умолчанию)
pub const SIMULATION_HZ: f64 = 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Конфиг по умолчанию (host может вставить свой ДО плагина)
            .init_resource::<CharacterConfig>()
            .add_plugins((CharacterPlugin, InputPlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции (без SimulationPlugin)
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ));

    app
}

/// Snapshot компонентов для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
