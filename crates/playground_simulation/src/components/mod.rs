//! ECS Components персонажа
//!
//! Организация по доменам:
//! - stats: ресурсы (ResourcePool, Stamina, Posture)
//! - action: флаги действий, стойка, tuning (ActionState, WeaponStance, CharacterTuning)
//! - movement: скорость и intents для host (MovementSpeed, MovementInput, ControlRotation, Falling, Velocity)
//! - player: controller marker (Player)

pub mod action;
pub mod movement;
pub mod player;
pub mod stats;

// Re-exports для удобного импорта
pub use action::*;
pub use movement::*;
pub use player::*;
pub use stats::*;
