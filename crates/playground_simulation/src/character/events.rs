//! Character events
//!
//! Input (host → ядро): `CharacterInput`
//! Notifications (ядро → listeners): `StatUpdated`
//! Intents (ядро → host): `JumpIntent`, `CrouchChanged`

use bevy::prelude::*;

use crate::components::{StatChange, StatKind};

/// Действие персонажа после резолва input bindings
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CharacterAction {
    /// Two-axis movement (x = right, y = forward)
    Move(Vec2),
    /// Two-axis look (x = yaw, y = pitch)
    Look(Vec2),
    Jump,
    Crouch,
    Kick,
    /// Sprint held (true) / released (false)
    Sprint(bool),
}

/// Event: input для конкретного персонажа
///
/// Очередь intents - читается ровно один раз за simulation step
/// (`character::actions::apply_character_input`).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CharacterInput {
    pub entity: Entity,
    pub action: CharacterAction,
}

impl CharacterInput {
    pub fn new(entity: Entity, action: CharacterAction) -> Self {
        Self { entity, action }
    }
}

/// Event: regen tick изменил значение ресурса
///
/// Эмитится только если clamped значение реально изменилось.
/// Порядок доставки между listeners не гарантирован.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct StatUpdated {
    pub entity: Entity,
    pub stat: StatKind,
    pub old: f32,
    pub new: f32,
    pub max: f32,
}

impl StatUpdated {
    pub fn from_change(entity: Entity, stat: StatKind, change: StatChange) -> Self {
        Self {
            entity,
            stat,
            old: change.old,
            new: change.new,
            max: change.max,
        }
    }
}

/// Event: намерение прыгнуть (host применяет jump impulse)
///
/// Стоимость уже проверена, stamina спишется в конце tick.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpIntent {
    pub entity: Entity,
}

/// Event: персонаж сел / встал (host меняет capsule, анимацию)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrouchChanged {
    pub entity: Entity,
    pub crouching: bool,
}
