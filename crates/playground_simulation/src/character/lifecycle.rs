//! Character spawn / activation / deactivation
//!
//! Активация (аналог begin play + input setup):
//! 1. fatal preconditions: персонаж, controller (`Player`), `InputSubsystem`, attack компонент
//! 2. input: clear all mappings → character context priority 0
//! 3. кеш `AttackLink`
//! 4. `RegenTimers` + `CharacterActive`
//!
//! Деактивация убирает таймеры - regen больше не вызывается.

use bevy::prelude::*;

use super::regen::RegenTimers;
use crate::combat::{AttackExecution, AttackLink};
use crate::components::{
    ActionState, CharacterTuning, ControlRotation, MovementInput, MovementSpeed, Posture, Stamina,
    WeaponStance,
};
use crate::config::CharacterConfig;
use crate::error::ActivationError;
use crate::input::{character_context, InputSubsystem};
use crate::logger;

/// Персонаж игрока
///
/// Автоматически добавляет stats/action/movement компоненты через Required Components.
/// Для значений из конфига используй `Character::bundle`.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(
    Stamina,
    Posture,
    ActionState,
    MovementSpeed,
    MovementInput,
    ControlRotation,
    CharacterTuning,
    WeaponStance,
    AttackExecution
)]
pub struct Character;

impl Character {
    /// Компоненты персонажа, зафиксированные из конфига
    pub fn bundle(config: &CharacterConfig) -> impl Bundle {
        let tuning = CharacterTuning::from_config(config);
        let stance = WeaponStance::default();
        (
            Character,
            Stamina::from_config(&config.stamina),
            Posture::from_config(&config.posture),
            ActionState::movable(config.movable_on_spawn),
            MovementSpeed {
                speed: tuning.speed_for(stance, false),
            },
            stance,
            tuning,
        )
    }
}

/// Marker: персонаж активирован (input обрабатывается, frame costs считаются)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CharacterActive;

/// Spawn персонажа из `CharacterConfig` resource (или defaults)
pub fn spawn_character(world: &mut World) -> Entity {
    let config = world.get_resource::<CharacterConfig>().cloned().unwrap_or_default();
    world.spawn(Character::bundle(&config)).id()
}

/// Attack компонент: на самом персонаже, иначе первый child с `AttackExecution`
fn find_attack_component(world: &World, entity: Entity) -> Option<Entity> {
    if world.get::<AttackExecution>(entity).is_some() {
        return Some(entity);
    }

    let children: &[Entity] = world.get::<Children>(entity)?;
    children
        .iter()
        .copied()
        .find(|child| world.get::<AttackExecution>(*child).is_some())
}

/// Активировать персонажа. `Err` = fatal precondition, ничего не зарегистрировано
pub fn activate_character(world: &mut World, entity: Entity) -> Result<(), ActivationError> {
    let result = try_activate(world, entity);
    if let Err(error) = &result {
        logger::log_error(&format!("Character activation aborted: {}", error));
    }
    result
}

fn try_activate(world: &mut World, entity: Entity) -> Result<(), ActivationError> {
    let entity_ref = world
        .get_entity(entity)
        .map_err(|_| ActivationError::MissingCharacter(entity))?;

    if !entity_ref.contains::<Character>() {
        return Err(ActivationError::MissingCharacter(entity));
    }
    let tuning = *entity_ref
        .get::<CharacterTuning>()
        .ok_or(ActivationError::MissingCharacter(entity))?;

    if !entity_ref.contains::<crate::components::Player>() {
        return Err(ActivationError::MissingController(entity));
    }

    if !world.contains_resource::<InputSubsystem>() {
        return Err(ActivationError::MissingInputSubsystem);
    }

    let attack_entity =
        find_attack_component(world, entity).ok_or(ActivationError::MissingAttackComponent(entity))?;

    // Все preconditions выполнены - дальше только регистрация
    let mut subsystem = world.resource_mut::<InputSubsystem>();
    subsystem.clear_all_mappings();
    subsystem.add_mapping_context(character_context(entity));

    world.entity_mut(entity).insert((
        CharacterActive,
        AttackLink { attack_entity },
        RegenTimers::new(tuning.stamina_regen_period, tuning.posture_regen_period),
    ));

    logger::log_info(&format!(
        "Character {:?} activated (stamina regen every {}s, posture regen every {}s)",
        entity, tuning.stamina_regen_period, tuning.posture_regen_period
    ));
    Ok(())
}

/// Деактивировать персонажа: таймеры и bindings снимаются
///
/// Возвращает false если персонаж не был активен (или уже despawned).
pub fn deactivate_character(world: &mut World, entity: Entity) -> bool {
    let Ok(mut entity_mut) = world.get_entity_mut(entity) else {
        return false;
    };

    let was_active = entity_mut.contains::<CharacterActive>();
    entity_mut.remove::<(CharacterActive, AttackLink, RegenTimers)>();

    if let Some(mut state) = entity_mut.get_mut::<ActionState>() {
        state.clear_frame_flags();
    }

    if let Some(mut subsystem) = world.get_resource_mut::<InputSubsystem>() {
        subsystem.remove_contexts_for(entity);
    }

    if was_active {
        logger::log_info(&format!("Character {:?} deactivated, regen timers cleared", entity));
    }
    was_active
}
