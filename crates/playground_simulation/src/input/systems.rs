//! Raw input → CharacterInput dispatch

use bevy::prelude::*;

use super::bindings::{BoundHandler, InputSubsystem, InputValue, TriggerEvent};
use crate::character::{CharacterAction, CharacterInput};
use crate::logger;

/// Event: сырое input событие от host (имя action + фаза + значение)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct RawInput {
    pub entity: Entity,
    pub action: String,
    pub trigger: TriggerEvent,
    pub value: InputValue,
}

impl RawInput {
    pub fn triggered(entity: Entity, action: &str, value: InputValue) -> Self {
        Self {
            entity,
            action: action.to_string(),
            trigger: TriggerEvent::Triggered,
            value,
        }
    }

    pub fn completed(entity: Entity, action: &str) -> Self {
        Self {
            entity,
            action: action.to_string(),
            trigger: TriggerEvent::Completed,
            value: InputValue::Digital(false),
        }
    }
}

/// Handler + value → действие. Axis handlers требуют `Axis2D`
pub fn to_character_action(handler: BoundHandler, value: InputValue) -> Option<CharacterAction> {
    match (handler, value) {
        (BoundHandler::Move, InputValue::Axis2D(axis)) => Some(CharacterAction::Move(axis)),
        (BoundHandler::Look, InputValue::Axis2D(axis)) => Some(CharacterAction::Look(axis)),
        (BoundHandler::Move | BoundHandler::Look, InputValue::Digital(_)) => None,
        (BoundHandler::Jump, _) => Some(CharacterAction::Jump),
        (BoundHandler::Crouch, _) => Some(CharacterAction::Crouch),
        (BoundHandler::Kick, _) => Some(CharacterAction::Kick),
        (BoundHandler::Sprint(want), _) => Some(CharacterAction::Sprint(want)),
    }
}

/// System: резолвит `RawInput` через bindings, unbound input отбрасывается
pub fn dispatch_raw_input(
    mut raw_events: EventReader<RawInput>,
    mut character_inputs: EventWriter<CharacterInput>,
    subsystem: Option<Res<InputSubsystem>>,
) {
    let Some(subsystem) = subsystem else {
        // Без subsystem bindings не существуют - просто опустошаем очередь
        raw_events.clear();
        return;
    };

    for raw in raw_events.read() {
        let Some(handler) = subsystem.resolve(raw.entity, &raw.action, raw.trigger) else {
            continue;
        };

        match to_character_action(handler, raw.value) {
            Some(action) => {
                character_inputs.write(CharacterInput::new(raw.entity, action));
            }
            None => logger::log_warning(&format!(
                "Input '{}' bound to {:?} got incompatible value {:?}",
                raw.action, handler, raw.value
            )),
        }
    }
}
