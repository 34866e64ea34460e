//! Input mapping contexts и bindings
//!
//! Host input subsystem (`InputSubsystem`) держит стек mapping contexts.
//! При активации персонажа все прежние mappings очищаются и ставится один
//! context с priority 0 (`character_context`).

use bevy::prelude::*;

/// Имена input actions (как их называет host input map)
pub mod action_names {
    pub const MOVEMENT: &str = "Movement";
    pub const JUMP: &str = "Jump";
    pub const CAMERA_MOVEMENT: &str = "CameraMovement";
    pub const CROUCH: &str = "Crouch";
    pub const KICK: &str = "Kick";
    pub const SPRINT: &str = "Sprint";
}

/// Фаза input события
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    /// Каждый кадр пока действие активно
    Triggered,
    /// Отпустили
    Completed,
}

/// Значение input action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputValue {
    Digital(bool),
    Axis2D(Vec2),
}

/// Какой handler персонажа вызывать
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundHandler {
    Move,
    Look,
    Jump,
    Crouch,
    Kick,
    /// Sprint с фиксированным аргументом (Triggered → true, Completed → false)
    Sprint(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionBinding {
    pub action: String,
    pub trigger: TriggerEvent,
    pub handler: BoundHandler,
}

impl ActionBinding {
    pub fn new(action: &str, trigger: TriggerEvent, handler: BoundHandler) -> Self {
        Self {
            action: action.to_string(),
            trigger,
            handler,
        }
    }
}

/// Набор bindings одного владельца с приоритетом
#[derive(Debug, Clone, PartialEq)]
pub struct InputMappingContext {
    pub name: String,
    pub owner: Entity,
    pub priority: i32,
    pub bindings: Vec<ActionBinding>,
}

impl InputMappingContext {
    pub fn handler_for(&self, action: &str, trigger: TriggerEvent) -> Option<BoundHandler> {
        self.bindings
            .iter()
            .find(|binding| binding.action == action && binding.trigger == trigger)
            .map(|binding| binding.handler)
    }

    pub fn binds(&self, action: &str) -> bool {
        self.bindings.iter().any(|binding| binding.action == action)
    }
}

/// Стандартные bindings персонажа
pub fn character_context(owner: Entity) -> InputMappingContext {
    use action_names::*;

    InputMappingContext {
        name: "CharacterDefault".to_string(),
        owner,
        priority: 0,
        bindings: vec![
            ActionBinding::new(MOVEMENT, TriggerEvent::Triggered, BoundHandler::Move),
            ActionBinding::new(JUMP, TriggerEvent::Triggered, BoundHandler::Jump),
            ActionBinding::new(CAMERA_MOVEMENT, TriggerEvent::Triggered, BoundHandler::Look),
            ActionBinding::new(CROUCH, TriggerEvent::Triggered, BoundHandler::Crouch),
            ActionBinding::new(KICK, TriggerEvent::Triggered, BoundHandler::Kick),
            ActionBinding::new(SPRINT, TriggerEvent::Triggered, BoundHandler::Sprint(true)),
            ActionBinding::new(SPRINT, TriggerEvent::Completed, BoundHandler::Sprint(false)),
        ],
    }
}

/// Host input subsystem: стек mapping contexts
///
/// Contexts отсортированы по priority (старший первым); при равном
/// priority выигрывает добавленный раньше.
#[derive(Resource, Debug, Default)]
pub struct InputSubsystem {
    contexts: Vec<InputMappingContext>,
}

impl InputSubsystem {
    pub fn clear_all_mappings(&mut self) {
        self.contexts.clear();
    }

    pub fn add_mapping_context(&mut self, context: InputMappingContext) {
        // Тот же context (name + owner) заменяется
        self.contexts
            .retain(|existing| !(existing.name == context.name && existing.owner == context.owner));
        self.contexts.push(context);
        self.contexts.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    pub fn remove_contexts_for(&mut self, owner: Entity) {
        self.contexts.retain(|context| context.owner != owner);
    }

    pub fn contexts(&self) -> &[InputMappingContext] {
        &self.contexts
    }

    /// Handler для (owner, action, trigger) из старшего context
    pub fn resolve(&self, owner: Entity, action: &str, trigger: TriggerEvent) -> Option<BoundHandler> {
        self.contexts
            .iter()
            .filter(|context| context.owner == owner)
            .find_map(|context| context.handler_for(action, trigger))
    }

    /// Action привязан хоть в одном context владельца ("action enabled")
    pub fn is_bound(&self, owner: Entity, action: &str) -> bool {
        self.contexts
            .iter()
            .any(|context| context.owner == owner && context.binds(action))
    }
}
