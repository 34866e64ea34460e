//! Combat collaborator boundary
//!
//! Ядро персонажа НЕ владеет атаками. Оно:
//! - читает "is executing" у attack компонента (через `ExecutionSource`)
//! - эмитит `KickTriggered` (анимация/hitbox - ответственность collaborator)
//! - получает `KickFinished` и сбрасывает `ActionState::has_kicked`
//!
//! Attack компонент ищется ОДИН раз при активации и кешируется в `AttackLink`.

use bevy::prelude::*;

use crate::components::ActionState;
use crate::logger;

/// Capability: "сейчас идёт locked attack анимация"
///
/// Пока true - jump/crouch/look запрещены.
pub trait ExecutionSource {
    fn is_executing(&self) -> bool;
}

/// Состояние attack компонента (пишет combat collaborator)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AttackExecution {
    pub executing: bool,
}

impl ExecutionSource for AttackExecution {
    fn is_executing(&self) -> bool {
        self.executing
    }
}

/// Нет attack компонента → ничего не исполняется
impl<T: ExecutionSource> ExecutionSource for Option<&T> {
    fn is_executing(&self) -> bool {
        self.is_some_and(|source| source.is_executing())
    }
}

/// Кешированная ссылка на entity с `AttackExecution` (ставится при активации)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackLink {
    pub attack_entity: Entity,
}

/// Event: запустить kick (animation montage + hit detection у collaborator)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KickTriggered {
    pub entity: Entity,
}

/// Event: kick анимация закончилась (от collaborator)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KickFinished {
    pub entity: Entity,
}

/// System: `KickFinished` → `has_kicked = false`
pub fn reset_finished_kicks(
    mut finished: EventReader<KickFinished>,
    mut actions: Query<&mut ActionState>,
) {
    for event in finished.read() {
        if let Ok(mut state) = actions.get_mut(event.entity) {
            state.set_kicked(false);
            logger::log(&format!("Kick finished: {:?}", event.entity));
        }
    }
}

/// Читает executing через кешированный `AttackLink`
///
/// Link на despawned entity → считаем что не исполняется.
pub fn is_executing(link: Option<&AttackLink>, attacks: &Query<&AttackExecution>) -> bool {
    link.and_then(|link| attacks.get(link.attack_entity).ok())
        .is_executing()
}
