//! Character Resource & Action Controller
//!
//! ECS ответственность:
//! - Ресурсы: Stamina, Posture (clamp + periodic regen)
//! - Gating: move/look/jump/crouch/kick/sprint
//! - Per-frame stamina costs
//! - Events: StatUpdated (listeners), JumpIntent/CrouchChanged/KickTriggered (host)
//!
//! Host ответственность:
//! - Физика тела (применяет MovementInput, MovementSpeed, JumpIntent; ставит Falling)
//! - Анимации (KickTriggered → montage → KickFinished)
//! - Attack компонент (AttackExecution::executing)

use bevy::prelude::*;

pub mod actions;
pub mod events;
pub mod frame;
pub mod lifecycle;
pub mod regen;
pub mod status;

#[cfg(test)]
mod actions_tests;

pub use actions::{apply_character_input, ActionContext, JumpOutcome};
pub use events::{CharacterAction, CharacterInput, CrouchChanged, JumpIntent, StatUpdated};
pub use frame::{apply_frame_costs, settle_frame};
pub use lifecycle::{
    activate_character, deactivate_character, spawn_character, Character, CharacterActive,
};
pub use regen::{tick_regen_timers, RegenTimers};
pub use status::CharacterStatus;

use crate::combat::{self, KickFinished, KickTriggered};

/// Порядок систем персонажа внутри host кадра (Update)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CharacterSet {
    /// Raw input → CharacterInput
    Input,
    /// Gating + intents
    Actions,
    /// Stamina за jump/sprint, сброс per-frame флагов
    FrameCosts,
    /// Regen таймеры
    Regen,
}

/// Character Plugin
///
/// Регистрирует character системы в `Update`: один проход на host кадр,
/// stamina drain и regen масштабируются по `Time` delta кадра.
///
/// Порядок выполнения:
/// 1. Input - dispatch_raw_input (InputPlugin)
/// 2. Actions - apply_character_input, reset_finished_kicks
/// 3. FrameCosts - apply_frame_costs
/// 4. Regen - tick_regen_timers
pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CharacterInput>()
            .add_event::<StatUpdated>()
            .add_event::<JumpIntent>()
            .add_event::<CrouchChanged>()
            .add_event::<KickTriggered>()
            .add_event::<KickFinished>();

        app.configure_sets(
            Update,
            (
                CharacterSet::Input,
                CharacterSet::Actions,
                CharacterSet::FrameCosts,
                CharacterSet::Regen,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                (apply_character_input, combat::reset_finished_kicks)
                    .chain()
                    .in_set(CharacterSet::Actions),
                apply_frame_costs.in_set(CharacterSet::FrameCosts),
                tick_regen_timers.in_set(CharacterSet::Regen),
            ),
        );
    }
}
