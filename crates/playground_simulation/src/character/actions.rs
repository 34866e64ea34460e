//! Action gating state machine
//!
//! Gates (все отказы - тихий no-op, без событий):
//! - Move:   controller + can_move
//! - Look:   controller + !executing
//! - Jump:   action привязан, stamina - jump_cost > 0, !executing, на земле
//! - Crouch: !(jumped || falling), !executing; отменяет sprint
//! - Kick:   stamina - kick_cost > 0, !has_kicked; cost списывается сразу
//! - Sprint: вето если (running && stamina <= 0) || stamina - sprint_cost <= 0 || crouching
//!
//! Stamina за jump/sprint НЕ списывается здесь - только флаги кадра,
//! списание в `frame::apply_frame_costs` (не зависит от частоты input events).

use bevy::prelude::*;

use super::events::{CharacterAction, CharacterInput, CrouchChanged, JumpIntent};
use super::lifecycle::CharacterActive;
use crate::combat::{self, AttackExecution, AttackLink, KickTriggered};
use crate::components::{
    ActionState, CharacterTuning, ControlRotation, Falling, MovementInput, MovementSpeed, Player,
    Stamina, WeaponStance,
};
use crate::input::{action_names, InputSubsystem};
use crate::logger::{self, LogLevel};

/// Результат успешного jump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpOutcome {
    /// Пришлось встать перед прыжком
    pub uncrouched: bool,
}

/// Всё состояние одного персонажа, нужное для gating
///
/// Собирается системой из query на время обработки одного input.
/// Unit тесты собирают его из локальных значений.
pub struct ActionContext<'a> {
    pub stamina: &'a mut Stamina,
    pub state: &'a mut ActionState,
    pub speed: &'a mut MovementSpeed,
    pub movement: &'a mut MovementInput,
    pub rotation: &'a mut ControlRotation,
    pub tuning: &'a CharacterTuning,
    pub stance: WeaponStance,
    pub controller_attached: bool,
    /// Jump action есть в input bindings персонажа
    pub jump_bound: bool,
    pub executing: bool,
    pub falling: bool,
}

impl ActionContext<'_> {
    /// Movement impulses; при sprint помечает кадр для stamina drain
    pub fn apply_move(&mut self, input: Vec2) -> bool {
        if !self.controller_attached || !self.state.can_move {
            return false;
        }

        self.movement.add(input.y, input.x);

        if self.state.is_running {
            self.state.has_run_this_frame = true;
        }
        true
    }

    /// Поворот контроллера; запрещён во время locked attack анимации
    pub fn apply_look(&mut self, input: Vec2) -> bool {
        if !self.controller_attached || self.executing {
            return false;
        }

        self.rotation.add_input(input.x, input.y);
        true
    }

    /// Host-side "может прыгнуть" (на земле)
    pub fn can_jump(&self) -> bool {
        !self.falling
    }

    pub fn jump(&mut self) -> Option<JumpOutcome> {
        if !self.jump_bound
            || !self.stamina.exceeds(self.tuning.jump_cost)
            || self.executing
            || !self.can_jump()
        {
            return None;
        }

        let uncrouched = self.state.is_crouching;
        if uncrouched {
            self.state.is_crouching = false;
        }

        self.state.has_jumped_this_frame = true;
        Some(JumpOutcome { uncrouched })
    }

    /// Toggle crouch. Возвращает новое состояние
    pub fn crouch(&mut self) -> Option<bool> {
        if self.state.has_jumped_or_falling(self.falling) || self.executing {
            return None;
        }

        self.set_sprint(false);
        self.state.is_crouching = !self.state.is_crouching;
        Some(self.state.is_crouching)
    }

    pub fn kick(&mut self) -> bool {
        if !self.stamina.exceeds(self.tuning.kick_cost) || self.state.has_kicked {
            return false;
        }

        self.stamina.reduce(self.tuning.kick_cost);
        self.state.has_kicked = true;
        true
    }

    /// Effective sprint = запрос AND NOT вето; сразу выставляет max walk speed
    pub fn set_sprint(&mut self, want_sprint: bool) -> bool {
        let exhausted = self.state.is_running && self.stamina.get() <= 0.0;
        let cannot_afford = !self.stamina.exceeds(self.tuning.sprint_cost);
        let vetoed = exhausted || cannot_afford || self.state.is_crouching;

        self.state.is_running = want_sprint && !vetoed;
        self.speed.speed = self.tuning.speed_for(self.stance, self.state.is_running);
        self.state.is_running
    }
}

type CharacterQueryData = (
    &'static mut Stamina,
    &'static mut ActionState,
    &'static mut MovementSpeed,
    &'static mut MovementInput,
    &'static mut ControlRotation,
    &'static CharacterTuning,
    Option<&'static WeaponStance>,
    Has<Player>,
    Has<Falling>,
    Option<&'static AttackLink>,
);

fn log_denied(action: &str, entity: Entity) {
    if logger::enabled(LogLevel::Debug) {
        logger::log(&format!("{} denied: {:?}", action, entity));
    }
}

/// System: `CharacterInput` → gating → intents/events
///
/// Input для неактивных (или despawned) персонажей отбрасывается.
pub fn apply_character_input(
    mut inputs: EventReader<CharacterInput>,
    mut characters: Query<CharacterQueryData, With<CharacterActive>>,
    attacks: Query<&AttackExecution>,
    subsystem: Option<Res<InputSubsystem>>,
    mut jump_events: EventWriter<JumpIntent>,
    mut crouch_events: EventWriter<CrouchChanged>,
    mut kick_events: EventWriter<KickTriggered>,
) {
    for input in inputs.read() {
        let Ok((
            mut stamina,
            mut state,
            mut speed,
            mut movement,
            mut rotation,
            tuning,
            stance,
            controller_attached,
            falling,
            attack_link,
        )) = characters.get_mut(input.entity)
        else {
            continue;
        };

        let entity = input.entity;
        let mut ctx = ActionContext {
            stamina: &mut stamina,
            state: &mut state,
            speed: &mut speed,
            movement: &mut movement,
            rotation: &mut rotation,
            tuning,
            stance: stance.copied().unwrap_or_default(),
            controller_attached,
            jump_bound: subsystem
                .as_ref()
                .is_some_and(|subsystem| subsystem.is_bound(entity, action_names::JUMP)),
            executing: combat::is_executing(attack_link, &attacks),
            falling,
        };

        match input.action {
            CharacterAction::Move(axis) => {
                ctx.apply_move(axis);
            }
            CharacterAction::Look(axis) => {
                ctx.apply_look(axis);
            }
            CharacterAction::Jump => match ctx.jump() {
                Some(outcome) => {
                    if outcome.uncrouched {
                        crouch_events.write(CrouchChanged { entity, crouching: false });
                    }
                    jump_events.write(JumpIntent { entity });
                }
                None => log_denied("Jump", entity),
            },
            CharacterAction::Crouch => match ctx.crouch() {
                Some(crouching) => {
                    crouch_events.write(CrouchChanged { entity, crouching });
                }
                None => log_denied("Crouch", entity),
            },
            CharacterAction::Kick => {
                if ctx.kick() {
                    kick_events.write(KickTriggered { entity });
                } else {
                    log_denied("Kick", entity);
                }
            }
            CharacterAction::Sprint(want) => {
                let running = ctx.set_sprint(want);
                if want && !running {
                    log_denied("Sprint", entity);
                }
            }
        }
    }
}
