//! Tests for action gating.

#[cfg(test)]
mod tests {
    use bevy::prelude::Vec2;

    use crate::character::actions::{ActionContext, JumpOutcome};
    use crate::components::{
        ActionState, CharacterTuning, ControlRotation, MovementInput, MovementSpeed, Stamina,
        WeaponStance,
    };

    /// Владеет состоянием, ctx() одалживает его как система
    struct Fixture {
        stamina: Stamina,
        state: ActionState,
        speed: MovementSpeed,
        movement: MovementInput,
        rotation: ControlRotation,
        tuning: CharacterTuning,
        stance: WeaponStance,
        controller_attached: bool,
        jump_bound: bool,
        executing: bool,
        falling: bool,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                stamina: Stamina::default(),
                state: ActionState::movable(true),
                speed: MovementSpeed::default(),
                movement: MovementInput::default(),
                rotation: ControlRotation::default(),
                tuning: CharacterTuning::default(),
                stance: WeaponStance::Unarmed,
                controller_attached: true,
                jump_bound: true,
                executing: false,
                falling: false,
            }
        }

        fn with_stamina(mut self, value: f32) -> Self {
            self.stamina.set(value);
            self
        }

        fn ctx(&mut self) -> ActionContext<'_> {
            ActionContext {
                stamina: &mut self.stamina,
                state: &mut self.state,
                speed: &mut self.speed,
                movement: &mut self.movement,
                rotation: &mut self.rotation,
                tuning: &self.tuning,
                stance: self.stance,
                controller_attached: self.controller_attached,
                jump_bound: self.jump_bound,
                executing: self.executing,
                falling: self.falling,
            }
        }
    }

    // ---- Sprint ----

    #[test]
    fn test_sprint_sets_sprint_speed() {
        let mut f = Fixture::new();

        assert!(f.ctx().set_sprint(true));
        assert!(f.state.is_running);
        assert_eq!(f.speed.speed, 600.0);

        assert!(!f.ctx().set_sprint(false));
        assert_eq!(f.speed.speed, 300.0);
    }

    #[test]
    fn test_sprint_rejected_while_crouching() {
        let mut f = Fixture::new();
        f.state.is_crouching = true;

        assert!(!f.ctx().set_sprint(true));
        assert!(!f.state.is_running);
        assert_eq!(f.speed.speed, 300.0); // walk speed
    }

    #[test]
    fn test_sprint_rejected_when_cost_not_covered() {
        let mut f = Fixture::new().with_stamina(10.0); // 10 - 10 = 0 → вето
        assert!(!f.ctx().set_sprint(true));

        let mut f = Fixture::new().with_stamina(10.5);
        assert!(f.ctx().set_sprint(true));
    }

    #[test]
    fn test_running_with_empty_stamina_stops() {
        let mut f = Fixture::new();
        f.ctx().set_sprint(true);

        f.stamina.set(0.0);
        assert!(!f.ctx().set_sprint(true));
        assert!(!f.state.is_running);
    }

    #[test]
    fn test_sprint_uses_stance_speeds() {
        let mut f = Fixture::new();
        f.stance = WeaponStance::Crossbow;

        f.ctx().set_sprint(true);
        assert_eq!(f.speed.speed, 300.0);

        f.ctx().set_sprint(false);
        assert_eq!(f.speed.speed, 150.0);
    }

    // ---- Move / Look ----

    #[test]
    fn test_move_requires_controller_and_can_move() {
        let mut f = Fixture::new();
        f.controller_attached = false;
        assert!(!f.ctx().apply_move(Vec2::new(0.0, 1.0)));

        let mut f = Fixture::new();
        f.state.can_move = false;
        assert!(!f.ctx().apply_move(Vec2::new(0.0, 1.0)));
        assert_eq!(f.movement.pending, Vec2::ZERO);
    }

    #[test]
    fn test_move_accumulates_impulses() {
        let mut f = Fixture::new();
        assert!(f.ctx().apply_move(Vec2::new(0.5, 1.0)));
        assert_eq!(f.movement.pending, Vec2::new(0.5, 1.0));
        assert!(!f.state.has_run_this_frame); // не бежим
    }

    #[test]
    fn test_move_while_sprinting_marks_frame() {
        let mut f = Fixture::new();
        f.ctx().set_sprint(true);
        f.ctx().apply_move(Vec2::new(0.0, 1.0));

        assert!(f.state.has_run_this_frame);
        // Stamina списывается только в конце tick
        assert_eq!(f.stamina.get(), 100.0);
    }

    #[test]
    fn test_look_blocked_while_executing() {
        let mut f = Fixture::new();
        f.executing = true;

        assert!(!f.ctx().apply_look(Vec2::new(3.0, 1.0)));
        assert_eq!(f.rotation, ControlRotation::default());
    }

    #[test]
    fn test_look_rotates_controller() {
        let mut f = Fixture::new();
        assert!(f.ctx().apply_look(Vec2::new(3.0, -1.0)));
        assert_eq!(f.rotation, ControlRotation { yaw: 3.0, pitch: -1.0 });
    }

    // ---- Jump ----

    #[test]
    fn test_jump_marks_frame_without_spending() {
        let mut f = Fixture::new();
        assert_eq!(f.ctx().jump(), Some(JumpOutcome { uncrouched: false }));
        assert!(f.state.has_jumped_this_frame);
        assert_eq!(f.stamina.get(), 100.0);
    }

    #[test]
    fn test_jump_requires_stamina_above_cost() {
        let mut f = Fixture::new().with_stamina(15.0);
        assert_eq!(f.ctx().jump(), None);
        assert!(!f.state.has_jumped_this_frame);
    }

    #[test]
    fn test_jump_denied_while_executing_or_falling() {
        let mut f = Fixture::new();
        f.executing = true;
        assert_eq!(f.ctx().jump(), None);

        let mut f = Fixture::new();
        f.falling = true;
        assert_eq!(f.ctx().jump(), None);
    }

    #[test]
    fn test_jump_requires_bound_action() {
        let mut f = Fixture::new();
        f.jump_bound = false;
        f.state.is_crouching = true;

        assert_eq!(f.ctx().jump(), None);
        assert!(f.state.is_crouching, "Denied jump не должен вставать");
        assert!(!f.state.has_jumped_this_frame);
    }

    #[test]
    fn test_jump_uncrouches_first() {
        let mut f = Fixture::new();
        f.state.is_crouching = true;

        assert_eq!(f.ctx().jump(), Some(JumpOutcome { uncrouched: true }));
        assert!(!f.state.is_crouching);
    }

    #[test]
    fn test_jump_then_look_while_executing() {
        let mut f = Fixture::new();
        f.executing = true;

        // Jump и look проверяются независимо - оба отклонены
        assert_eq!(f.ctx().jump(), None);
        assert!(!f.ctx().apply_look(Vec2::new(1.0, 1.0)));
        assert_eq!(f.rotation, ControlRotation::default());
    }

    // ---- Crouch ----

    #[test]
    fn test_crouch_toggles_and_cancels_sprint() {
        let mut f = Fixture::new();
        f.ctx().set_sprint(true);

        assert_eq!(f.ctx().crouch(), Some(true));
        assert!(f.state.is_crouching);
        assert!(!f.state.is_running);
        assert_eq!(f.speed.speed, 300.0);

        assert_eq!(f.ctx().crouch(), Some(false));
        assert!(!f.state.is_crouching);
    }

    #[test]
    fn test_crouch_denied_airborne_or_executing() {
        let mut f = Fixture::new();
        f.falling = true;
        assert_eq!(f.ctx().crouch(), None);

        let mut f = Fixture::new();
        f.ctx().jump();
        assert_eq!(f.ctx().crouch(), None); // прыгнул в этом кадре

        let mut f = Fixture::new();
        f.executing = true;
        assert_eq!(f.ctx().crouch(), None);
        assert!(!f.state.is_crouching);
    }

    // ---- Kick ----

    #[test]
    fn test_kick_below_cost_is_noop() {
        let mut f = Fixture::new().with_stamina(15.0);

        assert!(!f.ctx().kick());
        assert_eq!(f.stamina.get(), 15.0);
        assert!(!f.state.has_kicked);
    }

    #[test]
    fn test_kick_spends_immediately() {
        let mut f = Fixture::new();

        assert!(f.ctx().kick());
        assert_eq!(f.stamina.get(), 80.0);
        assert!(f.state.has_kicked);
    }

    #[test]
    fn test_kick_blocked_until_reset() {
        let mut f = Fixture::new();
        assert!(f.ctx().kick());
        assert!(!f.ctx().kick()); // mid-kick
        assert_eq!(f.stamina.get(), 80.0);

        f.state.set_kicked(false);
        assert!(f.ctx().kick());
        assert_eq!(f.stamina.get(), 60.0);
    }

    #[test]
    fn test_kick_exact_cost_denied() {
        let mut f = Fixture::new().with_stamina(20.0);
        assert!(!f.ctx().kick());
    }
}
