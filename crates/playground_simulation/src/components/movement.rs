//! Movement компоненты: скорость, накопленный input, поворот контроллера
//!
//! Ядро только ПИШЕТ intents (impulses, rotation, max speed).
//! Host (физика/движок) читает их и применяет, затем очищает `MovementInput`.

use bevy::prelude::*;

use crate::config::StanceSpeeds;

/// Максимальная скорость ходьбы (units/sec), выбирается sprint gate
#[derive(Component, Clone, Copy, Debug, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementSpeed {
    pub speed: f32,
}

/// Walk speed без оружия из таблицы скоростей по умолчанию
impl Default for MovementSpeed {
    fn default() -> Self {
        Self {
            speed: StanceSpeeds::default().unarmed.walk,
        }
    }
}

/// Накопленные movement impulses за кадр
///
/// - `x`: right axis
/// - `y`: forward axis
///
/// Host забирает через `take()` после применения к телу.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementInput {
    pub pending: Vec2,
}

impl MovementInput {
    pub fn add(&mut self, forward: f32, right: f32) {
        self.pending.y += forward;
        self.pending.x += right;
    }

    pub fn take(&mut self) -> Vec2 {
        std::mem::take(&mut self.pending)
    }
}

/// Поворот камеры/контроллера (накопленный yaw/pitch input)
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ControlRotation {
    pub yaw: f32,
    pub pitch: f32,
}

impl ControlRotation {
    pub fn add_input(&mut self, yaw: f32, pitch: f32) {
        self.yaw += yaw;
        self.pitch += pitch;
    }
}

/// Marker: персонаж в воздухе (ставит/снимает host physics)
///
/// Пока marker есть - jump и crouch запрещены.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Falling;

/// Скорость тела (пишет host), нужна для `is_walking`
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Velocity(pub Vec3);

impl Velocity {
    /// Порог "стоит на месте" (squared length)
    pub const IDLE_THRESHOLD_SQ: f32 = 0.1;

    pub fn is_walking(&self) -> bool {
        self.0.length_squared() > Self::IDLE_THRESHOLD_SQ
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_speed_is_unarmed_walk() {
        let speeds = StanceSpeeds::default();
        assert_eq!(MovementSpeed::default().speed, speeds.unarmed.walk);
    }

    #[test]
    fn test_movement_input_accumulates_and_drains() {
        let mut input = MovementInput::default();
        input.add(1.0, 0.0);
        input.add(0.5, -1.0);

        assert_eq!(input.take(), Vec2::new(-1.0, 1.5));
        assert_eq!(input.pending, Vec2::ZERO);
    }

    #[test]
    fn test_control_rotation_accumulates() {
        let mut rotation = ControlRotation::default();
        rotation.add_input(2.0, -1.0);
        rotation.add_input(1.0, 0.5);
        assert_eq!(rotation, ControlRotation { yaw: 3.0, pitch: -0.5 });
    }

    #[test]
    fn test_walking_threshold() {
        assert!(!Velocity(Vec3::ZERO).is_walking());
        assert!(!Velocity(Vec3::new(0.2, 0.0, 0.2)).is_walking());
        assert!(Velocity(Vec3::new(1.0, 0.0, 0.0)).is_walking());
    }
}
