//! Read-only snapshot персонажа (для UI, animation blueprints, отладки)

use bevy::prelude::*;

use crate::components::{ActionState, Falling, Posture, Stamina, Velocity, WeaponStance};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterStatus {
    pub stamina: f32,
    pub max_stamina: f32,
    pub posture: f32,
    pub max_posture: f32,
    /// Прыгнул в этом кадре или в воздухе
    pub jumped: bool,
    pub walking: bool,
    pub running: bool,
    pub crouching: bool,
    pub kicked: bool,
    pub stance_index: u8,
}

impl CharacterStatus {
    /// None если entity не персонаж
    pub fn read(world: &World, entity: Entity) -> Option<Self> {
        let entity_ref = world.get_entity(entity).ok()?;
        let stamina = entity_ref.get::<Stamina>()?;
        let posture = entity_ref.get::<Posture>()?;
        let state = entity_ref.get::<ActionState>()?;

        let falling = entity_ref.contains::<Falling>();
        let walking = entity_ref.get::<Velocity>().is_some_and(Velocity::is_walking);
        let stance = entity_ref.get::<WeaponStance>().copied().unwrap_or_default();

        Some(Self {
            stamina: stamina.get(),
            max_stamina: stamina.max(),
            posture: posture.get(),
            max_posture: posture.max(),
            jumped: state.has_jumped_or_falling(falling),
            walking,
            running: state.is_running,
            crouching: state.is_crouching,
            kicked: state.has_kicked,
            stance_index: stance.index(),
        })
    }
}
