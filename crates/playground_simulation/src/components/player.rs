//! Player control marker component
//!
//! Отмечает entity, к которому подключён контроллер игрока.

use bevy::prelude::Component;

/// Marker component: к персонажу подключён валидный контроллер
///
/// Move и Look разрешены только с этим marker.
/// Активация без него - fatal precondition (`ActivationError::MissingController`).
///
/// # Possession
/// ```ignore
/// commands.entity(old_character).remove::<Player>();
/// commands.entity(new_character).insert(Player);
/// ```
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
