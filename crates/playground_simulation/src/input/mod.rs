//! Player input module
//!
//! # Архитектура
//!
//! ```text
//! Host input (keyboard/mouse/gamepad)
//!     ↓
//! RawInput (ECS event: action name + trigger + value)
//!     ↓
//! dispatch_raw_input - резолв через InputSubsystem bindings
//!     ↓
//! CharacterInput (ECS event) → character::actions
//! ```
//!
//! - `bindings` - mapping contexts, InputSubsystem resource
//! - `systems` - RawInput event и dispatch system

pub mod bindings;
pub mod systems;

pub use bindings::*;
pub use systems::*;

use bevy::prelude::*;

use crate::character::CharacterSet;

/// Input Plugin: InputSubsystem + dispatch в Update (до gating)
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSubsystem>()
            .add_event::<RawInput>()
            .add_systems(Update, dispatch_raw_input.in_set(CharacterSet::Input));
    }
}
