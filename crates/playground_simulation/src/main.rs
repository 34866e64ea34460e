//! Headless симуляция персонажа
//!
//! Запускает Bevy App без рендера, скриптует несколько секунд input и
//! печатает изменения stamina/posture.
//!
//! Usage: `playground_simulation [character.toml]`

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use playground_simulation::input::action_names;
use playground_simulation::*;

const TICKS_PER_SECOND: u32 = SIMULATION_HZ as u32;

/// Печатает regen notifications (listener)
fn log_stat_updates(mut events: EventReader<StatUpdated>) {
    for event in events.read() {
        log_info(&format!(
            "{:?} {:?}: {:.1} → {:.1} / {:.1}",
            event.entity, event.stat, event.old, event.new, event.max
        ));
    }
}

fn send(app: &mut App, input: RawInput) {
    app.world_mut().send_event(input);
}

fn run_ticks(app: &mut App, ticks: u32, mut each_tick: impl FnMut(&mut App)) {
    for _ in 0..ticks {
        each_tick(app);
        app.update();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => CharacterConfig::load(path)?,
        None => CharacterConfig {
            movable_on_spawn: true,
            ..Default::default()
        },
    };

    let mut app = create_headless_app();
    app.insert_resource(config)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / SIMULATION_HZ,
        )))
        .add_plugins(SimulationPlugin)
        .add_systems(Update, log_stat_updates.after(CharacterSet::Regen));

    // Первый update только фиксирует стартовое время (delta = 0)
    app.update();

    let player = spawn_character(app.world_mut());
    app.world_mut().entity_mut(player).insert(Player);
    activate_character(app.world_mut(), player)?;

    log_info("Sprinting forward for 3 seconds");
    send(
        &mut app,
        RawInput::triggered(player, action_names::SPRINT, InputValue::Digital(true)),
    );
    run_ticks(&mut app, 3 * TICKS_PER_SECOND, |app| {
        send(
            app,
            RawInput::triggered(player, action_names::MOVEMENT, InputValue::Axis2D(Vec2::Y)),
        );
    });
    send(&mut app, RawInput::completed(player, action_names::SPRINT));

    log_info("Jump + kick");
    send(
        &mut app,
        RawInput::triggered(player, action_names::JUMP, InputValue::Digital(true)),
    );
    send(
        &mut app,
        RawInput::triggered(player, action_names::KICK, InputValue::Digital(true)),
    );
    run_ticks(&mut app, 1, |_| {});
    app.world_mut().send_event(KickFinished { entity: player });

    log_info("Crouching, recovering for 4 seconds");
    send(
        &mut app,
        RawInput::triggered(player, action_names::CROUCH, InputValue::Digital(true)),
    );
    run_ticks(&mut app, 4 * TICKS_PER_SECOND, |_| {});

    if let Some(status) = CharacterStatus::read(app.world(), player) {
        log_info(&format!("Final status: {:?}", status));
    }

    deactivate_character(app.world_mut(), player);
    log_info("Simulation complete!");
    Ok(())
}
