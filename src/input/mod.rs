use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::presets;

/// Keys and the simulation action each one triggers
fn key_actions() -> [(KeyCode, fn(Simulation) -> Simulation); 5] {
    [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, Simulation::reseed),
        (KeyCode::G, |s| s.drop_pattern(&presets::glider())),
        (KeyCode::Tab, Simulation::toggle_status),
    ]
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    let sim = key_actions().iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Single step only while paused
    if !sim.is_running && is_key_pressed(KeyCode::N) {
        return sim.step();
    }
    sim
}
