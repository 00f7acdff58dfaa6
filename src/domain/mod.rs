mod cell;
mod grid;
mod rules;
mod patterns;

pub use cell::{Cell, State, clamp_heat};
pub use grid::Grid;
pub use rules::{Rule, PRIORITY, evolve};
pub use patterns::{Pattern, presets};
