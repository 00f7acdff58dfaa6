// Domain layer - cells, grid, rules
pub mod domain;

// Application layer - simulation state driven by the main loop
pub mod application;

// Infrastructure layer - configuration, rendering, input
pub mod config;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Rule, State, Pattern, presets};
pub use application::Simulation;
