//! Compile-time constants and the few settings read at startup.

use rand::random;

/// Cell size in pixels
pub const RESOLUTION: usize = 10;
pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 800;
pub const COLS: usize = WIDTH / RESOLUTION;
pub const ROWS: usize = HEIGHT / RESOLUTION;

/// Heat a cell receives on birth; decays by one each generation
pub const MAX_HEAT: u8 = 30;

/// Background colour (#111111)
pub const BG_RGB: (u8, u8, u8) = (0x11, 0x11, 0x11);

/// Seconds between generations
pub const TICK_INTERVAL: f32 = 0.05;

pub const DISC_RADIUS: f32 = 4.0;
pub const DISC_OFFSET: f32 = 5.0;

pub const SEED_VAR: &str = "HEAT_LIFE_SEED";

/// Settings resolved at startup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub seed: u64,
}

impl Settings {
    /// Read settings from the environment, falling back to a random seed
    pub fn from_env() -> Self {
        Self::from_seed_var(std::env::var(SEED_VAR).ok().as_deref(), random::<u64>)
    }

    /// Parse a seed value, taking one from `fallback` when it is missing or invalid
    fn from_seed_var(raw: Option<&str>, fallback: impl FnOnce() -> u64) -> Self {
        let seed = match raw.map(|s| s.trim().parse::<u64>()) {
            Some(Ok(seed)) => seed,
            Some(Err(err)) => {
                log::warn!("ignoring {SEED_VAR}={:?}: {err}", raw.unwrap_or_default());
                fallback()
            }
            None => fallback(),
        };
        Self { seed }
    }
}
