use rand::Rng;

use crate::config::MAX_HEAT;

/// Binary life state of a cell
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum State {
    Dead = 0,
    Alive = 1,
}

impl State {
    /// Contribution of this state to a neighbor count
    pub const fn weight(self) -> u8 {
        self as u8
    }
}

/// Cell is the fundamental unit of the simulation: a life state plus
/// a heat value that drives its afterglow colour once it dies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub state: State,
    heat: u8,
}

/// Clamp any heat value into `0..=MAX_HEAT`
pub fn clamp_heat(heat: i32) -> u8 {
    heat.clamp(0, MAX_HEAT as i32) as u8
}

impl Cell {
    /// A dead cell with no heat
    pub const DEAD: Cell = Cell { state: State::Dead, heat: 0 };

    /// Build a cell, clamping heat into range
    pub fn new(state: State, heat: i32) -> Self {
        Self { state, heat: clamp_heat(heat) }
    }

    /// A cell with a coin-flip state and zero heat
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let state = if rng.random_bool(0.5) { State::Alive } else { State::Dead };
        Self::new(state, 0)
    }

    pub const fn heat(self) -> u8 {
        self.heat
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self.state, State::Alive)
    }

    /// Dead with no heat left, i.e. not drawn
    pub const fn is_cold(self) -> bool {
        !self.is_alive() && self.heat == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_clamp_heat() {
        assert_eq!(clamp_heat(-5), 0);
        assert_eq!(clamp_heat(-1), 0);
        assert_eq!(clamp_heat(0), 0);
        assert_eq!(clamp_heat(17), 17);
        assert_eq!(clamp_heat(MAX_HEAT as i32), MAX_HEAT);
        assert_eq!(clamp_heat(MAX_HEAT as i32 + 1), MAX_HEAT);
        assert_eq!(clamp_heat(i32::MAX), MAX_HEAT);
        assert_eq!(clamp_heat(i32::MIN), 0);
    }

    #[test]
    fn test_constructor_clamps() {
        assert_eq!(Cell::new(State::Dead, -1).heat(), 0);
        assert_eq!(Cell::new(State::Alive, 99).heat(), MAX_HEAT);
        assert_eq!(Cell::new(State::Alive, 12).heat(), 12);
    }

    #[test]
    fn test_random_cells_have_no_heat() {
        let mut rng = StdRng::seed_from_u64(3);
        let cells: Vec<Cell> = (0..200).map(|_| Cell::random(&mut rng)).collect();

        assert!(cells.iter().all(|c| c.heat() == 0));
        assert!(cells.iter().any(|c| c.is_alive()));
        assert!(cells.iter().any(|c| !c.is_alive()));
    }

    #[test]
    fn test_state_weight() {
        assert_eq!(State::Dead.weight(), 0);
        assert_eq!(State::Alive.weight(), 1);
    }

    #[test]
    fn test_is_cold() {
        assert!(Cell::DEAD.is_cold());
        assert!(!Cell::new(State::Dead, 1).is_cold());
        assert!(!Cell::new(State::Alive, 0).is_cold());
    }
}
