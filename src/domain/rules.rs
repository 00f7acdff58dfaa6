use super::cell::{Cell, State};
use crate::config::MAX_HEAT;

/// Transition rules of the heat-tracking Life variant.
/// The conditional rules are checked in `PRIORITY` order and the first
/// match wins; `Aging` applies when none of them match.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rule {
    Underpopulation,
    Overpopulation,
    Reproduction,
    Aging,
}

/// Conditional rules in evaluation order
pub const PRIORITY: [Rule; 3] = [Rule::Underpopulation, Rule::Overpopulation, Rule::Reproduction];

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Underpopulation => "Underpopulation",
            Rule::Overpopulation => "Overpopulation",
            Rule::Reproduction => "Reproduction",
            Rule::Aging => "Aging",
        }
    }

    /// Whether this rule's condition holds. `Aging` always matches.
    pub const fn matches(self, cell: Cell, neighbors: u8) -> bool {
        match self {
            Rule::Underpopulation => cell.is_alive() && neighbors < 2,
            Rule::Overpopulation => cell.is_alive() && neighbors > 3,
            Rule::Reproduction => !cell.is_alive() && neighbors == 3,
            Rule::Aging => true,
        }
    }

    /// Pure transition from the current cell to its successor
    pub fn apply(self, cell: Cell) -> Cell {
        let cooled = cell.heat() as i32 - 1;
        match self {
            Rule::Underpopulation | Rule::Overpopulation => Cell::new(State::Dead, cooled),
            Rule::Reproduction => Cell::new(State::Alive, MAX_HEAT as i32),
            Rule::Aging => Cell::new(cell.state, cooled),
        }
    }

    /// First matching rule for this cell and neighbor count
    pub fn select(cell: Cell, neighbors: u8) -> Rule {
        PRIORITY
            .into_iter()
            .find(|rule| rule.matches(cell, neighbors))
            .unwrap_or(Rule::Aging)
    }
}

/// Compute the next cell from the current one and its live neighbor count
pub fn evolve(cell: Cell, neighbors: u8) -> Cell {
    Rule::select(cell, neighbors).apply(cell)
}
