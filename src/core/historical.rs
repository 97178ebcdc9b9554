//! The historical rule: parity-driven transitions with a survival counter.

use serde::{Deserialize, Serialize};

use super::state::CellState;

/// A cell following the parity rule, remembering how long it has survived.
///
/// A live cell dies iff it has 0, 2, or 4 live neighbors and survives on
/// any other count; a dead cell becomes alive iff it has exactly 1 or 3.
/// Only the four cardinal directions count toward the neighbor total -
/// diagonal neighbors are invisible to this rule.
///
/// The age counter records consecutive survivals: it increments by exactly
/// 1 each time the cell was alive before a transition and is still alive
/// after it. Death leaves the counter untouched; nothing ever reads a dead
/// cell's age.
///
/// # Example
///
/// ```rust
/// use vivarium::core::{CellState, HistoricalCell};
///
/// let cell = HistoricalCell::new(true);
/// assert_eq!(cell.age(), 0);
///
/// // One neighbor: survive, and remember it.
/// let older = cell.evolve(1);
/// assert!(older.is_alive());
/// assert_eq!(older.age(), 1);
///
/// // Two neighbors: die. The counter stops, unread.
/// assert!(!older.evolve(2).is_alive());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct HistoricalCell {
    alive: bool,
    age: u32,
}

impl HistoricalCell {
    /// Create a historical cell with the given aliveness and age 0.
    pub fn new(alive: bool) -> Self {
        Self { alive, age: 0 }
    }

    /// Create a historical cell mid-history, at an explicit age.
    ///
    /// Mainly useful for tests and fixtures; cells created through the
    /// grid always start at age 0.
    pub fn with_age(alive: bool, age: u32) -> Self {
        Self { alive, age }
    }

    /// The number of consecutive survivals this cell has accumulated.
    pub fn age(&self) -> u32 {
        self.age
    }
}

impl CellState for HistoricalCell {
    fn live() -> Self {
        Self::new(true)
    }

    fn evolve(&self, neighbors: u8) -> Self {
        let alive = match (self.alive, neighbors) {
            (true, 0) | (true, 2) | (true, 4) => false,
            (true, _) => true,
            (false, 1) | (false, 3) => true,
            (false, _) => false,
        };

        // Consecutive survival is the only thing that ages a cell. The
        // counter saturates rather than wrapping.
        let age = if self.alive && alive {
            self.age.saturating_add(1)
        } else {
            self.age
        };

        Self { alive, age }
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn affects_direction(&self, dr: i32, dc: i32) -> bool {
        dr * dc == 0
    }

    fn symbol(&self) -> char {
        if !self.alive {
            '-'
        } else {
            // Single digit for ages 0..=9, '+' from 10 on.
            char::from_digit(self.age, 10).unwrap_or('+')
        }
    }
}
