//! The standard rule: survive on two or three, born on three.

use serde::{Deserialize, Serialize};

use super::state::CellState;

/// A cell following the classic two-or-three survival rule.
///
/// A live cell survives iff it has exactly 2 or 3 live neighbors; a dead
/// cell becomes alive iff it has exactly 3. Every one of the 8 surrounding
/// directions counts toward the neighbor total, and no history is kept.
///
/// # Example
///
/// ```rust
/// use vivarium::core::{CellState, StandardCell};
///
/// let cell = StandardCell::new(true);
/// assert!(cell.evolve(2).is_alive());
/// assert!(cell.evolve(3).is_alive());
/// assert!(!cell.evolve(4).is_alive());
///
/// let dead = StandardCell::default();
/// assert!(dead.evolve(3).is_alive());
/// assert!(!dead.evolve(2).is_alive());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct StandardCell {
    alive: bool,
}

impl StandardCell {
    /// Create a standard cell with the given aliveness.
    pub fn new(alive: bool) -> Self {
        Self { alive }
    }
}

impl CellState for StandardCell {
    fn live() -> Self {
        Self::new(true)
    }

    fn evolve(&self, neighbors: u8) -> Self {
        let alive = match (self.alive, neighbors) {
            (true, 2) | (true, 3) => true,
            (false, 3) => true,
            _ => false,
        };
        Self { alive }
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    // affects_direction: default (all 8 directions count).

    fn symbol(&self) -> char {
        if self.alive {
            '*'
        } else {
            '.'
        }
    }
}
