//! The polymorphic cell handle and its one-way kind conversion.

use serde::{Deserialize, Serialize};

use super::historical::HistoricalCell;
use super::standard::StandardCell;
use super::state::CellState;

/// The behavioral kind of a cell: which rule set it follows.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CellKind {
    /// The two-or-three survival rule: no history, all directions count.
    Standard,
    /// The parity rule: survival counter, cardinal directions only.
    Historical,
}

/// A cell that can hold either rule set, switching kind at most once.
///
/// `Cell` is the value the mixed-kind grid stores: a tagged sum over
/// [`StandardCell`] and [`HistoricalCell`], dispatched by pattern matching.
/// It evolves by the rule of whichever kind it currently holds, with one
/// addition: when a historical cell's transition leaves it alive at age 2 -
/// its second consecutive survival - the cell is replaced by a freshly
/// created live [`StandardCell`].
///
/// The conversion is one-way and fires at most once per grid position,
/// because a standard cell never re-enters the historical rule. The
/// replacement keeps no memory of the age that triggered it.
///
/// # Example
///
/// ```rust
/// use vivarium::core::{Cell, CellKind, CellState};
///
/// let cell = Cell::new(CellKind::Historical, true);
/// assert_eq!(cell.kind(), CellKind::Historical);
///
/// // Two consecutive survivals cross the cell over for good.
/// let cell = cell.evolve(1).evolve(1);
/// assert_eq!(cell.kind(), CellKind::Standard);
/// assert!(cell.is_alive());
/// assert_eq!(cell.symbol(), '*');
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Cell {
    /// A cell currently following the standard rule.
    Standard(StandardCell),
    /// A cell currently following the historical rule.
    Historical(HistoricalCell),
}

impl Cell {
    /// Create a cell of the requested kind and aliveness.
    ///
    /// Historical cells start at age 0.
    pub fn new(kind: CellKind, alive: bool) -> Self {
        match kind {
            CellKind::Standard => Cell::Standard(StandardCell::new(alive)),
            CellKind::Historical => Cell::Historical(HistoricalCell::new(alive)),
        }
    }

    /// The kind of rule this cell currently follows.
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Standard(_) => CellKind::Standard,
            Cell::Historical(_) => CellKind::Historical,
        }
    }
}

impl Default for Cell {
    /// A dead historical cell: the starting value of every position in a
    /// mixed-kind grid.
    fn default() -> Self {
        Cell::Historical(HistoricalCell::default())
    }
}

impl CellState for Cell {
    fn live() -> Self {
        Cell::Historical(HistoricalCell::live())
    }

    fn evolve(&self, neighbors: u8) -> Self {
        match self {
            Cell::Standard(cell) => Cell::Standard(cell.evolve(neighbors)),
            Cell::Historical(cell) => {
                let next = cell.evolve(neighbors);
                if next.is_alive() && next.age() == 2 {
                    // Second consecutive survival: the one-way conversion.
                    Cell::Standard(StandardCell::live())
                } else {
                    Cell::Historical(next)
                }
            }
        }
    }

    fn is_alive(&self) -> bool {
        match self {
            Cell::Standard(cell) => cell.is_alive(),
            Cell::Historical(cell) => cell.is_alive(),
        }
    }

    fn affects_direction(&self, dr: i32, dc: i32) -> bool {
        match self {
            Cell::Standard(cell) => cell.affects_direction(dr, dc),
            Cell::Historical(cell) => cell.affects_direction(dr, dc),
        }
    }

    fn symbol(&self) -> char {
        match self {
            Cell::Standard(cell) => cell.symbol(),
            Cell::Historical(cell) => cell.symbol(),
        }
    }
}
