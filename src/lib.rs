//! Vivarium: A pure functional cellular automaton library
//!
//! Vivarium keeps a pure core behind an imperative shell. Every cell rule
//! is a pure function from a cell value and a neighbor count to the next
//! cell value, and the grid engine applies all of them simultaneously, so
//! each generation is a pure function of the one before it. I/O and
//! presentation stay outside the library.
//!
//! # Core Concepts
//!
//! - **Cells**: Rule behavior via the `CellState` trait, implemented by
//!   `StandardCell`, `HistoricalCell`, and the polymorphic `Cell`
//! - **Direction-aware counting**: Each destination cell decides which
//!   directions are allowed to influence it
//! - **Generations**: Synchronous two-phase stepping; queries never mutate
//!
//! # Example
//!
//! ```rust
//! use vivarium::core::Cell;
//! use vivarium::grid::Life;
//!
//! let mut life: Life<Cell> = Life::new(3, 3)?;
//! life.seed(1, 1)?;
//!
//! // The lone cell dies of isolation while its four cardinal
//! // neighbors are born with exactly one live neighbor each.
//! life.step();
//!
//! assert_eq!(life.generation(), 1);
//! assert_eq!(life.population(), 4);
//! assert_eq!(life.render_cell(0, 1)?, '0');
//! assert_eq!(life.render_cell(1, 1)?, '-');
//! # Ok::<(), vivarium::grid::GridError>(())
//! ```

pub mod core;
pub mod grid;

mod macros;

// Re-export commonly used types
pub use crate::core::{Cell, CellKind, CellState, HistoricalCell, StandardCell};
pub use crate::grid::{GridError, Life, PatternError};
