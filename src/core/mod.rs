//! Core cell types and transition rules.
//!
//! This module contains the pure functional core of the automaton:
//! - Cell abstraction via the `CellState` trait
//! - The two rule variants, standard and historical
//! - The polymorphic `Cell` handle with its one-way kind conversion
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod cell;
mod historical;
mod standard;
mod state;

pub use cell::{Cell, CellKind};
pub use historical::HistoricalCell;
pub use standard::StandardCell;
pub use state::CellState;
