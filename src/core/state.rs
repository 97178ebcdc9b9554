//! Core `CellState` trait for grid cells.
//!
//! Every cell type the grid can hold implements this trait, which provides
//! pure methods for evolving a cell and inspecting its properties without
//! side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for cell states.
///
/// All methods are pure - no side effects. A cell state is an immutable
/// value describing one grid position; `evolve` returns the next value
/// instead of mutating in place, so a whole generation can be computed
/// from a snapshot and committed at once.
///
/// # Required Traits
///
/// - `Clone`: cells must be copyable for grid construction and stepping
/// - `PartialEq`: cells must be comparable for tests and snapshots
/// - `Debug`: cells must be debuggable for diagnostics
/// - `Default`: the default value is the dead cell of the type's default
///   variant, used to fill a freshly constructed grid
/// - `Serialize` + `Deserialize`: cells are plain data and serialize as such
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use vivarium::core::CellState;
///
/// /// A cell that lights up whenever any neighbor is live, then goes dark.
/// #[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
/// struct FlashCell {
///     lit: bool,
/// }
///
/// impl CellState for FlashCell {
///     fn live() -> Self {
///         FlashCell { lit: true }
///     }
///
///     fn evolve(&self, neighbors: u8) -> Self {
///         FlashCell {
///             lit: !self.lit && neighbors > 0,
///         }
///     }
///
///     fn is_alive(&self) -> bool {
///         self.lit
///     }
///
///     fn symbol(&self) -> char {
///         if self.lit {
///             'x'
///         } else {
///             ' '
///         }
///     }
/// }
///
/// let cell = FlashCell::default();
/// assert!(!cell.is_alive());
/// assert!(cell.evolve(1).is_alive());
/// // Directional adjacency defaults to "every direction counts".
/// assert!(cell.affects_direction(-1, -1));
/// ```
pub trait CellState:
    Clone + PartialEq + Debug + Default + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// A freshly created live cell in this type's default variant.
    ///
    /// Seeding a grid position overwrites it with this value.
    fn live() -> Self;

    /// Compute the next state from the direction-qualified count of live
    /// neighbors.
    ///
    /// This is a pure, total function: it never fails, never observes
    /// anything but its inputs, and returns the same output for the same
    /// `(self, neighbors)` pair every time. Counts are always in `0..=8`.
    fn evolve(&self, neighbors: u8) -> Self;

    /// Check whether the cell is currently alive.
    fn is_alive(&self) -> bool;

    /// Check whether a live neighbor in the relative direction `(dr, dc)`
    /// counts toward this cell's neighbor total.
    ///
    /// The offsets are unit steps: each of `dr` and `dc` is -1, 0, or 1.
    /// The predicate is evaluated by the *receiving* cell against the
    /// direction pointing back at the source.
    ///
    /// Default implementation returns `true`: every direction counts.
    fn affects_direction(&self, _dr: i32, _dc: i32) -> bool {
        true
    }

    /// The single display character for this cell.
    fn symbol(&self) -> char;
}
