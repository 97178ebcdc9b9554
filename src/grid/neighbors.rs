//! Neighbor counting for the synchronous step.
//!
//! Counts are computed in a single read-only pass over the current cells,
//! before any cell is updated. The resulting matrix is local to the step
//! operation: it is derived state, never stored or exposed.

use crate::core::CellState;

/// The 8 relative offsets examined around every live source cell.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Count direction-qualified live neighbors for every grid position.
///
/// A live source at `(row, col)` contributes to the in-bounds destination
/// at `(row + dr, col + dc)` only if the destination's own rule accepts
/// the reversed offset: `destination.affects_direction(-dr, -dc)`. Dead
/// cells never contribute as sources; every cell, dead or alive, is
/// eligible as a destination.
pub(crate) fn count_neighbors<C: CellState>(cells: &[C], rows: usize, cols: usize) -> Vec<u8> {
    debug_assert_eq!(cells.len(), rows * cols);
    let mut counts = vec![0u8; cells.len()];

    for row in 0..rows {
        for col in 0..cols {
            if !cells[row * cols + col].is_alive() {
                continue;
            }

            for (dr, dc) in NEIGHBOR_OFFSETS {
                let neighbor_row = row as isize + dr as isize;
                let neighbor_col = col as isize + dc as isize;

                let in_bounds = neighbor_row >= 0
                    && neighbor_row < rows as isize
                    && neighbor_col >= 0
                    && neighbor_col < cols as isize;
                if !in_bounds {
                    continue;
                }

                let index = neighbor_row as usize * cols + neighbor_col as usize;
                if cells[index].affects_direction(-dr, -dc) {
                    counts[index] += 1;
                }
            }
        }
    }

    counts
}
