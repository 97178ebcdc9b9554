//! The grid engine: synchronous generations over a fixed field of cells.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::CellState;

use super::error::{GridError, PatternError};
use super::neighbors;

/// A fixed-size field of cells, advanced one whole generation at a time.
///
/// The engine owns a flat row-major array of cell values and a generation
/// counter. Each [`step`](Life::step) runs in two phases: a read-only pass
/// computes every position's direction-qualified neighbor count from the
/// current cells, then every cell is overwritten with its evolved value.
/// No cell ever observes another cell's post-step state within the same
/// generation, so the update is simultaneous and deterministic.
///
/// `Life` is generic over the cell type it holds: `Life<StandardCell>` and
/// `Life<HistoricalCell>` run a single rule everywhere, while `Life<Cell>`
/// holds mixed kinds and lets historical cells convert as they age.
///
/// # Example
///
/// ```rust
/// use vivarium::core::Cell;
/// use vivarium::grid::Life;
///
/// let mut life: Life<Cell> = Life::new(3, 3)?;
/// life.seed(1, 1)?;
///
/// // A lone historical cell dies and wakes its four cardinal neighbors.
/// life.step();
/// assert_eq!(life.generation(), 1);
/// assert_eq!(life.population(), 4);
/// # Ok::<(), vivarium::grid::GridError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Life<C: CellState> {
    rows: usize,
    cols: usize,
    cells: Vec<C>,
    generation: u64,
}

impl<C: CellState> Life<C> {
    /// Create a grid of the given dimensions, every cell dead in the
    /// type's default variant, at generation 0.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroDimension`] if either dimension is 0.
    /// Dimensions are fixed for the grid's lifetime.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![C::default(); rows * cols],
            generation: 0,
        })
    }

    /// Build a grid from string rows using the seed alphabet: `.` for a
    /// dead cell, `*` for a live one.
    ///
    /// Live cells are created with [`CellState::live`], so they carry the
    /// type's default variant at age 0 - ages cannot be encoded. Intended
    /// for tests and demos; see also the [`life_grid!`](crate::life_grid)
    /// macro.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Empty`] for a pattern with no rows or no
    /// columns, [`PatternError::RaggedRow`] if the rows differ in width,
    /// and [`PatternError::UnknownSymbol`] for anything outside the seed
    /// alphabet.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vivarium::core::StandardCell;
    /// use vivarium::grid::Life;
    ///
    /// let life: Life<StandardCell> = Life::from_rows(&["*.", ".."])?;
    /// assert_eq!(life.population(), 1);
    /// assert_eq!(life.render_cell(0, 0).unwrap(), '*');
    /// # Ok::<(), vivarium::grid::PatternError>(())
    /// ```
    pub fn from_rows(pattern: &[&str]) -> Result<Self, PatternError> {
        let rows = pattern.len();
        let cols = pattern.first().map_or(0, |line| line.chars().count());
        if rows == 0 || cols == 0 {
            return Err(PatternError::Empty);
        }

        let mut cells = vec![C::default(); rows * cols];
        for (row, line) in pattern.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(PatternError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                match symbol {
                    '.' => {}
                    '*' => cells[row * cols + col] = C::live(),
                    _ => return Err(PatternError::UnknownSymbol { row, col, symbol }),
                }
            }
        }

        Ok(Self {
            rows,
            cols,
            cells,
            generation: 0,
        })
    }

    /// Mark the cell at `(row, col)` alive in the type's default variant.
    ///
    /// The position is overwritten with a freshly created live cell,
    /// regardless of what it held before. Seeding the same position twice
    /// leaves the same value as seeding it once.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the coordinate is outside the
    /// grid.
    pub fn seed(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let index = self.index_of(row, col)?;
        self.cells[index] = C::live();
        Ok(())
    }

    /// Advance the whole grid exactly one generation.
    ///
    /// Phase one computes every neighbor count from the pre-step cells;
    /// phase two commits every cell's evolved value. The counts never
    /// mix with partially updated state.
    pub fn step(&mut self) {
        let counts = neighbors::count_neighbors(&self.cells, self.rows, self.cols);
        for (cell, count) in self.cells.iter_mut().zip(counts) {
            *cell = cell.evolve(count);
        }
        self.generation += 1;
    }

    /// Count the currently live cells. Pure query, O(rows * cols).
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// The display symbol for the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the coordinate is outside the
    /// grid.
    pub fn render_cell(&self, row: usize, col: usize) -> Result<char, GridError> {
        let index = self.index_of(row, col)?;
        Ok(self.cells[index].symbol())
    }

    /// Borrow the cell at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&C> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// How many generations have been stepped. Starts at 0; purely
    /// observational.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The fixed number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The fixed number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

impl<C: CellState> fmt::Display for Life<C> {
    /// Render the whole board, one line per row, using each cell's symbol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.cells[row * self.cols + col].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
