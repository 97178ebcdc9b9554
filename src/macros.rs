//! Macros for ergonomic grid construction.

/// Build a [`Life`](crate::grid::Life) grid from rows of `.` and `*`.
///
/// The cell type can be named before a semicolon or left to inference.
/// Expands to [`Life::from_rows`](crate::grid::Life::from_rows), so the
/// result is a `Result` carrying any pattern problem.
///
/// # Example
///
/// ```
/// use vivarium::core::StandardCell;
/// use vivarium::life_grid;
///
/// let life = life_grid!(StandardCell;
///     ".*.",
///     ".*.",
///     ".*.",
/// )
/// .unwrap();
///
/// assert_eq!(life.population(), 3);
/// ```
#[macro_export]
macro_rules! life_grid {
    ($cell:ty; $($row:expr),+ $(,)?) => {
        $crate::grid::Life::<$cell>::from_rows(&[$($row),+])
    };
    ($($row:expr),+ $(,)?) => {
        $crate::grid::Life::from_rows(&[$($row),+])
    };
}
