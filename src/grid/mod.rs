//! The grid engine and its error types.
//!
//! [`Life`] owns a fixed-size field of cells and advances it one whole
//! generation per [`step`](Life::step). Construction and coordinate
//! access validate their inputs up front and report failures through
//! [`GridError`] and [`PatternError`] instead of panicking.

mod error;
mod life;
mod neighbors;

pub use error::{GridError, PatternError};
pub use life::Life;
