//! Edge-constrained tile grid generation in the style of wave function collapse
//!
//! Tiles declare a signature on each of their four edges. A grid of cells
//! starts with every tile possible everywhere; each solver step collapses the
//! most constrained cell and narrows the rest until every neighbouring pair
//! of tiles has matching edges.

#![forbid(unsafe_code)]

/// Adjacency tables, selection, propagation and the solver
pub mod algorithm;
/// Tile-set loading, image export, progress and error handling
pub mod io;
/// Tiles, cells and the grid
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
