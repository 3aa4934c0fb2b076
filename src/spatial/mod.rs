//! Spatial data structures
//!
//! This module contains:
//! - Tile records, directions and rotation augmentation
//! - Cells holding remaining tile options
//! - The row-major grid of cells

/// Single grid slot with its remaining options
pub mod cell;
/// Row-major grid of cells
pub mod grid;
/// Tile records and tile-set augmentation
pub mod tiles;

pub use cell::Cell;
pub use grid::Grid;
pub use tiles::{Direction, Tile};
