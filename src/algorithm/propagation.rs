//! Whole-grid constraint rebuild after a collapse
//!
//! Every uncollapsed cell is recomputed from the full tile set against the
//! current options of its in-bounds neighbours. Collapsed cells are copied.
//! A cell emptied here is left empty; the contradiction only surfaces once
//! that cell is selected for collapse.

use crate::algorithm::adjacency::AdjacencyTable;
use crate::algorithm::bitset::TileBitset;
use crate::spatial::tiles::Direction;
use crate::spatial::{Cell, Grid};

/// Options for the cell at `(line, column)` implied by its neighbours
///
/// For the neighbour in direction `d`, the neighbour's allowed sets toward
/// `opposite(d)` describe what may sit in this cell.
pub fn constrained_options(
    grid: &Grid,
    adjacency: &AdjacencyTable,
    line: usize,
    column: usize,
) -> TileBitset {
    let mut options = TileBitset::all(grid.tile_count());

    for direction in Direction::ALL {
        if let Some(neighbour) = grid.neighbour(line, column, direction) {
            let valid = adjacency.allowed_from(neighbour.options(), direction.opposite());
            options.intersect_with(&valid);
        }
    }

    options
}

/// Build the next cell sequence from the current grid
pub fn rebuild_cells(grid: &Grid, adjacency: &AdjacencyTable) -> Vec<Cell> {
    grid.cells()
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            if cell.is_collapsed() {
                cell.clone()
            } else {
                let (line, column) = grid.coordinates(index);
                Cell::with_options(constrained_options(grid, adjacency, line, column))
            }
        })
        .collect()
}

/// Replace the grid's cells with their rebuilt counterparts
pub fn propagate(grid: &mut Grid, adjacency: &AdjacencyTable) {
    let next = rebuild_cells(grid, adjacency);
    grid.replace_cells(next);
}
