//! Row-major grid of cells
//!
//! Cell `(line, column)` is stored at `line * width + column`. The grid is
//! replaced wholesale rather than edited in place: on creation, on every
//! propagation rebuild and on contradiction reset.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::cell::Cell;
use crate::spatial::tiles::Direction;

/// Fixed-size grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tile_count: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid with validated dimensions
    ///
    /// The grid holds no cells until [`Grid::create`] is called.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        Ok(Self {
            width,
            height,
            tile_count: 0,
            cells: Vec::new(),
        })
    }

    /// Create a grid and fill it with fresh cells in one call
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` under the same conditions as [`Grid::new`]
    pub fn with_tiles(width: usize, height: usize, tile_count: usize) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        grid.create(tile_count);
        Ok(grid)
    }

    /// Replace every cell with a fresh cell allowing all tiles
    ///
    /// With zero tiles the grid is left without cells, which makes it
    /// vacuously filled.
    pub fn create(&mut self, tile_count: usize) {
        self.tile_count = tile_count;
        self.cells = if tile_count == 0 {
            Vec::new()
        } else {
            vec![Cell::full(tile_count); self.width * self.height]
        };
    }

    /// True iff no cell remains uncollapsed
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Cell::is_collapsed)
    }

    /// Number of collapsed cells
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_collapsed()).count()
    }

    /// Uncollapsed cells with their positions, in grid order
    pub fn empty_cells(&self) -> Vec<(usize, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_collapsed())
            .collect()
    }

    /// Grid width in columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in lines
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Tile count the grid was last created with
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `(line, column)`, if in bounds
    pub fn cell(&self, line: usize, column: usize) -> Option<&Cell> {
        self.position(line, column)
            .and_then(|index| self.cells.get(index))
    }

    /// Row-major index of `(line, column)`, if in bounds
    pub const fn position(&self, line: usize, column: usize) -> Option<usize> {
        if line < self.height && column < self.width {
            Some(line * self.width + column)
        } else {
            None
        }
    }

    /// `(line, column)` of a row-major index
    pub const fn coordinates(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// Neighbouring cell in a direction, absent at the grid edge
    pub fn neighbour(&self, line: usize, column: usize, direction: Direction) -> Option<&Cell> {
        let (dl, dc) = direction.offset();
        let line = line.checked_add_signed(dl)?;
        let column = column.checked_add_signed(dc)?;
        self.cell(line, column)
    }

    /// Commit the cell at `(line, column)` to `tile` without touching its neighbours
    pub(crate) fn collapse_at(&mut self, line: usize, column: usize, tile: usize) -> Result<()> {
        self.position(line, column)
            .and_then(|index| self.cells.get_mut(index))
            .ok_or_else(|| out_of_bounds(line, column))?
            .collapse(tile)
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Swap in a rebuilt cell sequence of the same size
    pub(crate) fn replace_cells(&mut self, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

pub(crate) fn out_of_bounds(line: usize, column: usize) -> AlgorithmError {
    invalid_parameter("position", &format!("({line}, {column})"), &"outside the grid")
}
