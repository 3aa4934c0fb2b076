//! Step-driven collapse solver
//!
//! Each call to [`Solver::step`] commits at most one cell: pick among the
//! most constrained cells, collapse it to a random remaining tile, then
//! rebuild every other cell's options from its neighbours. A selected cell
//! with no options is a contradiction and restarts the grid from scratch.

use crate::algorithm::adjacency::AdjacencyTable;
use crate::algorithm::propagation::propagate;
use crate::algorithm::selection::{ChoiceSource, minimum_entropy_candidates};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::Grid;
use crate::spatial::grid::out_of_bounds;

/// State of the grid after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Every cell is collapsed; further steps change nothing
    Filled,
    /// At least one cell remains uncollapsed
    InProgress,
}

/// Collapse solver bound to one adjacency table
#[derive(Debug, Clone)]
pub struct Solver {
    adjacency: AdjacencyTable,
    max_restarts: Option<usize>,
    restarts: usize,
    steps: usize,
}

impl Solver {
    /// Create a solver that restarts without limit on contradiction
    pub const fn new(adjacency: AdjacencyTable) -> Self {
        Self {
            adjacency,
            max_restarts: None,
            restarts: 0,
            steps: 0,
        }
    }

    /// Limit the number of contradiction restarts
    ///
    /// Once the limit is exceeded `step` reports `RetriesExhausted`.
    #[must_use]
    pub const fn with_max_restarts(mut self, max_restarts: Option<usize>) -> Self {
        self.max_restarts = max_restarts;
        self
    }

    /// Adjacency table in use
    pub const fn adjacency(&self) -> &AdjacencyTable {
        &self.adjacency
    }

    /// Number of tiles in the table
    pub fn tile_count(&self) -> usize {
        self.adjacency.tile_count()
    }

    /// Contradiction restarts so far
    pub const fn restarts(&self) -> usize {
        self.restarts
    }

    /// Steps taken so far, including those ending in a restart
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Fresh grid sized for this solver's tile set
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for invalid dimensions
    pub fn create_grid(&self, width: usize, height: usize) -> Result<Grid> {
        Grid::with_tiles(width, height, self.tile_count())
    }

    /// Commit the cell at `(line, column)` to `tile` and narrow the grid around it
    ///
    /// The tile must still be among the cell's options, so seeds never
    /// conflict with cells collapsed earlier. Seeds are lost if a later
    /// contradiction restarts the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid was created for a different tile count
    /// - `tile` is outside the tile set (`InvalidTileIndex`)
    /// - The position is outside the grid
    /// - The cell no longer allows `tile`
    pub fn seed(&self, grid: &mut Grid, line: usize, column: usize, tile: usize) -> Result<()> {
        self.check_grid(grid)?;

        if tile >= self.tile_count() {
            return Err(AlgorithmError::InvalidTileIndex {
                index: tile,
                max_tiles: self.tile_count(),
            });
        }

        let cell = grid
            .cell(line, column)
            .ok_or_else(|| out_of_bounds(line, column))?;

        if cell.collapsed_tile() == Some(tile) {
            return Ok(());
        }
        if cell.is_collapsed() || !cell.options().contains(tile) {
            return Err(invalid_parameter(
                "tile",
                &tile,
                &format!("not allowed at ({line}, {column})"),
            ));
        }

        grid.collapse_at(line, column, tile)?;
        propagate(grid, &self.adjacency);
        Ok(())
    }

    /// Perform one select, collapse and propagate step
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid was created for a different
    /// tile count, and `RetriesExhausted` when a contradiction occurs after
    /// the configured restart limit has been reached. The grid is still
    /// reset in that case.
    pub fn step<R: ChoiceSource>(&mut self, grid: &mut Grid, rng: &mut R) -> Result<StepOutcome> {
        self.check_grid(grid)?;

        let candidates = minimum_entropy_candidates(grid);
        if candidates.is_empty() {
            return Ok(StepOutcome::Filled);
        }

        // A source declining a non-empty choice turns the step into a no-op
        let Some(&target) = rng.uniform_choice(&candidates) else {
            return Ok(StepOutcome::InProgress);
        };

        self.steps += 1;

        let options = grid
            .cells()
            .get(target)
            .map(|cell| cell.options().to_vec())
            .unwrap_or_default();

        let Some(&pick) = rng.uniform_choice(&options) else {
            return self.restart(grid);
        };

        if let Some(cell) = grid.cell_mut(target) {
            cell.collapse(pick)?;
        }

        propagate(grid, &self.adjacency);

        Ok(StepOutcome::InProgress)
    }

    /// Step until the grid fills or `max_steps` steps have been taken
    ///
    /// Returns the number of steps performed by this call.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Solver::step`]
    pub fn run<R: ChoiceSource>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
        max_steps: usize,
    ) -> Result<usize> {
        for taken in 0..max_steps {
            if self.step(grid, rng)? == StepOutcome::Filled {
                return Ok(taken);
            }
        }
        Ok(max_steps)
    }

    fn check_grid(&self, grid: &Grid) -> Result<()> {
        if grid.tile_count() == self.tile_count() {
            Ok(())
        } else {
            Err(invalid_parameter(
                "grid",
                &format!("{} tiles", grid.tile_count()),
                &format!("solver expects {} tiles", self.tile_count()),
            ))
        }
    }

    fn restart(&mut self, grid: &mut Grid) -> Result<StepOutcome> {
        grid.create(self.tile_count());
        self.restarts += 1;

        match self.max_restarts {
            Some(limit) if self.restarts > limit => Err(AlgorithmError::RetriesExhausted {
                restarts: self.restarts,
            }),
            _ => Ok(StepOutcome::InProgress),
        }
    }
}
