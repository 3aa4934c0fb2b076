//! Minimum-entropy cell selection and uniform random choice

use crate::spatial::Grid;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform random choices
///
/// Both the cell tie-break and the tile pick go through this interface, so
/// a seeded or scripted implementation makes generation reproducible.
pub trait ChoiceSource {
    /// Uniform index into a sequence of `len` items, `None` when `len == 0`
    fn choose_index(&mut self, len: usize) -> Option<usize>;

    /// Uniform element of `items`, `None` when empty
    fn uniform_choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.choose_index(items.len())
            .and_then(|index| items.get(index))
    }
}

/// Seeded random selector for reproducible stochastic choices
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ChoiceSource for RandomSelector {
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }
}

/// Positions of uncollapsed cells sharing the minimum option count
///
/// Cells with more options are discarded outright. The result is in grid
/// order and empty only when the grid is filled.
pub fn minimum_entropy_candidates(grid: &Grid) -> Vec<usize> {
    let empty = grid.empty_cells();

    let Some(minimum) = empty.iter().map(|(_, cell)| cell.entropy()).min() else {
        return Vec::new();
    };

    empty
        .into_iter()
        .filter(|(_, cell)| cell.entropy() == minimum)
        .map(|(position, _)| position)
        .collect()
}
