//! Single grid slot holding the tiles still possible there

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{AlgorithmError, Result};

/// Grid slot with its remaining tile options
///
/// A collapsed cell holds exactly one option and is never modified again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    options: TileBitset,
    collapsed: bool,
}

impl Cell {
    /// Uncollapsed cell allowing every tile in `0..tile_count`
    pub fn full(tile_count: usize) -> Self {
        Self {
            options: TileBitset::all(tile_count),
            collapsed: false,
        }
    }

    /// Uncollapsed cell with the given options
    pub const fn with_options(options: TileBitset) -> Self {
        Self {
            options,
            collapsed: false,
        }
    }

    /// Commit the cell to a single tile
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileIndex` if `tile` is outside the cell's tile set;
    /// the cell is left unchanged
    pub fn collapse(&mut self, tile: usize) -> Result<()> {
        let max_tiles = self.options.capacity();
        if tile >= max_tiles {
            return Err(AlgorithmError::InvalidTileIndex {
                index: tile,
                max_tiles,
            });
        }

        self.options = TileBitset::single(tile, max_tiles);
        self.collapsed = true;
        Ok(())
    }

    /// Remaining options
    pub const fn options(&self) -> &TileBitset {
        &self.options
    }

    /// Number of remaining options
    pub fn entropy(&self) -> usize {
        self.options.count()
    }

    /// Whether the cell is committed
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Chosen tile, if committed
    pub fn collapsed_tile(&self) -> Option<usize> {
        if self.collapsed {
            self.options.nth(0)
        } else {
            None
        }
    }
}
