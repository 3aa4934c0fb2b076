//! Per-tile, per-direction neighbour compatibility
//!
//! Tile `B` may sit in direction `d` of tile `A` iff `A`'s edge on side `d`
//! matches `B`'s edge on the opposite side. The table is computed once from
//! the whole tile set and is read-only afterwards.

use crate::algorithm::bitset::TileBitset;
use crate::spatial::tiles::{Direction, SIDES, Tile};

/// Edge comparison applied uniformly to all four directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgeMatch {
    /// Signatures must be identical
    #[default]
    Exact,
    /// One signature must equal the other read backwards
    ///
    /// Suits signatures sampled clockwise around each tile, where a shared
    /// edge is read in opposite orders by its two tiles.
    Reversed,
}

impl EdgeMatch {
    /// Compare a tile's edge with its neighbour's facing edge
    pub fn matches(self, edge: &str, facing: &str) -> bool {
        match self {
            Self::Exact => edge == facing,
            Self::Reversed => edge.chars().eq(facing.chars().rev()),
        }
    }
}

/// Allowed neighbours for every tile in every direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyTable {
    allowed: Vec<[TileBitset; SIDES]>,
    edge_match: EdgeMatch,
}

impl AdjacencyTable {
    /// Build the table with no extra restriction on matches
    pub fn build(tiles: &[Tile], edge_match: EdgeMatch) -> Self {
        Self::build_with(tiles, edge_match, |_, _, _| true)
    }

    /// Build the table, accepting a match only if `accept(a, b, d)` holds
    ///
    /// Lets a tile set impose its own policy, such as forbidding a tile from
    /// neighbouring itself. For symmetric results `accept` must itself be
    /// symmetric under swapping `a` and `b` and reversing `d`.
    pub fn build_with<F>(tiles: &[Tile], edge_match: EdgeMatch, accept: F) -> Self
    where
        F: Fn(&Tile, &Tile, Direction) -> bool,
    {
        let tile_count = tiles.len();

        let allowed = tiles
            .iter()
            .map(|tile| {
                Direction::ALL.map(|direction| {
                    let mut set = TileBitset::new(tile_count);
                    for (position, candidate) in tiles.iter().enumerate() {
                        let facing = candidate.edge(direction.opposite());
                        if edge_match.matches(tile.edge(direction), facing)
                            && accept(tile, candidate, direction)
                        {
                            set.insert(position);
                        }
                    }
                    set
                })
            })
            .collect();

        Self {
            allowed,
            edge_match,
        }
    }

    /// Number of tiles the table was built from
    pub fn tile_count(&self) -> usize {
        self.allowed.len()
    }

    /// Predicate the table was built with
    pub const fn edge_match(&self) -> EdgeMatch {
        self.edge_match
    }

    /// Tiles allowed in `direction` of `tile`
    pub fn allowed(&self, tile: usize, direction: Direction) -> Option<&TileBitset> {
        self.allowed
            .get(tile)
            .and_then(|sets| sets.get(direction.index()))
    }

    /// Whether `neighbour` may sit in `direction` of `tile`
    pub fn is_compatible(&self, tile: usize, neighbour: usize, direction: Direction) -> bool {
        self.allowed(tile, direction)
            .is_some_and(|set| set.contains(neighbour))
    }

    /// Union of the allowed sets of every tile in `tiles` toward `direction`
    pub fn allowed_from(&self, tiles: &TileBitset, direction: Direction) -> TileBitset {
        let mut union = TileBitset::new(self.tile_count());
        for tile in tiles.iter() {
            if let Some(set) = self.allowed(tile, direction) {
                union.union_with(set);
            }
        }
        union
    }
}
