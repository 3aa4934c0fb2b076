//! Tile records and tile-set augmentation
//!
//! A tile is identified by its index and described by four edge signatures
//! ordered up, right, down, left. Rotated variants are produced here, before
//! any adjacency is computed, so the solver never deals with geometry.

use std::collections::HashSet;
use std::path::PathBuf;

/// Number of sides on a tile
pub const SIDES: usize = 4;

/// One of the four grid directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Previous line
    Up,
    /// Next column
    Right,
    /// Next line
    Down,
    /// Previous column
    Left,
}

impl Direction {
    /// All directions in edge order
    pub const ALL: [Self; SIDES] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Position of this direction in an edge tuple
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    /// Direction pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Step as `(line delta, column delta)`
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }
}

/// Immutable tile record
///
/// Image data is carried through opaquely for the renderer and never read
/// by the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Stable identity, equal to the tile's position in its tile set
    pub index: usize,
    /// Display name from the tile-set description
    pub name: String,
    /// Optional image reference for display
    pub image: Option<PathBuf>,
    /// Edge signatures ordered up, right, down, left
    pub edges: [String; SIDES],
}

impl Tile {
    /// Create a tile without display data
    pub fn new(index: usize, edges: [&str; SIDES]) -> Self {
        Self {
            index,
            name: format!("tile{index}"),
            image: None,
            edges: edges.map(str::to_string),
        }
    }

    /// Edge signature on the given side
    pub fn edge(&self, direction: Direction) -> &str {
        self.edges
            .get(direction.index())
            .map_or("", String::as_str)
    }

    /// Tile with edges rotated clockwise by `steps` quarter turns
    ///
    /// Keeps the index; callers renumber after collecting variants.
    #[must_use]
    pub fn rotated(&self, steps: usize) -> Self {
        let shift = steps % SIDES;
        let edges = std::array::from_fn(|i| {
            self.edges
                .get((i + SIDES - shift) % SIDES)
                .cloned()
                .unwrap_or_default()
        });

        Self {
            index: self.index,
            name: if shift == 0 {
                self.name.clone()
            } else {
                format!("{}_r{shift}", self.name)
            },
            image: self.image.clone(),
            edges,
        }
    }

    /// Key identifying a tile by its edges alone
    fn signature(&self) -> String {
        self.edges.join(",")
    }
}

/// Append all distinct rotations of every tile
///
/// The base tiles keep their positions. A rotation is skipped when some tile
/// already present has identical edges. Indices are reassigned sequentially.
pub fn augment_with_rotations(tiles: &[Tile]) -> Vec<Tile> {
    let mut seen: HashSet<String> = tiles.iter().map(Tile::signature).collect();
    let mut augmented = tiles.to_vec();

    for tile in tiles {
        for steps in 1..SIDES {
            let variant = tile.rotated(steps);
            if seen.insert(variant.signature()) {
                augmented.push(variant);
            }
        }
    }

    for (index, tile) in augmented.iter_mut().enumerate() {
        tile.index = index;
    }

    augmented
}
