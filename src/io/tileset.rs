//! Tile-set description loading
//!
//! A tile set is a JSON document listing tiles with an image name and four
//! edge constraints ordered up, right, down, left:
//!
//! ```json
//! {
//!   "folder": "circuit",
//!   "path": "tiles/circuit",
//!   "tiles": [
//!     { "name": "blank", "image": "0.png", "constraints": ["AAA", "AAA", "AAA", "AAA"] }
//!   ]
//! }
//! ```

use crate::io::error::{AlgorithmError, Result, tileset_format};
use crate::spatial::tiles::{SIDES, Tile};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Raw tile-set document
#[derive(Debug, Clone, Deserialize)]
pub struct TileSetDescription {
    /// Name of the folder holding the tile set
    pub folder: String,
    /// Directory prefix for tile images
    pub path: String,
    /// Tile entries in index order
    pub tiles: Vec<TileDescription>,
}

/// Raw tile entry
#[derive(Debug, Clone, Deserialize)]
pub struct TileDescription {
    /// Display name
    pub name: String,
    /// Image file name relative to the tile-set path
    pub image: String,
    /// Edge signatures ordered up, right, down, left
    pub constraints: Vec<String>,
}

impl TileSetDescription {
    /// Parse a description from JSON text
    ///
    /// # Errors
    ///
    /// Returns `TileSetFormat` if the text is not a valid description
    pub fn from_json(json: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| tileset_format(origin, &e))
    }

    /// Convert entries into indexed tile records
    ///
    /// # Errors
    ///
    /// Returns `TileSetFormat` if any entry does not have exactly four
    /// constraints
    pub fn into_tiles(self, origin: &Path) -> Result<Vec<Tile>> {
        let base = PathBuf::from(&self.path);

        self.tiles
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let edges: [String; SIDES] =
                    entry
                        .constraints
                        .try_into()
                        .map_err(|rejected: Vec<String>| {
                            tileset_format(
                                origin,
                                &format!(
                                    "tile {index} ('{}') has {} constraints, expected {SIDES}",
                                    entry.name,
                                    rejected.len()
                                ),
                            )
                        })?;

                Ok(Tile {
                    index,
                    name: entry.name,
                    image: Some(base.join(entry.image)),
                    edges,
                })
            })
            .collect()
    }
}

/// Parse tiles from JSON text
///
/// # Errors
///
/// Returns `TileSetFormat` on any structural or syntax problem
pub fn parse_tiles(json: &str) -> Result<Vec<Tile>> {
    let origin = Path::new("<inline>");
    TileSetDescription::from_json(json, origin)?.into_tiles(origin)
}

/// Load tiles from a tile-set file
///
/// Callers that prefer to degrade to an empty tile set can use
/// `unwrap_or_default`; an empty set makes grid generation a no-op.
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read and `TileSetFormat` if
/// its content is invalid
pub fn load_tiles(path: &Path) -> Result<Vec<Tile>> {
    let json = std::fs::read_to_string(path).map_err(|e| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "read tile set",
        source: e,
    })?;

    TileSetDescription::from_json(&json, path)?.into_tiles(path)
}
