/// Command-line interface and batch processing
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types for all operations
pub mod error;
/// PNG export of generated grids
pub mod image;
/// Progress display for batch generation
pub mod progress;
/// Tile-set description loading
pub mod tileset;
