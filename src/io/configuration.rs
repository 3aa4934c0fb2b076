//! Constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Grid width and height used when none is given
pub const DEFAULT_GRID_DIMENSION: usize = 25;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default step budget per tile set, restarts included
pub const DEFAULT_MAX_STEPS: usize = 100_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Extension of tile-set description files
pub const TILESET_EXTENSION: &str = "json";
/// Side length in pixels of one exported cell
pub const CELL_PIXELS: u32 = 8;
