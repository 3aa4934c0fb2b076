//! Command-line interface for batch generation from tile-set descriptions

use crate::algorithm::{AdjacencyTable, EdgeMatch, RandomSelector, Solver, StepOutcome};
use crate::io::configuration::{
    CELL_PIXELS, DEFAULT_GRID_DIMENSION, DEFAULT_MAX_STEPS, DEFAULT_SEED, OUTPUT_SUFFIX,
    TILESET_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::io::tileset::load_tiles;
use crate::spatial::tiles::augment_with_rotations;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tilecollapse")]
#[command(
    author,
    version,
    about = "Fill a tile grid whose neighbours all have matching edges"
)]
/// Command-line arguments for the generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Tile-set JSON file or directory of tile sets to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_DIMENSION)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_DIMENSION)]
    pub height: usize,

    /// Maximum solver steps per tile set, restarts included
    #[arg(short = 'i', long, default_value_t = DEFAULT_MAX_STEPS)]
    pub steps: usize,

    /// Give up after this many contradiction restarts (unlimited if absent)
    #[arg(short = 'R', long)]
    pub restarts: Option<usize>,

    /// Match edges against the reversed signature of the facing edge
    #[arg(long)]
    pub reversed: bool,

    /// Add rotated variants of every tile before solving
    #[arg(short = 'r', long)]
    pub rotate: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process tile sets even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Edge predicate selected by the flags
    pub const fn edge_match(&self) -> EdgeMatch {
        if self.reversed {
            EdgeMatch::Reversed
        } else {
            EdgeMatch::Exact
        }
    }
}

/// Orchestrates batch processing of tile sets with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process tile sets according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, tile-set loading, generation
    /// or export fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_tileset(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"must be a JSON tile-set file",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_tileset(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be a tile-set file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback when the step budget runs out
    #[allow(clippy::print_stderr)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let mut tiles = load_tiles(input_path)?;
        if self.cli.rotate {
            tiles = augment_with_rotations(&tiles);
        }

        let adjacency = AdjacencyTable::build(&tiles, self.cli.edge_match());
        let mut solver = Solver::new(adjacency).with_max_restarts(self.cli.restarts);
        let mut grid = solver.create_grid(self.cli.width, self.cli.height)?;
        let mut rng = RandomSelector::new(self.cli.seed);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, grid.cells().len());
        }

        let mut filled = grid.is_filled();
        for _ in 0..self.cli.steps {
            let outcome = solver.step(&mut grid, &mut rng)?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.update_step(index, grid.collapsed_count(), solver.restarts());
            }

            if outcome == StepOutcome::Filled {
                filled = true;
                break;
            }
        }

        if !filled && !self.cli.quiet {
            eprintln!(
                "Step budget exhausted for {} after {} restarts (exporting partial grid)",
                input_path.display(),
                solver.restarts()
            );
        }

        export_grid_as_png(&grid, CELL_PIXELS, &Self::get_output_path(input_path))?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_tileset(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(TILESET_EXTENSION)
}
