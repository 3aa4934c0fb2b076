//! CLI entry point for tile grid generation

use clap::Parser;
use tilecollapse::io::cli::{Cli, FileProcessor};

fn main() -> tilecollapse::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
