//! CLI entry point for the stitch chart converter

use clap::Parser;
use stitchchart::io::cli::{Cli, FileProcessor};

fn main() -> stitchchart::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
