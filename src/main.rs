//! filetally - recursively count the files beneath a directory.
//!
//! Usage:
//!   ftally [PATH]        Count files under PATH (default: current directory)
//!   ftally -L [PATH]     Same, but descend into directory symlinks
//!   ftally --help        Show help

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};

use filetally_core::CountConfig;
use filetally_scan::WalkdirCounter;

#[derive(Parser)]
#[command(
    name = "filetally",
    version,
    about = "Recursively count files beneath a directory",
    long_about = "filetally walks the tree rooted at PATH and prints how many \
                  files it contains, counting every non-directory entry at \
                  every depth exactly once."
)]
struct Cli {
    /// Path to count under (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Follow symbolic links to directories instead of counting them
    #[arg(short = 'L', long)]
    follow_symlinks: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config = CountConfig::builder()
        .root(cli.path)
        .follow_symlinks(cli.follow_symlinks)
        .build()
        .context("Invalid configuration")?;

    let counter = WalkdirCounter::new();
    let report = counter.count(&config).context("Count failed")?;

    if report.root_found {
        println!(
            "Total number of files in '{}' (including subfolders): {}",
            report.root.display(),
            report.files
        );
    } else {
        println!(
            "Error: Directory '{}' does not exist.",
            report.root.display()
        );
    }

    Ok(())
}
