//! Walkdir-based sequential directory counter.

use std::path::{Path, PathBuf};
use std::time::Instant;

use walkdir::WalkDir;

use filetally_core::{CountConfig, CountError, CountReport};

/// Counter built on walkdir's depth-first traversal.
pub struct WalkdirCounter;

impl WalkdirCounter {
    /// Create a new counter.
    pub fn new() -> Self {
        Self
    }

    /// Count every non-directory entry reachable from the configured root.
    ///
    /// A root that does not exist is not an error: the report comes back
    /// with zero files and `root_found` cleared. Directories (the root
    /// included) are traversed, never counted.
    ///
    /// Symbolic links are counted as entries under the default policy.
    /// With `follow_symlinks` set, links to directories are descended into
    /// instead; a link cycle then surfaces as [`CountError::SymlinkCycle`].
    /// Any other traversal fault (permission denial, I/O error) aborts the
    /// count and propagates to the caller.
    pub fn count(&self, config: &CountConfig) -> Result<CountReport, CountError> {
        let start = Instant::now();

        if !config.root.exists() {
            return Ok(CountReport::missing(&config.root));
        }

        // min_depth(1) keeps the root entry itself out of the total; a
        // root that is a regular file therefore counts as 0.
        let walker = WalkDir::new(&config.root)
            .follow_links(config.follow_symlinks)
            .min_depth(1);

        let mut files: u64 = 0;
        for entry in walker {
            let entry = entry.map_err(|err| walk_error(&config.root, err))?;
            if !entry.file_type().is_dir() {
                files += 1;
            }
        }

        Ok(CountReport::new(&config.root, files, start.elapsed()))
    }
}

impl Default for WalkdirCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Count files under `root` with the default configuration.
pub fn count_files(root: impl Into<PathBuf>) -> Result<CountReport, CountError> {
    WalkdirCounter::new().count(&CountConfig::new(root))
}

/// Map a walkdir error onto the count error taxonomy.
fn walk_error(root: &Path, err: walkdir::Error) -> CountError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());

    if err.loop_ancestor().is_some() {
        return CountError::SymlinkCycle { path };
    }

    match err.into_io_error() {
        Some(io) => CountError::io(path, io),
        None => CountError::Other {
            message: format!("Traversal failed at {}", path.display()),
        },
    }
}
