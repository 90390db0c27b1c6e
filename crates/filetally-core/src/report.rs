//! Count results.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Outcome of one full traversal rooted at a single path.
///
/// The report carries the root exactly as the caller spelled it, so it can
/// be echoed back verbatim. A missing root and an empty directory both
/// yield a zero count; `root_found` tells them apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountReport {
    /// Root the traversal started from, as given by the caller.
    pub root: PathBuf,
    /// Number of non-directory entries found.
    pub files: u64,
    /// Whether the root existed at the time of the call.
    pub root_found: bool,
    /// Wall-clock time the traversal took.
    pub duration: Duration,
}

impl CountReport {
    /// Create a report for a completed traversal.
    pub fn new(root: impl Into<PathBuf>, files: u64, duration: Duration) -> Self {
        Self {
            root: root.into(),
            files,
            root_found: true,
            duration,
        }
    }

    /// Create a report for a root that did not exist.
    pub fn missing(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: 0,
            root_found: false,
            duration: Duration::ZERO,
        }
    }
}
