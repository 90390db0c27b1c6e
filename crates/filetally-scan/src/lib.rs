//! Directory counting engine for filetally.
//!
//! This crate walks a directory tree and counts the non-directory entries
//! it contains, using walkdir for sequential depth-first traversal.
//!
//! # Overview
//!
//! `filetally-scan` is responsible for the single operation this project
//! exists for: a full recursive descent from a root path that sums every
//! entry which is not a directory. Key points:
//!
//! - **Sequential traversal** via walkdir, one directory listing at a time
//! - **Explicit symlink policy** instead of an inherited default
//! - **Missing root recovered locally** as a zero-count report, never an error
//!
//! # Example
//!
//! ```rust,no_run
//! use filetally_scan::{CountConfig, WalkdirCounter};
//!
//! let config = CountConfig::new("/path/to/count");
//! let counter = WalkdirCounter::new();
//! let report = counter.count(&config).unwrap();
//!
//! println!("Total files: {}", report.files);
//! ```

mod walker;

pub use walker::{WalkdirCounter, count_files};

// Re-export core types for convenience
pub use filetally_core::{CountConfig, CountError, CountReport};
