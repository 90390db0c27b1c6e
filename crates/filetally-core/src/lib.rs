//! Core types for filetally.
//!
//! This crate provides the configuration, error, and report types shared
//! between the counting engine and the command-line binary.

mod config;
mod error;
mod report;

pub use config::{CountConfig, CountConfigBuilder};
pub use error::CountError;
pub use report::CountReport;
