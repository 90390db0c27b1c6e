//! Count configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for a counting run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CountConfig {
    /// Root path to count under, kept exactly as given by the caller.
    pub root: PathBuf,

    /// Follow symbolic links to directories instead of counting the link
    /// itself as an entry.
    ///
    /// Off by default: with the default policy a symlink is a
    /// non-directory entry and contributes one to the total.
    #[builder(default = "false")]
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl CountConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        Ok(())
    }
}

impl CountConfig {
    /// Create a new count config builder.
    pub fn builder() -> CountConfigBuilder {
        CountConfigBuilder::default()
    }

    /// Create a simple config for counting under a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_symlinks: false,
        }
    }
}

impl Default for CountConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = CountConfig::builder()
            .root("/home/user")
            .follow_symlinks(true)
            .build()
            .unwrap();

        assert_eq!(config.root, PathBuf::from("/home/user"));
        assert!(config.follow_symlinks);
    }

    #[test]
    fn test_config_simple() {
        let config = CountConfig::new("/home/user");
        assert_eq!(config.root, PathBuf::from("/home/user"));
        assert!(!config.follow_symlinks);
    }

    #[test]
    fn test_builder_rejects_empty_root() {
        let result = CountConfig::builder().root("").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_requires_root() {
        let result = CountConfig::builder().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_default_root_is_current_dir() {
        let config = CountConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert!(!config.follow_symlinks);
    }
}
