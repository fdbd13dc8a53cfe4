//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{DEFAULT_CHANGELOG_FILE, DEFAULT_DESCRIBE_FROM, DEFAULT_GIT_PROGRAM, DEFAULT_HEAD};

/// Main configuration for emojilog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog output configuration
    pub changelog: ChangelogConfig,

    /// Git invocation configuration
    pub git: GitConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path, overwritten on every run
    pub file: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
        }
    }
}

/// Git configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Git executable
    pub program: String,

    /// Revision whose nearest tag starts the range
    pub describe_from: String,

    /// Revision that ends the range
    pub head: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_GIT_PROGRAM.to_string(),
            describe_from: DEFAULT_DESCRIBE_FROM.to_string(),
            head: DEFAULT_HEAD.to_string(),
        }
    }
}
