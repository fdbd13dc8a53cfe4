//! Emojilog Core - shared foundations for the changelog pipeline
//!
//! This crate provides the error types and configuration handling used by
//! the git, changelog and CLI crates.

pub mod config;
pub mod error;

pub use config::{ChangelogConfig, Config, GitConfig};
pub use error::{ChangelogError, ConfigError, EmojilogError, GitError, Result};
