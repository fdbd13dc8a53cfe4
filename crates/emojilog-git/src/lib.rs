//! Emojilog Git - commit history queries for changelog generation
//!
//! This crate shells out to the system `git` to find the previous tag and
//! list the commits made since then.

mod fetch;
mod runner;
pub mod types;

pub use fetch::CommitFetcher;
pub use runner::{GitRunner, Result, SystemGit};
pub use types::CommitLine;
