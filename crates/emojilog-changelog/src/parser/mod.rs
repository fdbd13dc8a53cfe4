//! Commit parsing

mod gitmoji;
mod tokenizer;

pub use gitmoji::GitmojiParser;
pub use tokenizer::{tokenize, CommitTokens, Marker};

use crate::types::ParsedCommit;
use emojilog_git::CommitLine;

/// Trait for commit parsers
pub trait CommitParser: Send + Sync {
    /// Parse a commit line, or `None` if it must not appear in the changelog
    fn parse(&self, commit: &CommitLine) -> Option<ParsedCommit>;
}
