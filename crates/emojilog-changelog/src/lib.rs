//! Emojilog Changelog - gitmoji commit parsing and changelog generation
//!
//! Commit summaries are tokenized into a hash, an optional `[module]` and an
//! optional `:marker:`, bucketed by module and category, then rendered as
//! Markdown.

pub mod formatter;
pub mod generator;
pub mod parser;
pub mod types;

pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use generator::ChangelogGenerator;
pub use parser::{CommitParser, GitmojiParser};
pub use types::{Category, ChangeEntry, Changelog, ModuleChanges, ParsedCommit};
