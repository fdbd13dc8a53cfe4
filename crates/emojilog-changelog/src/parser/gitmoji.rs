//! Gitmoji commit parser

use tracing::{debug, warn};

use super::tokenizer::tokenize;
use super::CommitParser;
use crate::types::{Category, ParsedCommit, PROJECT_MODULE, SKIP_MARKER};
use emojilog_git::CommitLine;

/// Parser for `<hash> [module] :marker: message` summaries
#[derive(Debug, Clone, Copy, Default)]
pub struct GitmojiParser;

impl GitmojiParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }
}

impl CommitParser for GitmojiParser {
    fn parse(&self, commit: &CommitLine) -> Option<ParsedCommit> {
        let tokens = tokenize(commit.as_str())?;

        if tokens.marker_name() == Some(SKIP_MARKER) {
            debug!(hash = %tokens.hash, "skipping bookkeeping commit");
            return None;
        }

        if tokens.dropped_words > 0 {
            warn!(
                hash = %tokens.hash,
                dropped = tokens.dropped_words,
                "marker is not at the start of the message, preceding words dropped"
            );
        }

        let category = Category::from_marker(tokens.marker_name());

        Some(ParsedCommit {
            hash: tokens.hash,
            module: tokens
                .module
                .unwrap_or_else(|| PROJECT_MODULE.to_string()),
            category,
            message: tokens.message,
        })
    }
}
