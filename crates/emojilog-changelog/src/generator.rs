//! Changelog generation

use emojilog_git::CommitLine;
use tracing::{debug, info, instrument};

use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::parser::{CommitParser, GitmojiParser};
use crate::types::Changelog;

/// Changelog generator
pub struct ChangelogGenerator {
    parser: Box<dyn CommitParser>,
    formatter: Box<dyn ChangelogFormatter>,
}

impl ChangelogGenerator {
    /// Create a new generator with the gitmoji parser and markdown formatter
    pub fn new() -> Self {
        Self {
            parser: Box::new(GitmojiParser::new()),
            formatter: Box::new(MarkdownFormatter::new()),
        }
    }

    /// Use a custom parser
    pub fn with_parser<P: CommitParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Group commits by module and category
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate(&self, commits: &[CommitLine]) -> Changelog {
        info!(commit_count = commits.len(), "generating changelog");

        let changelog: Changelog = commits
            .iter()
            .filter_map(|commit| self.parser.parse(commit))
            .collect();

        debug!(
            entries = changelog.len(),
            skipped = commits.len() - changelog.len(),
            "changelog grouped"
        );
        changelog
    }

    /// Format a changelog to string
    pub fn format(&self, changelog: &Changelog) -> String {
        self.formatter.format(changelog)
    }

    /// Generate and format in one step
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate_formatted(&self, commits: &[CommitLine]) -> String {
        let changelog = self.generate(commits);
        self.format(&changelog)
    }
}

impl Default for ChangelogGenerator {
    fn default() -> Self {
        Self::new()
    }
}
