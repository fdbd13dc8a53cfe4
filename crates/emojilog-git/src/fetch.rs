//! Commit range queries

use tracing::{debug, error, info, instrument, warn};

use emojilog_core::config::GitConfig;
use emojilog_core::error::GitError;

use crate::runner::{GitRunner, Result};
use crate::types::CommitLine;

/// Lists the commits made since the previous tag
pub struct CommitFetcher<R> {
    runner: R,
    describe_from: String,
    head: String,
}

impl<R: GitRunner> CommitFetcher<R> {
    /// Create a fetcher for the `HEAD^`-tag to `HEAD` range
    pub fn new(runner: R) -> Self {
        Self::with_config(runner, &GitConfig::default())
    }

    /// Create a fetcher using the revisions from configuration
    pub fn with_config(runner: R, config: &GitConfig) -> Self {
        Self {
            runner,
            describe_from: config.describe_from.clone(),
            head: config.head.clone(),
        }
    }

    /// Find the most recent tag reachable from the start revision.
    ///
    /// Returns `Ok(None)` when the history contains no tag at all.
    #[instrument(skip(self), fields(from = %self.describe_from))]
    pub fn previous_tag(&self) -> Result<Option<String>> {
        let result = self
            .runner
            .run(&["describe", "--tags", self.describe_from.as_str(), "--abbrev=0"]);

        match result {
            Ok(tag) if tag.is_empty() => Ok(None),
            Ok(tag) => {
                debug!(tag = %tag, "found previous tag");
                Ok(Some(tag))
            }
            Err(err) if is_missing_tag(&err) => {
                info!("no tag found in history");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// List one-line summaries for `<tag>..<head>`, in git's log order
    #[instrument(skip(self), fields(head = %self.head))]
    pub fn commits_since(&self, tag: &str) -> Result<Vec<CommitLine>> {
        let range = format!("{}..{}", tag, self.head);
        let output = self
            .runner
            .run(&["log", range.as_str(), "--oneline", "--no-decorate", "--no-color"])?;

        let commits: Vec<CommitLine> = output
            .lines()
            .map(CommitLine::from)
            .filter(|line| !line.is_blank())
            .collect();

        debug!(range = %range, count = commits.len(), "listed commits");
        Ok(commits)
    }

    /// Fetch commits since the previous tag.
    ///
    /// Never fails: a git failure is logged and reported as no commits.
    #[instrument(skip(self))]
    pub fn fetch(&self) -> Vec<CommitLine> {
        let tag = match self.previous_tag() {
            Ok(Some(tag)) => tag,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log_failure(&err);
                return Vec::new();
            }
        };

        match self.commits_since(&tag) {
            Ok(commits) => {
                info!(tag = %tag, count = commits.len(), "fetched commits since tag");
                commits
            }
            Err(err) => {
                log_failure(&err);
                Vec::new()
            }
        }
    }
}

/// `git describe` reports an untagged history as a fatal error
fn is_missing_tag(err: &GitError) -> bool {
    err.stderr().is_some_and(|stderr| {
        stderr.contains("No names found") || stderr.contains("No tags can describe")
    })
}

fn log_failure(err: &GitError) {
    match err {
        GitError::CommandFailed {
            command,
            status,
            stderr,
        } => error!(command = %command, status = ?status, stderr = %stderr, "git command failed"),
        GitError::Spawn { command, source } => {
            error!(command = %command, error = %source, "failed to run git")
        }
        GitError::InvalidOutput { command } => {
            warn!(command = %command, "git output was not valid UTF-8")
        }
    }
}
