//! Result of one changelog run

use emojilog_changelog::Changelog;

/// What a run produced. Every variant maps to a file write and a zero exit.
#[derive(Debug)]
pub enum RunOutcome {
    /// Commits were found and rendered
    Rendered {
        changelog: Changelog,
        document: String,
    },
    /// No tag, no commits, or git could not be queried
    NothingToReport,
    /// Something else went wrong before a document could be produced
    Failed { diagnostic: String },
}

impl RunOutcome {
    /// Record an unexpected error, keeping its context chain
    pub fn failed(err: anyhow::Error) -> Self {
        Self::Failed {
            diagnostic: format!("{:#}", err),
        }
    }

    /// Contents of the changelog file: the full document or nothing
    pub fn file_contents(&self) -> &str {
        match self {
            Self::Rendered { document, .. } => document,
            Self::NothingToReport | Self::Failed { .. } => "",
        }
    }

    pub fn changelog(&self) -> Option<&Changelog> {
        match self {
            Self::Rendered { changelog, .. } => Some(changelog),
            _ => None,
        }
    }
}
