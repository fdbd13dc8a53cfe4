//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use crate::types::Changelog;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render a changelog to a document
    fn format(&self, changelog: &Changelog) -> String;
}
